//! H.264 encoding via OpenH264
//!
//! The encoder is configured once for a fixed frame size and framerate and
//! produces an Annex B elementary stream, appended to the configured sink
//! after every frame. Baseline profile at level 3.1 with the screen-content
//! real-time usage mode keeps latency low at the cost of compression.

use std::io::Write;

use image::RgbaImage;
use openh264::OpenH264API;
use openh264::encoder::{
    BitRate, Complexity, Encoder, EncoderConfig, FrameRate, Level, Profile, RateControlMode,
    UsageType,
};
use openh264::formats::{RgbaSliceU8, YUVBuffer};
use tracing::debug;

use crate::config::RecorderConfig;
use crate::error::{ReelError, Result};
use crate::types::Resolution;

/// H.264 elementary-stream encoder over a byte sink
pub struct H264Encoder {
    encoder: Encoder,
    resolution: Resolution,
    sink: Box<dyn Write + Send>,
    frames_encoded: u64,
    bytes_written: u64,
}

impl H264Encoder {
    /// Create an encoder for a fixed output resolution.
    ///
    /// Fails when OpenH264 rejects the parameters; callers should treat that
    /// as fatal at startup.
    pub fn new(
        config: &RecorderConfig,
        resolution: Resolution,
        sink: Box<dyn Write + Send>,
    ) -> Result<Self> {
        let bitrate_kbps = config.effective_bitrate(resolution);
        let encoder_config = EncoderConfig::new()
            .usage_type(UsageType::ScreenContentRealTime)
            .profile(Profile::Baseline)
            .level(Level::Level_3_1)
            .complexity(Complexity::Low)
            .rate_control_mode(RateControlMode::Bitrate)
            .bitrate(BitRate::from_bps(bitrate_kbps.saturating_mul(1000)))
            .max_frame_rate(FrameRate::from_hz(config.fps as f32));

        let encoder = Encoder::with_api_config(OpenH264API::from_source(), encoder_config)?;
        debug!(
            "Encoder configured: {} @ {}fps, {}kbps, baseline/3.1",
            resolution, config.fps, bitrate_kbps
        );

        Ok(Self {
            encoder,
            resolution,
            sink,
            frames_encoded: 0,
            bytes_written: 0,
        })
    }

    /// The frame size this encoder accepts
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Encode one frame and append its Annex B units to the sink.
    ///
    /// Returns the number of bytes produced for this frame (0 when the
    /// encoder skips it).
    pub fn encode(&mut self, frame: &RgbaImage) -> Result<usize> {
        if frame.width() != self.resolution.width || frame.height() != self.resolution.height {
            return Err(ReelError::encoder(format!(
                "Frame is {}x{} but encoder expects {}",
                frame.width(),
                frame.height(),
                self.resolution
            )));
        }

        let rgba = RgbaSliceU8::new(
            frame.as_raw(),
            (self.resolution.width as usize, self.resolution.height as usize),
        );
        let yuv = YUVBuffer::from_rgb_source(rgba);
        let bitstream = self.encoder.encode(&yuv)?;
        let data = bitstream.to_vec();

        self.sink.write_all(&data)?;
        self.frames_encoded += 1;
        self.bytes_written += data.len() as u64;
        Ok(data.len())
    }

    /// Flush the sink
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Number of frames encoded so far
    pub fn frames_encoded(&self) -> u64 {
        self.frames_encoded
    }

    /// Total stream bytes written to the sink
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}
