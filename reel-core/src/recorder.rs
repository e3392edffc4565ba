//! The capture-downscale-encode loop
//!
//! Strictly sequential: capture a frame, resize it to the profile-fitted
//! output size, encode, flush, repeat. No queue and no backpressure; a failed
//! capture is logged and the iteration skipped. The loop checks a shared
//! cancellation flag every iteration and flushes the encoder on exit.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::capture::{FrameSource, PrimaryDisplay};
use crate::config::RecorderConfig;
use crate::encode::H264Encoder;
use crate::error::Result;
use crate::profile::best_size_for_profile;
use crate::scale;
use crate::types::Resolution;

/// Progress log cadence in frames (~5s at 60fps)
const LOG_INTERVAL_FRAMES: u64 = 300;

/// Records the primary display into an H.264 elementary stream
pub struct Recorder {
    config: RecorderConfig,
    source: Box<dyn FrameSource + Send>,
    encoder: H264Encoder,
    source_size: Resolution,
    output_size: Resolution,
    frames_captured: u64,
    frames_skipped: u64,
    start_time: Option<Instant>,
}

impl Recorder {
    /// Create a recorder capturing the primary display
    pub fn new(config: RecorderConfig) -> Result<Self> {
        let primary = PrimaryDisplay::open()?;
        info!("Recording display {}", primary.name());
        Self::with_source(config, Box::new(primary))
    }

    /// Create a recorder over an arbitrary frame source.
    ///
    /// Resolves the output size against the profile table once, up front;
    /// an unsupported profile is a startup error rather than something the
    /// loop discovers later.
    pub fn with_source(config: RecorderConfig, source: Box<dyn FrameSource + Send>) -> Result<Self> {
        config.validate()?;

        let source_size = source.resolution();
        let output_size = best_size_for_profile(&config.profile, source_size)?;
        info!(
            "Capture {} -> encode {} (profile level {})",
            source_size, output_size, config.profile
        );

        let sink = config.open_sink()?;
        let encoder = H264Encoder::new(&config, output_size, sink)?;

        Ok(Self {
            config,
            source,
            encoder,
            source_size,
            output_size,
            frames_captured: 0,
            frames_skipped: 0,
            start_time: None,
        })
    }

    /// The native resolution of the capture source
    pub fn source_size(&self) -> Resolution {
        self.source_size
    }

    /// The profile-fitted resolution frames are encoded at
    pub fn output_size(&self) -> Resolution {
        self.output_size
    }

    /// Run the capture loop until `cancel` is set.
    ///
    /// Frames are paced to the configured framerate; missed ticks are
    /// skipped rather than bursted. Returns the final statistics.
    pub async fn run(&mut self, cancel: Arc<AtomicBool>) -> Result<RecorderStats> {
        let interval = Duration::from_secs_f64(1.0 / self.config.fps as f64);
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.start_time = Some(Instant::now());
        info!("Recording started at {} fps", self.config.fps);

        while !cancel.load(Ordering::Relaxed) {
            ticker.tick().await;

            let frame = match self.source.capture_frame() {
                Ok(frame) => frame,
                Err(e) => {
                    warn!("Capture failed, skipping frame: {}", e);
                    self.frames_skipped += 1;
                    continue;
                }
            };

            let scaled = scale::downscale(&frame, self.output_size);
            self.encoder.encode(&scaled)?;
            self.encoder.flush()?;
            self.frames_captured += 1;

            if self.frames_captured % LOG_INTERVAL_FRAMES == 0 {
                let stats = self.stats();
                debug!(
                    "{} frames ({:.1} fps), {} skipped, {} bytes",
                    stats.frames_captured,
                    stats.actual_fps,
                    stats.frames_skipped,
                    stats.bytes_written
                );
            }
        }

        self.encoder.flush()?;
        let stats = self.stats();
        info!("Recording stopped - {}", stats);
        Ok(stats)
    }

    /// Current statistics snapshot
    pub fn stats(&self) -> RecorderStats {
        let elapsed = self
            .start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0);
        let frames = self.frames_captured;

        RecorderStats {
            source_size: self.source_size,
            output_size: self.output_size,
            frames_captured: frames,
            frames_skipped: self.frames_skipped,
            bytes_written: self.encoder.bytes_written(),
            elapsed_seconds: elapsed,
            actual_fps: if elapsed > 0.0 {
                frames as f64 / elapsed
            } else {
                0.0
            },
        }
    }
}

impl std::fmt::Debug for Recorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recorder")
            .field("config", &self.config)
            .field("source_size", &self.source_size)
            .field("output_size", &self.output_size)
            .field("frames_captured", &self.frames_captured)
            .field("frames_skipped", &self.frames_skipped)
            .field("start_time", &self.start_time)
            .finish_non_exhaustive()
    }
}

/// Recording statistics
#[derive(Debug, Clone)]
pub struct RecorderStats {
    /// Native capture resolution
    pub source_size: Resolution,
    /// Encoded resolution
    pub output_size: Resolution,
    /// Frames captured and encoded
    pub frames_captured: u64,
    /// Iterations skipped due to capture failures
    pub frames_skipped: u64,
    /// Elementary-stream bytes written
    pub bytes_written: u64,
    /// Wall-clock recording time in seconds
    pub elapsed_seconds: f64,
    /// Measured framerate
    pub actual_fps: f64,
}

impl std::fmt::Display for RecorderStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} frames in {:.1}s ({:.1} fps), {} skipped, {} -> {}, {} bytes",
            self.frames_captured,
            self.elapsed_seconds,
            self.actual_fps,
            self.frames_skipped,
            self.source_size,
            self.output_size,
            self.bytes_written
        )
    }
}
