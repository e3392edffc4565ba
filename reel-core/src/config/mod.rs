//! Configuration types for reel
//!
//! Runtime recorder settings plus the on-disk configuration file.

mod file;

pub use file::{ConfigFile, sample_config};

use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{ReelError, Result};
use crate::profile::H264_SUPPORTED_PROFILE;
use crate::types::Resolution;

/// Complete recorder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// H.264 profile level whose size table constrains the output resolution
    pub profile: String,
    /// Target framerate
    pub fps: u32,
    /// Bitrate in kbps (0 = auto from output resolution)
    pub bitrate: u32,
    /// Elementary-stream output path (None = in-memory buffer)
    pub output: Option<PathBuf>,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            profile: H264_SUPPORTED_PROFILE.to_string(),
            fps: 60,
            bitrate: 0,
            output: None,
        }
    }
}

impl RecorderConfig {
    /// Create a config with defaults (level 3.1, 60 fps, auto bitrate,
    /// in-memory output)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the H.264 profile level
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set the target framerate
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Set the bitrate in kbps
    pub fn with_bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate = bitrate;
        self
    }

    /// Set the output file path
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Get the effective bitrate in kbps for an output resolution.
    ///
    /// Uses the configured value when set, otherwise estimates from pixel
    /// throughput at roughly 0.07 bits per pixel.
    pub fn effective_bitrate(&self, output: Resolution) -> u32 {
        if self.bitrate > 0 {
            return self.bitrate;
        }
        let pixels_per_second = output.pixels() * self.fps as u64;
        ((pixels_per_second * 7) / 100_000).max(500) as u32
    }

    /// Validate settings that cannot work at all
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(ReelError::config("Framerate cannot be zero"));
        }
        if self.fps > 240 {
            return Err(ReelError::config(format!(
                "Framerate {} exceeds maximum supported (240)",
                self.fps
            )));
        }
        Ok(())
    }

    /// Open the configured output sink.
    ///
    /// A path gets a buffered file writer; no path means the stream
    /// accumulates in memory and is discarded on exit.
    pub fn open_sink(&self) -> Result<Box<dyn Write + Send>> {
        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                let file = std::fs::File::create(path)?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(Vec::<u8>::new())),
        }
    }
}
