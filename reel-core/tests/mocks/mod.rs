//! Mock infrastructure for testing
//!
//! Provides a synthetic frame source so the recorder loop can run without a
//! display. The source can trip a shared cancellation flag after a fixed
//! number of captures, which keeps loop tests deterministic.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use image::RgbaImage;
use reel_core::capture::FrameSource;
use reel_core::error::{ReelError, Result};
use reel_core::types::Resolution;

/// Create a test frame with a diagonal gradient pattern
pub fn create_gradient_frame(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let r = ((x as f32 / width as f32) * 255.0) as u8;
        let g = ((y as f32 / height as f32) * 255.0) as u8;
        let b = (((x + y) as f32 / (width + height) as f32) * 255.0) as u8;
        image::Rgba([r, g, b, 255])
    })
}

/// Frame source producing gradient frames on demand
pub struct SyntheticSource {
    resolution: Resolution,
    captures: u64,
    /// Every Nth capture fails (0 = never)
    fail_every: u64,
    /// Set the flag once this many captures have been served
    cancel_after: Option<(u64, Arc<AtomicBool>)>,
}

impl SyntheticSource {
    /// Create a source that always succeeds
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            captures: 0,
            fail_every: 0,
            cancel_after: None,
        }
    }

    /// Make every Nth capture fail
    pub fn failing_every(mut self, n: u64) -> Self {
        self.fail_every = n;
        self
    }

    /// Trip `flag` once `n` captures (successful or not) have happened
    pub fn cancelling_after(mut self, n: u64, flag: Arc<AtomicBool>) -> Self {
        self.cancel_after = Some((n, flag));
        self
    }
}

impl FrameSource for SyntheticSource {
    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn capture_frame(&mut self) -> Result<RgbaImage> {
        self.captures += 1;
        if let Some((after, flag)) = &self.cancel_after {
            if self.captures >= *after {
                flag.store(true, Ordering::Relaxed);
            }
        }
        if self.fail_every > 0 && self.captures % self.fail_every == 0 {
            return Err(ReelError::capture("synthetic capture failure"));
        }
        Ok(create_gradient_frame(
            self.resolution.width,
            self.resolution.height,
        ))
    }
}
