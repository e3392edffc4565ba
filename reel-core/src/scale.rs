//! Frame downsampling
//!
//! Captured frames are resized to the encoder's frame size with Lanczos3
//! filtering, which holds up well for text-heavy screen content.

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::types::Resolution;

/// Resize `frame` to `target`, returning it untouched when the dimensions
/// already match.
pub fn downscale(frame: &RgbaImage, target: Resolution) -> RgbaImage {
    if frame.width() == target.width && frame.height() == target.height {
        return frame.clone();
    }
    imageops::resize(frame, target.width, target.height, FilterType::Lanczos3)
}
