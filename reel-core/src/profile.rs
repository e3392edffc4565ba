//! H.264 profile-level size selection
//!
//! An H.264 profile level restricts the set of frame sizes the encoder may be
//! configured with. Given the native resolution of the captured display,
//! [`best_size_for_profile`] picks the best-fitting entry from a fixed table
//! of level-supported sizes.
//!
//! Selection rules, in iteration order over the table:
//! 1. an exact match wins immediately;
//! 2. a candidate that is strictly smaller than the source in both dimensions
//!    and preserves its aspect ratio (scale-factor difference below 0.0001)
//!    wins immediately;
//! 3. otherwise the candidate with the smallest scale-factor difference seen
//!    across the whole table wins, earlier entries taking precedence on ties.
//!
//! The fallback in rule 3 deliberately does not require the candidate to be
//! smaller than the source, so for small or oddly shaped sources the selected
//! size can exceed the source in one or both dimensions.

use crate::error::{ReelError, Result};
use crate::types::Resolution;

/// The H.264 profile level this recorder targets by default.
pub const H264_SUPPORTED_PROFILE: &str = "3.1";

/// Scale-factor difference below which a downscale counts as
/// aspect-ratio-preserving.
const RATIO_EPSILON: f64 = 0.0001;

/// Frame sizes allowed at level 3.1, in selection-priority order.
const LEVEL_3_1_SIZES: [Resolution; 3] = [
    Resolution::new(1280, 720),
    Resolution::new(720, 576),
    Resolution::new(720, 480),
];

/// Look up the ordered candidate sizes for a profile level.
///
/// Returns `None` for levels the recorder has no size table for.
pub fn supported_sizes(profile: &str) -> Option<&'static [Resolution]> {
    match profile {
        "3.1" => Some(&LEVEL_3_1_SIZES),
        _ => None,
    }
}

/// Find the best encoder frame size for `profile` given the `source`
/// resolution.
///
/// Pure function over the constant size table; fails only with
/// [`ReelError::UnsupportedProfile`] when `profile` is unknown. A degenerate
/// `0x0` source makes every candidate's scale-factor difference zero, so the
/// first table entry is returned.
pub fn best_size_for_profile(profile: &str, source: Resolution) -> Result<Resolution> {
    let sizes = supported_sizes(profile)
        .ok_or_else(|| ReelError::UnsupportedProfile(profile.to_string()))?;

    let mut min_ratio_diff = f64::INFINITY;
    let mut min_ratio_size = Resolution::new(0, 0);
    for &size in sizes {
        if size == source {
            return Ok(size);
        }
        let h_ratio = source.width as f64 / size.width as f64;
        let v_ratio = source.height as f64 / size.height as f64;
        let ratio_diff = (h_ratio - v_ratio).abs();
        if size.is_lower_than(source) && ratio_diff < RATIO_EPSILON {
            return Ok(size);
        } else if ratio_diff < min_ratio_diff {
            min_ratio_diff = ratio_diff;
            min_ratio_size = size;
        }
    }
    Ok(min_ratio_size)
}
