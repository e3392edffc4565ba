//! reel core library
//!
//! Minimal screen recording: capture the primary display, downsample each
//! frame to an H.264 profile-compatible size, and encode an Annex B
//! elementary stream.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────┐    ┌─────────────────┐
//! │ Display Capture │───▶│ Lanczos3     │───▶│ H.264 Encode    │
//! │ (xcap)          │    │ Downscale    │    │ (OpenH264)      │
//! └─────────────────┘    └──────────────┘    └─────────────────┘
//! ```
//!
//! The output resolution is selected once at startup by
//! [`profile::best_size_for_profile`], which matches the display's native
//! resolution against the fixed table of sizes the target H.264 profile
//! level allows.

pub mod capture;
pub mod config;
pub mod encode;
pub mod error;
pub mod profile;
pub mod recorder;
pub mod scale;
pub mod types;

pub use config::RecorderConfig;
pub use error::{ReelError, Result};
pub use profile::{H264_SUPPORTED_PROFILE, best_size_for_profile};
pub use recorder::{Recorder, RecorderStats};
pub use types::Resolution;
