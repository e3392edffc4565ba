//! Primary-display capture
//!
//! Wraps `xcap` behind the [`FrameSource`] trait so the recorder loop can be
//! driven by synthetic frames in tests.
//!
//! Capture failures are per-frame affairs (compositor busy, permission lost
//! mid-session); the recorder logs them and skips the iteration.

use image::RgbaImage;
use tracing::debug;
use xcap::Monitor;

use crate::error::{ReelError, Result};
use crate::types::Resolution;

/// Something the recorder can pull frames from.
pub trait FrameSource {
    /// Native resolution of the source
    fn resolution(&self) -> Resolution;

    /// Capture the next frame
    fn capture_frame(&mut self) -> Result<RgbaImage>;
}

/// Information about an attached display
#[derive(Debug, Clone)]
pub struct DisplayInfo {
    /// Display name as reported by the OS
    pub name: String,
    /// Native resolution
    pub resolution: Resolution,
    /// Whether this is the primary display
    pub primary: bool,
}

impl std::fmt::Display for DisplayInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.resolution)?;
        if self.primary {
            write!(f, " [primary]")?;
        }
        Ok(())
    }
}

/// List all attached displays
pub fn list_displays() -> Result<Vec<DisplayInfo>> {
    let monitors = Monitor::all()?;
    Ok(monitors
        .iter()
        .map(|m| DisplayInfo {
            name: m.name().to_string(),
            resolution: Resolution::new(m.width(), m.height()),
            primary: m.is_primary(),
        })
        .collect())
}

/// The primary display as a frame source
pub struct PrimaryDisplay {
    monitor: Monitor,
    name: String,
    resolution: Resolution,
}

impl PrimaryDisplay {
    /// Open the primary display, falling back to the first attached one when
    /// the OS does not mark any display as primary.
    pub fn open() -> Result<Self> {
        let monitors = Monitor::all()?;
        let monitor = monitors
            .iter()
            .find(|m| m.is_primary())
            .or_else(|| monitors.first())
            .cloned()
            .ok_or_else(|| ReelError::capture("No displays found"))?;

        let name = monitor.name().to_string();
        let resolution = Resolution::new(monitor.width(), monitor.height());
        debug!("Opened display {} at {}", name, resolution);

        Ok(Self {
            monitor,
            name,
            resolution,
        })
    }

    /// Display name as reported by the OS
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FrameSource for PrimaryDisplay {
    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn capture_frame(&mut self) -> Result<RgbaImage> {
        let shot = self.monitor.capture_image()?;
        let (width, height) = (shot.width(), shot.height());
        // Rebuild through raw bytes rather than relying on xcap and our image
        // dependency resolving to the same ImageBuffer type.
        RgbaImage::from_raw(width, height, shot.into_raw())
            .ok_or_else(|| ReelError::capture("Captured frame has inconsistent dimensions"))
    }
}
