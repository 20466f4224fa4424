//! Full-screen capture using the `xcap` crate.

use image::RgbaImage;
use xcap::Monitor;

/// A full-screen grab plus the monitor's display scale factor.
pub struct Screenshot {
    pub image: RgbaImage,
    /// Physical pixels per logical point on the captured monitor.
    pub scale: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("Failed to enumerate monitors: {0}")]
    MonitorEnumeration(String),

    #[error("No monitor available to capture")]
    NoMonitor,

    #[error("Screen capture failed: {0}")]
    CaptureFailed(String),
}

/// Captures the primary monitor's screen.
///
/// Returns the full-screen screenshot and the monitor's scale factor,
/// which maps logical overlay coordinates back to physical pixels.
/// The caller is responsible for cropping to the user's selection.
pub fn capture_primary() -> Result<Screenshot, ScreenError> {
    let monitors = Monitor::all().map_err(|e| ScreenError::MonitorEnumeration(e.to_string()))?;

    let monitor = monitors
        .into_iter()
        .find(|m| m.is_primary().unwrap_or(false))
        .or_else(|| {
            // Fallback: if no monitor reports as primary, use the first one
            let all = Monitor::all().ok()?;
            all.into_iter().next()
        })
        .ok_or(ScreenError::NoMonitor)?;

    let scale = monitor.scale_factor().unwrap_or(1.0);
    let image = monitor
        .capture_image()
        .map_err(|e| ScreenError::CaptureFailed(e.to_string()))?;

    log::info!(
        "Captured {}x{} screenshot at scale factor {scale}",
        image.width(),
        image.height()
    );

    Ok(Screenshot { image, scale })
}
