//! Screen-region selection math.
//!
//! The overlay hands this module pointer positions in logical (DPI-scaled)
//! coordinates; it answers with an integer pixel region of the underlying
//! screenshot. Selections are normalized so the drag direction never
//! matters, gestures at or below [`MIN_DRAG_LOGICAL`] on either axis are
//! discarded as accidental clicks, and logical coordinates map to physical
//! pixels by flooring `logical * scale` per component.

use image::RgbaImage;
use thiserror::Error;

/// Minimum selection extent, logical pixels. At or below this on either
/// axis the gesture produces no region.
pub const MIN_DRAG_LOGICAL: f32 = 5.0;

/// Axis-aligned selection rectangle in logical coordinates, normalized so
/// `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalRect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl LogicalRect {
    fn from_corners(ax: f32, ay: f32, bx: f32, by: f32) -> Self {
        Self {
            min_x: ax.min(bx),
            min_y: ay.min(by),
            max_x: ax.max(bx),
            max_y: ay.max(by),
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Physical-pixel crop rectangle, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Drag gesture state driven by the overlay.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        start_x: f32,
        start_y: f32,
        current_x: f32,
        current_y: f32,
    },
}

impl DragState {
    /// Anchor a new selection at the pointer-down position.
    pub fn begin(&mut self, x: f32, y: f32) {
        *self = Self::Dragging {
            start_x: x,
            start_y: y,
            current_x: x,
            current_y: y,
        };
    }

    /// Track pointer motion; does nothing unless a drag is in progress.
    pub fn update(&mut self, x: f32, y: f32) {
        if let Self::Dragging {
            current_x,
            current_y,
            ..
        } = self
        {
            *current_x = x;
            *current_y = y;
        }
    }

    /// The normalized selection so far, while dragging.
    pub fn selection(&self) -> Option<LogicalRect> {
        match *self {
            Self::Idle => None,
            Self::Dragging {
                start_x,
                start_y,
                current_x,
                current_y,
            } => Some(LogicalRect::from_corners(start_x, start_y, current_x, current_y)),
        }
    }

    /// Complete the gesture at the pointer-up position and map it to
    /// physical pixels. Returns `None` for too-small selections and when
    /// no drag was in progress. Always resets to `Idle`.
    pub fn finish(&mut self, x: f32, y: f32, scale: f32) -> Option<CaptureRegion> {
        self.update(x, y);
        let selection = self.selection();
        *self = Self::Idle;
        selection.and_then(|rect| map_to_physical(rect, scale))
    }

    /// Abandon the gesture without producing a region.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Map a normalized logical selection to screenshot pixels.
///
/// Each component is floored independently, so a 100x50 logical selection
/// at (10, 10) under scale 2.0 becomes the pixel region (20, 20, 200, 100).
pub fn map_to_physical(rect: LogicalRect, scale: f32) -> Option<CaptureRegion> {
    if rect.width() <= MIN_DRAG_LOGICAL || rect.height() <= MIN_DRAG_LOGICAL {
        return None;
    }
    Some(CaptureRegion {
        x: (rect.min_x.max(0.0) * scale).floor() as u32,
        y: (rect.min_y.max(0.0) * scale).floor() as u32,
        width: (rect.width() * scale).floor() as u32,
        height: (rect.height() * scale).floor() as u32,
    })
}

/// Error type for cropping a region out of a screenshot.
#[derive(Debug, Error)]
pub enum CropError {
    /// After clamping to the screenshot bounds no pixels remain.
    #[error("region {x},{y} {width}x{height} lies outside the {image_width}x{image_height} screenshot")]
    EmptyRegion {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },
}

/// Crop `region` out of `image`, clamping to the image bounds first.
pub fn crop_region(image: &RgbaImage, region: CaptureRegion) -> Result<RgbaImage, CropError> {
    let (image_width, image_height) = image.dimensions();
    let empty = CropError::EmptyRegion {
        x: region.x,
        y: region.y,
        width: region.width,
        height: region.height,
        image_width,
        image_height,
    };
    if region.x >= image_width || region.y >= image_height {
        return Err(empty);
    }
    let width = region.width.min(image_width - region.x);
    let height = region.height.min(image_height - region.y);
    if width == 0 || height == 0 {
        return Err(empty);
    }
    Ok(image::imageops::crop_imm(image, region.x, region.y, width, height).to_image())
}
