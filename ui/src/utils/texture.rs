//! Conversions from `image` crate buffers into egui textures.

use egui::{Color32, ColorImage};
use image::{DynamicImage, GrayImage, RgbaImage};

/// Converts an RGBA buffer into an egui image, for example a raw screen
/// grab used as the capture overlay backdrop.
pub fn rgba_to_color_image(image: &RgbaImage) -> ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}

/// Converts any decoded image into an egui image for preview display.
pub fn dynamic_to_color_image(image: &DynamicImage) -> ColorImage {
    rgba_to_color_image(&image.to_rgba8())
}

/// Converts a grayscale buffer (a rendered QR code) into an egui image.
pub fn gray_to_color_image(image: &GrayImage) -> ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    let pixels = image
        .pixels()
        .map(|pixel| Color32::from_gray(pixel.0[0]))
        .collect();
    ColorImage::new(size, pixels)
}
