//! QR encoding and decoding.
//!
//! Encoding renders through the `qrcode` crate into a grayscale image with
//! a fixed pixel block per module and a quiet zone, ready for both screen
//! preview and PNG export. Decoding runs `rqrr` over a grayscale view of
//! whatever image source the UI hands in.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{Color, QrCode};
use thiserror::Error;

/// Rendered pixels per QR module.
const MODULE_PIXELS: u32 = 8;
/// Quiet zone around the code, in modules.
const QUIET_ZONE_MODULES: u32 = 2;

/// Error type for QR encode/decode operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Empty or whitespace-only input, nothing to encode.
    #[error("nothing to encode")]
    EmptyInput,

    /// The input does not fit any QR code version.
    #[error("text does not fit in a QR code: {0:?}")]
    Encode(qrcode::types::QrError),

    /// The image contains no detectable QR code.
    #[error("no QR code found in the image")]
    NoQrFound,

    /// A QR code was detected but its payload could not be read.
    #[error("QR code detected but unreadable: {0}")]
    DecodeFailed(String),

    /// PNG serialization of a rendered code failed.
    #[error("could not encode PNG: {0}")]
    Png(#[from] image::ImageError),
}

/// Render `text` as a QR code image, dark modules black on white.
pub fn encode(text: &str) -> Result<GrayImage, CodecError> {
    if text.trim().is_empty() {
        return Err(CodecError::EmptyInput);
    }
    let code = QrCode::new(text.as_bytes()).map_err(CodecError::Encode)?;
    let modules = code.width() as u32;
    let side = (modules + 2 * QUIET_ZONE_MODULES) * MODULE_PIXELS;
    let colors = code.to_colors();

    let mut image = GrayImage::from_pixel(side, side, Luma([255]));
    for (index, color) in colors.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let module_x = index as u32 % modules;
        let module_y = index as u32 / modules;
        let origin_x = (module_x + QUIET_ZONE_MODULES) * MODULE_PIXELS;
        let origin_y = (module_y + QUIET_ZONE_MODULES) * MODULE_PIXELS;
        for dy in 0..MODULE_PIXELS {
            for dx in 0..MODULE_PIXELS {
                image.put_pixel(origin_x + dx, origin_y + dy, Luma([0]));
            }
        }
    }
    Ok(image)
}

/// Decode the first readable QR code in `image`.
///
/// When several codes are present the first one that decodes cleanly wins;
/// only if every detected grid fails is the failure reported.
pub fn decode(image: &DynamicImage) -> Result<String, CodecError> {
    let mut prepared = rqrr::PreparedImage::prepare(image.to_luma8());
    let grids = prepared.detect_grids();
    if grids.is_empty() {
        return Err(CodecError::NoQrFound);
    }
    let mut last_failure = None;
    for grid in grids {
        match grid.decode() {
            Ok((_meta, content)) => return Ok(content),
            Err(err) => last_failure = Some(err),
        }
    }
    Err(CodecError::DecodeFailed(
        last_failure.map(|err| err.to_string()).unwrap_or_default(),
    ))
}

/// PNG bytes of a rendered code, for the save dialog.
pub fn to_png_bytes(image: &GrayImage) -> Result<Vec<u8>, CodecError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
