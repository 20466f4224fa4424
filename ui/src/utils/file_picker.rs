//! File dialogs for opening images and saving generated QR codes.
//!
//! This module provides trait-based abstractions for file dialog operations,
//! enabling mock implementations for testing without relying on system dialogs.
//!
//! The open dialog is triggered by a keyboard shortcut (Ctrl+O / Cmd+O) or a
//! UI button. When a user selects an image file, it is loaded and returned as
//! `ImageData`.

use std::path::PathBuf;

use super::image_data::ImageData;

/// Trait for file dialog operations, enabling mock implementations for testing.
pub trait FilePickerHandler {
    /// Show an open dialog and return the selected image, decoded.
    fn pick_image(&self) -> Option<ImageData>;

    /// Show a save dialog and return the chosen path for a PNG file.
    fn save_png(&self, suggested_name: &str) -> Option<PathBuf>;
}

/// Default handler using the system file dialogs.
#[derive(Default)]
pub struct SystemFilePickerHandler;

impl FilePickerHandler for SystemFilePickerHandler {
    fn pick_image(&self) -> Option<ImageData> {
        pick_image_file()
    }

    fn save_png(&self, suggested_name: &str) -> Option<PathBuf> {
        use rfd::FileDialog;

        FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_title("Save QR code")
            .set_file_name(suggested_name)
            .save_file()
    }
}

/// Returns true when the open shortcut (Ctrl+O / Cmd+O) was pressed this frame.
pub fn open_shortcut_pressed(ctx: &egui::Context) -> bool {
    let pressed = ctx.input(|i| i.key_pressed(egui::Key::O) && i.modifiers.command_only());
    if pressed {
        log::debug!("File picker shortcut detected (Ctrl+O / Cmd+O)");
    }
    pressed
}

/// Opens a native file dialog to pick an image file.
///
/// # Returns
///
/// The selected `ImageData` if an image file was successfully loaded.
pub fn pick_image_file() -> Option<ImageData> {
    use rfd::FileDialog;

    let file_path = FileDialog::new()
        .add_filter(
            "Image",
            &[
                "png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "tiff", "tif",
            ],
        )
        .set_title("Select an image")
        .pick_file()?;

    log::info!("User selected file: {:?}", file_path);

    load_image_from_path(&file_path)
}

/// Loads an image from a file path.
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Returns
///
/// The `ImageData` if the file is a valid image.
fn load_image_from_path(path: &std::path::Path) -> Option<ImageData> {
    use image::GenericImageView;
    use std::fs;

    log::debug!("Loading image from path: {:?}", path);

    let bytes = match fs::read(path) {
        Ok(b) => {
            log::debug!("Read {} bytes from file", b.len());
            b
        }
        Err(e) => {
            log::warn!("Failed to read file {:?}: {}", path, e);
            return None;
        }
    };

    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => {
            log::warn!("Failed to decode image from file {:?}: {}", path, e);
            return None;
        }
    };

    let (width, height) = img.dimensions();
    let rgba = img.to_rgba8();
    let rgba_bytes = rgba.into_raw();

    log::info!(
        "Loaded image from file picker: {}x{}, {} bytes",
        width,
        height,
        rgba_bytes.len()
    );

    Some(ImageData::new(width as usize, height as usize, rgba_bytes))
}
