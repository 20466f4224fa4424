//! Drag-and-drop support: images dropped onto the window get decoded.
//!
//! Dropped files arrive through egui's input events, so unlike the file
//! dialogs there is nothing to mock; tests exercise the loaders directly.

use egui::Context;

use super::image_data::ImageData;

/// Returns the first image among the files dropped this frame.
///
/// Non-image files are skipped with a log entry. Returns `None` when
/// nothing was dropped or none of the dropped files decodes as an image.
pub fn handle_dropped_files(ctx: &Context) -> Option<ImageData> {
    let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
    if dropped_files.is_empty() {
        return None;
    }

    log::debug!("{} file(s) dropped onto the window", dropped_files.len());

    for file in &dropped_files {
        if let Some(image) = load_dropped_file(file) {
            return Some(image);
        }
        log::warn!("Dropped file {:?} is not a readable image", file.name);
    }
    None
}

/// Loads image data from a dropped file, preferring the filesystem path.
///
/// The winit backend reports a path on native targets; the bytes branch
/// covers backends that hand over file contents instead.
fn load_dropped_file(file: &egui::DroppedFile) -> Option<ImageData> {
    if let Some(path) = &file.path {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                log::warn!("Failed to read dropped file {:?}: {}", path, e);
                return None;
            }
        };
        return load_image_from_bytes(&bytes);
    }

    if let Some(bytes) = &file.bytes {
        return load_image_from_bytes(bytes);
    }

    log::warn!(
        "Dropped file {:?} came with neither a path nor contents",
        file.name
    );
    None
}

/// Decodes raw file contents into RGBA image data.
fn load_image_from_bytes(bytes: &[u8]) -> Option<ImageData> {
    use image::GenericImageView;

    let img = match image::load_from_memory(bytes) {
        Ok(img) => img,
        Err(e) => {
            log::debug!("Failed to decode dropped file as an image: {}", e);
            return None;
        }
    };

    let (width, height) = img.dimensions();
    let rgba_bytes = img.to_rgba8().into_raw();

    log::info!(
        "Loaded dropped image: {}x{}, {} bytes",
        width,
        height,
        rgba_bytes.len()
    );

    Some(ImageData::new(width as usize, height as usize, rgba_bytes))
}
