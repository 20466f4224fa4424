//! Clipboard handling utilities for paste operations.
//!
//! This module detects Ctrl+V (Cmd+V on macOS) paste events and reads
//! image data from the clipboard so it can be fed to the QR decoder.

use egui::Context;

use crate::utils::image_data::ImageData;

/// Handles the paste keyboard shortcut (Ctrl+V or Cmd+V) and reads an
/// image from the clipboard.
///
/// Returns the clipboard image when a paste shortcut was pressed this
/// frame and the clipboard holds image data. A paste with no image in
/// the clipboard is not an error; it just returns `None`.
///
/// # Arguments
/// * `ctx` - The egui context to check for input events
pub fn handle_paste_shortcut(ctx: &Context) -> Option<ImageData> {
    // Check for paste keyboard shortcut: Ctrl+V (Windows/Linux) or Cmd+V (macOS)
    // Using modifiers.command for cross-platform support. The winit backend
    // turns the shortcut into an `Event::Paste` when the clipboard holds
    // text, so accept that form as well.
    let paste_pressed = ctx.input(|i| {
        i.events.iter().any(|event| {
            matches!(event, egui::Event::Paste(_))
                || matches!(
                    event,
                    egui::Event::Key {
                        key: egui::Key::V,
                        pressed: true,
                        modifiers,
                        ..
                    } if modifiers.command
                )
        })
    });

    if paste_pressed {
        read_clipboard_image()
    } else {
        None
    }
}

/// Reads an image from the system clipboard.
///
/// If no image is found or an error occurs, appropriate messages are
/// logged and `None` is returned.
fn read_clipboard_image() -> Option<ImageData> {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.get_image() {
            Ok(image) => {
                log::info!(
                    "Clipboard image pasted: width={}, height={}, bytes={}",
                    image.width,
                    image.height,
                    image.bytes.len()
                );
                Some(ImageData::new(
                    image.width,
                    image.height,
                    image.bytes.into_owned(),
                ))
            }
            Err(arboard::Error::ContentNotAvailable) => {
                log::debug!(
                    "No image in clipboard - paste shortcut pressed but clipboard contains other content"
                );
                None
            }
            Err(e) => {
                log::warn!("Failed to read clipboard image: {e}");
                None
            }
        },
        Err(e) => {
            log::warn!("Failed to access clipboard: {e}");
            None
        }
    }
}
