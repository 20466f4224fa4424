//! OS integration helpers: clipboard, file dialogs, screen capture, and
//! texture conversion.

pub mod clipboard;
pub mod drop_handler;
pub mod file_picker;
pub mod image_data;
pub mod screen;
pub mod texture;
