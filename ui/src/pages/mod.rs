//! Pages module for the application.
//!
//! One module per tab in the top bar:
//! - `generate_page`: text in, QR code out
//! - `decode_page`: image in (file, clipboard, screen region), text out
//! - `history_page`: everything generated or decoded so far

mod decode_page;
mod generate_page;
mod history_page;

pub use decode_page::decode_page;
pub use generate_page::generate_page;
pub use history_page::history_page;
