//! Core logic for QR Desk: history persistence, capture-region math,
//! QR encode/decode, and URL extraction.
//!
//! Everything in this crate is UI-free and synchronous; the `ui` crate
//! drives it from the event loop.

pub mod capture;
pub mod codec;
pub mod config;
pub mod history;
pub mod links;

mod capture_tests;

pub use capture::{CaptureRegion, CropError, DragState, MIN_DRAG_LOGICAL};
pub use history::{DeleteOutcome, HistoryEntry, HistoryError, HistoryStore, SelectionState, Source};
