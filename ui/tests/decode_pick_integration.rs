//! Integration tests for the decode flow in the full application, driving
//! the file dialog seam with a stub so no real dialog opens.

mod common;

use std::path::PathBuf;

use common::TestCtx;
use kittest::Queryable;
use qrdesk_business::codec;
use qrdesk_ui::state::{AppCommand, Page};
use qrdesk_ui::utils::file_picker::FilePickerHandler;
use qrdesk_ui::utils::image_data::ImageData;

/// Dialog stub that always "picks" the same image.
struct FixedImagePicker {
    image: ImageData,
}

impl FilePickerHandler for FixedImagePicker {
    fn pick_image(&self) -> Option<ImageData> {
        Some(self.image.clone())
    }

    fn save_png(&self, _suggested_name: &str) -> Option<PathBuf> {
        None
    }
}

/// Renders `payload` as a QR code and repackages it the way the file
/// picker would deliver it.
fn qr_image_data(payload: &str) -> ImageData {
    let gray = codec::encode(payload).expect("encode");
    let rgba = image::DynamicImage::ImageLuma8(gray).to_rgba8();
    let (width, height) = rgba.dimensions();
    ImageData::new(width as usize, height as usize, rgba.into_raw())
}

#[test]
fn test_picked_image_decodes_into_history() {
    let mut ctx = TestCtx::new_app();
    let history_path = ctx.history_path();
    let harness = ctx.harness_mut();

    harness.state_mut().state.file_picker = Box::new(FixedImagePicker {
        image: qr_image_data("https://example.com/from-file"),
    });
    harness.state_mut().state.send(AppCommand::PickDecodeImage);

    // One frame to apply the command, one to draw the decode page.
    harness.step();
    harness.step();

    let state = &harness.state().state;
    assert_eq!(state.page, Page::Decode);
    assert_eq!(
        state.decode.result.as_deref(),
        Some("https://example.com/from-file")
    );
    assert_eq!(state.status, "Decoded 1 QR code");
    assert_eq!(state.store.len(), 1);

    assert!(harness.query_by_label_contains("Decoded content").is_some());
    assert!(
        harness
            .query_by_label_contains("https://example.com/from-file")
            .is_some(),
        "The decoded payload should be shown on the page"
    );

    let json = std::fs::read_to_string(history_path).expect("history file");
    assert!(json.contains("image-decode"));
}

#[test]
fn test_cancelled_pick_changes_nothing() {
    struct CancelledPicker;

    impl FilePickerHandler for CancelledPicker {
        fn pick_image(&self) -> Option<ImageData> {
            None
        }

        fn save_png(&self, _suggested_name: &str) -> Option<PathBuf> {
            None
        }
    }

    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();

    harness.state_mut().state.file_picker = Box::new(CancelledPicker);
    harness.state_mut().state.send(AppCommand::PickDecodeImage);
    harness.step();

    let state = &harness.state().state;
    assert_eq!(state.page, Page::Generate, "the page should not switch");
    assert!(state.decode.result.is_none());
    assert!(state.store.is_empty());
}
