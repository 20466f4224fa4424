//! Decode page: read QR codes from files, the clipboard, or the screen.

use egui::{Response, RichText, Ui};
use qrdesk_business::links;

use crate::state::{AppCommand, AppState};

/// Longest edge of the source-image preview, logical points.
const PREVIEW_MAX_SIZE: f32 = 300.0;

/// Renders the decode page.
pub fn decode_page(state: &mut AppState, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Decode a QR code");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Open image…").clicked() {
                state.send(AppCommand::PickDecodeImage);
            }
            if ui.button("Capture screen").clicked() {
                state.send(AppCommand::StartCapture);
            }
        });
        ui.label(
            RichText::new(
                "Paste an image (Ctrl+V) or open a file (Ctrl+O) to decode it. \
                 Dropping an image onto the window works too.",
            )
            .small()
            .weak(),
        );

        if let Some(preview) = &state.decode.preview {
            ui.add_space(12.0);
            ui.add(
                egui::Image::new(preview)
                    .max_size(egui::vec2(PREVIEW_MAX_SIZE, PREVIEW_MAX_SIZE)),
            );
        }

        if let Some(result) = &state.decode.result {
            ui.add_space(12.0);
            show_decode_result(state, ui, result);
        }
    })
    .response
}

/// Decoded payload with copy and open-link actions.
fn show_decode_result(state: &AppState, ui: &mut Ui, result: &str) {
    ui.group(|ui| {
        ui.label(RichText::new("Decoded content").strong());
        ui.add_space(4.0);
        ui.add(egui::Label::new(result).selectable(true).wrap());
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Copy").clicked() {
                state.send(AppCommand::CopyText(result.to_owned()));
            }
            if let Some(url) = links::extract_first(result)
                && ui.button("Open link").clicked()
            {
                state.send(AppCommand::OpenUrl(url));
            }
        });
    });
}
