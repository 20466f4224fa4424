//! Generate page: turn typed text into a QR code.

use egui::{Response, TextureOptions, Ui};
use qrdesk_business::Source;
use qrdesk_business::codec::{self, CodecError};

use crate::state::{AppCommand, AppState, RenderedQr};
use crate::utils::texture;

/// Displayed size of the rendered code, logical points.
const QR_DISPLAY_SIZE: f32 = 260.0;

/// Renders the generate page.
pub fn generate_page(state: &mut AppState, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Generate a QR code");
        ui.add_space(8.0);

        ui.add(
            egui::TextEdit::multiline(&mut state.generate.input)
                .hint_text("Text or URL to encode")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Create QR code").clicked() {
                create_qr(state, ui.ctx());
            }
            let can_save = state.generate.rendered.is_some();
            if ui
                .add_enabled(can_save, egui::Button::new("Save PNG"))
                .clicked()
            {
                state.send(AppCommand::SaveQrPng);
            }
        });

        if let Some(rendered) = &state.generate.rendered {
            ui.add_space(12.0);
            show_rendered_qr(ui, rendered);
        }
    })
    .response
}

/// Encodes the current input, refreshes the preview, records the hit.
fn create_qr(state: &mut AppState, ctx: &egui::Context) {
    let text = state.generate.input.trim().to_owned();
    match codec::encode(&text) {
        Ok(image) => {
            let color_image = texture::gray_to_color_image(&image);
            let handle = ctx.load_texture("generated_qr", color_image, TextureOptions::NEAREST);
            state.generate.rendered = Some(RenderedQr {
                image,
                texture: handle,
            });

            match state.store.append(Source::Generated, text) {
                Ok(()) => state.status = "QR code created".to_owned(),
                Err(err) => {
                    log::error!("appending history entry failed: {err}");
                    state.status = format!("Created, but history was not saved: {err}");
                }
            }
        }
        Err(CodecError::EmptyInput) => {
            state.status = "Type something to encode first".to_owned();
        }
        Err(err) => state.status = format!("Could not create the code: {err}"),
    }
}

/// QR preview on a white pad, the way it will look when saved.
fn show_rendered_qr(ui: &mut Ui, rendered: &RenderedQr) {
    egui::Frame::NONE
        .fill(egui::Color32::WHITE)
        .inner_margin(egui::Margin::same(6))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.add(
                egui::Image::new(&rendered.texture)
                    .fit_to_exact_size(egui::vec2(QR_DISPLAY_SIZE, QR_DISPLAY_SIZE)),
            );
        });
}

#[cfg(test)]
mod generate_page_test {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use crate::state::AppState;

    #[test]
    fn test_generate_page_shows_controls() {
        let dir = tempfile::tempdir().expect("temp dir");
        let state = AppState::test(dir.path().join("history.json"));

        let harness = Harness::new_ui_state(
            |ui, state| {
                let _response = super::generate_page(state, ui);
            },
            state,
        );

        assert!(
            harness.query_by_label_contains("Create QR code").is_some(),
            "Generate page should show the create button"
        );
        assert!(
            harness.query_by_label_contains("Save PNG").is_some(),
            "Generate page should show the save button"
        );
    }

    #[test]
    fn test_create_records_history_entry() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut state = AppState::test(dir.path().join("history.json"));
        state.generate.input = "https://example.com".to_owned();

        let mut harness = Harness::new_ui_state(
            |ui, state| {
                let _response = super::generate_page(state, ui);
            },
            state,
        );

        harness.get_by_label("Create QR code").click();
        harness.step();

        let state = harness.state();
        assert_eq!(state.store.len(), 1);
        let entry = state.store.display_entry(0).expect("entry");
        assert_eq!(entry.content, "https://example.com");
        assert!(state.generate.rendered.is_some(), "preview should render");
    }
}
