//! History page: table of everything generated and decoded so far.

use egui::{Color32, Response, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use qrdesk_business::{DeleteOutcome, SelectionState, Source, links};

use crate::state::{AppCommand, AppState};

const ROW_HEIGHT: f32 = 24.0;
const HEADER_HEIGHT: f32 = 24.0;

/// One hue per entry origin.
fn source_color(source: Source) -> Color32 {
    match source {
        Source::Generated => Color32::from_rgb(46, 160, 67),
        Source::ImageDecode => Color32::from_rgb(9, 105, 218),
        Source::ScreenCapture => Color32::from_rgb(130, 80, 223),
        Source::Unknown => Color32::GRAY,
    }
}

/// Renders the history page.
pub fn history_page(state: &mut AppState, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.heading("Saved codes");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let any_rows = !state.store.is_empty();
                if ui
                    .add_enabled(any_rows, egui::Button::new("Delete selected"))
                    .clicked()
                {
                    delete_selected(state);
                }
            });
        });
        ui.add_space(8.0);

        if state.store.is_empty() {
            ui.weak("Nothing here yet. Created and decoded codes will appear in this list.");
            return;
        }

        show_history_table(state, ui);
    })
    .response
}

fn delete_selected(state: &mut AppState) {
    match state.store.delete_selected() {
        Ok(DeleteOutcome::NothingSelected) => {
            state.status = "Nothing selected".to_owned();
        }
        Ok(DeleteOutcome::Deleted(1)) => {
            state.status = "Deleted 1 entry".to_owned();
        }
        Ok(DeleteOutcome::Deleted(count)) => {
            state.status = format!("Deleted {count} entries");
        }
        Err(err) => {
            log::error!("deleting history entries failed: {err}");
            state.status = format!("Delete failed: {err}");
        }
    }
}

fn show_history_table(state: &mut AppState, ui: &mut Ui) {
    let row_count = state.store.len();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto())
        .header(HEADER_HEIGHT, |mut header| {
            header.col(|ui| {
                show_select_all_checkbox(state, ui);
            });
            header.col(|ui| {
                ui.strong("Source");
            });
            header.col(|ui| {
                ui.strong("Content");
            });
            header.col(|ui| {
                ui.strong("Time");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, row_count, |mut row| {
                let display_index = row.index();
                show_history_row(state, &mut row, display_index);
            });
        });
}

/// Tri-state checkbox driving every row's selection at once.
fn show_select_all_checkbox(state: &mut AppState, ui: &mut Ui) {
    let selection = state.store.selection_state();
    let mut all = selection == SelectionState::All;
    let checkbox =
        egui::Checkbox::new(&mut all, "All").indeterminate(selection == SelectionState::Partial);
    if ui.add(checkbox).clicked() {
        state.store.set_all(selection != SelectionState::All);
    }
}

fn show_history_row(
    state: &mut AppState,
    row: &mut egui_extras::TableRow<'_, '_>,
    display_index: usize,
) {
    let Some(entry) = state.store.display_entry(display_index) else {
        return;
    };
    let content = entry.content.clone();
    let source = entry.source;
    let timestamp = entry.timestamp.clone();

    let mut selected = state.store.is_selected(display_index);
    row.col(|ui| {
        if ui.checkbox(&mut selected, "").changed() {
            state.store.set_selected(display_index, selected);
        }
    });
    row.col(|ui| {
        ui.label(RichText::new(source.label()).color(source_color(source)));
    });
    row.col(|ui| {
        show_content_cell(state, ui, &content);
    });
    row.col(|ui| {
        ui.label(timestamp);
    });
}

/// Content cell. Double-click opens the entry's URL when it has one,
/// otherwise copies; the context menu always copies.
fn show_content_cell(state: &AppState, ui: &mut Ui, content: &str) {
    let response = ui
        .add(
            egui::Label::new(content)
                .truncate()
                .sense(egui::Sense::click()),
        )
        .on_hover_text(content);

    if response.double_clicked() {
        match links::extract_first(content) {
            Some(url) => state.send(AppCommand::OpenUrl(url)),
            None => state.send(AppCommand::CopyText(content.to_owned())),
        }
    }

    response.context_menu(|ui| {
        if ui.button("Copy").clicked() {
            state.send(AppCommand::CopyText(content.to_owned()));
            ui.close();
        }
    });
}

#[cfg(test)]
mod history_page_test {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use qrdesk_business::{SelectionState, Source};

    use crate::state::AppState;

    // The TempDir is handed back so the history file outlives the setup.
    fn seeded_state(contents: &[&str]) -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut state = AppState::test(dir.path().join("history.json"));
        for content in contents {
            state
                .store
                .append(Source::Generated, *content)
                .expect("append");
        }
        (dir, state)
    }

    fn page_harness(state: AppState) -> Harness<'static, AppState> {
        Harness::new_ui_state(
            |ui, state| {
                let _response = super::history_page(state, ui);
            },
            state,
        )
    }

    #[test]
    fn test_empty_history_shows_hint() {
        let dir = tempfile::tempdir().expect("temp dir");
        let state = AppState::test(dir.path().join("history.json"));
        let harness = page_harness(state);

        assert!(harness.query_by_label_contains("Nothing here yet").is_some());
    }

    #[test]
    fn test_rows_render_newest_first() {
        let (_dir, state) = seeded_state(&["first", "second"]);
        let harness = page_harness(state);

        assert!(harness.query_by_label_contains("first").is_some());
        assert!(harness.query_by_label_contains("second").is_some());
        // Newest first means row 0 holds the latest append.
        let entry = harness.state().store.display_entry(0).expect("entry");
        assert_eq!(entry.content, "second");
    }

    #[test]
    fn test_delete_selected_removes_rows() {
        let (_dir, state) = seeded_state(&["keep", "drop me"]);
        let mut harness = page_harness(state);

        harness.state_mut().store.set_selected(0, true);
        harness.step();

        harness.get_by_label("Delete selected").click();
        harness.step();

        let state = harness.state();
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.store.display_entry(0).expect("entry").content, "keep");
        assert_eq!(state.status, "Deleted 1 entry");
    }

    #[test]
    fn test_delete_with_nothing_selected_reports_status() {
        let (_dir, state) = seeded_state(&["stays"]);
        let mut harness = page_harness(state);

        harness.get_by_label("Delete selected").click();
        harness.step();

        let state = harness.state();
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.status, "Nothing selected");
    }

    #[test]
    fn test_select_all_state_reflected() {
        let (_dir, state) = seeded_state(&["a", "b", "c"]);
        let mut harness = page_harness(state);

        harness.state_mut().store.set_all(true);
        harness.step();

        assert_eq!(
            harness.state().store.selection_state(),
            SelectionState::All
        );
        assert!(harness.query_by_label_contains("All").is_some());
    }
}
