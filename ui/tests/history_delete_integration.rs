//! Integration tests for history deletion in the full application.

mod common;

use common::TestCtx;
use kittest::Queryable;
use qrdesk_business::Source;
use qrdesk_ui::state::Page;

#[test]
fn test_delete_all_clears_list_and_file() {
    let mut ctx = TestCtx::new_app_with_entries(&[
        (Source::Generated, "first payload"),
        (Source::ImageDecode, "second payload"),
        (Source::ScreenCapture, "third payload"),
    ]);
    let history_path = ctx.history_path();
    let harness = ctx.harness_mut();

    harness.state_mut().state.page = Page::History;
    harness.step();

    assert!(harness.query_by_label_contains("first payload").is_some());
    assert!(harness.query_by_label_contains("third payload").is_some());

    // Checkbox clicks don't reach table rows under the test harness, so
    // select through the store and drive the toolbar button.
    harness.state_mut().state.store.set_all(true);
    harness.step();

    harness.get_by_label("Delete selected").click();
    harness.step();

    let state = &harness.state().state;
    assert!(state.store.is_empty());
    assert_eq!(state.status, "Deleted 3 entries");

    assert!(
        harness.query_by_label_contains("Nothing here yet").is_some(),
        "Empty history should show the hint"
    );

    let json = std::fs::read_to_string(history_path).expect("history file");
    assert_eq!(json.trim(), "[]");
}

#[test]
fn test_partial_delete_keeps_unselected_rows() {
    let mut ctx = TestCtx::new_app_with_entries(&[
        (Source::Generated, "keep me"),
        (Source::Generated, "remove me"),
    ]);
    let harness = ctx.harness_mut();

    harness.state_mut().state.page = Page::History;
    // Display row 0 is the newest append, "remove me".
    harness.state_mut().state.store.set_selected(0, true);
    harness.step();

    harness.get_by_label("Delete selected").click();
    harness.step();

    let state = &harness.state().state;
    assert_eq!(state.store.len(), 1);
    assert_eq!(
        state.store.display_entry(0).expect("entry").content,
        "keep me"
    );
    assert_eq!(state.status, "Deleted 1 entry");

    assert!(harness.query_by_label_contains("keep me").is_some());
    assert!(harness.query_by_label_contains("remove me").is_none());
}
