use std::path::PathBuf;

use egui_kittest::Harness;
use qrdesk_business::Source;
use qrdesk_ui::QrDeskApp;
use qrdesk_ui::state::AppState;
use tempfile::TempDir;

/// Full-app harness over a throwaway history file.
///
/// The temp directory lives as long as the harness so the store can keep
/// rewriting its file mid-test.
pub struct TestCtx<'a> {
    dir: TempDir,
    harness: Harness<'a, QrDeskApp>,
}

impl<'a> TestCtx<'a> {
    #[allow(unused)]
    pub fn new_app() -> Self {
        Self::new_app_with_entries(&[])
    }

    /// App whose store already holds `entries`, appended oldest first.
    pub fn new_app_with_entries(entries: &[(Source, &str)]) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut state = AppState::test(dir.path().join("history.json"));
        for (source, content) in entries {
            state.store.append(*source, *content).expect("append");
        }

        let app = QrDeskApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self { dir, harness }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, QrDeskApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, QrDeskApp> {
        &self.harness
    }

    /// Path of the history file backing this test's store.
    pub fn history_path(&self) -> PathBuf {
        self.dir.path().join("history.json")
    }
}
