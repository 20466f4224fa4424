//! Storage location for the history file.

use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "qrdesk";
pub const HISTORY_FILE_NAME: &str = "history.json";

/// History file under the platform data directory, e.g.
/// `~/.local/share/qrdesk/history.json` on Linux. Falls back to the
/// working directory when the platform reports no data directory.
pub fn history_file_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(HISTORY_FILE_NAME)
}
