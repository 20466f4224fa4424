//! Persistent history of generated and decoded QR payloads.
//!
//! Entries are stored on disk as a JSON array in append order (oldest
//! first) and shown in the UI newest first, so every list operation that
//! takes a row index translates it through [`HistoryStore::storage_index`]
//! semantics: `storage = total - 1 - display`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Timestamp format written into new entries, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Where a history entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    Generated,
    ImageDecode,
    ScreenCapture,
    Unknown,
}

impl Source {
    /// Human-readable label for list rows.
    pub fn label(self) -> &'static str {
        match self {
            Self::Generated => "Generated",
            Self::ImageDecode => "Image",
            Self::ScreenCapture => "Screen capture",
            Self::Unknown => "Unknown",
        }
    }

    // The Chinese labels are what the previous release wrote into files it
    // had already converted itself.
    fn from_wire(label: &str) -> Self {
        match label {
            "generated" | "生成" => Self::Generated,
            "image-decode" | "解析图片" => Self::ImageDecode,
            "screen-capture" | "截屏识别" => Self::ScreenCapture,
            _ => Self::Unknown,
        }
    }
}

// Unrecognized source labels must load as `Unknown` rather than fail the
// whole file, so deserialization goes through `from_wire` by hand.
impl<'de> Deserialize<'de> for Source {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&label))
    }
}

/// One produced or decoded payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub source: Source,
    pub content: String,
    /// `TIMESTAMP_FORMAT` local time. Migrated entries keep the stamp the
    /// old file had; ones that carried none get the load time.
    #[serde(rename = "time")]
    pub timestamp: String,
}

/// Aggregate selection across the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    None,
    Partial,
    All,
}

impl SelectionState {
    pub fn from_counts(selected: usize, total: usize) -> Self {
        if total == 0 || selected == 0 {
            Self::None
        } else if selected == total {
            Self::All
        } else {
            Self::Partial
        }
    }
}

/// Result of a bulk delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No row was selected; nothing changed.
    NothingSelected,
    /// This many entries were removed and the file rewritten.
    Deleted(usize),
}

/// Error type for history persistence.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The history file or its directory could not be written.
    #[error("could not write history file: {0}")]
    Io(#[from] io::Error),

    /// The in-memory entries could not be serialized.
    #[error("could not serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Ordered, persistent history list with per-entry selection flags.
///
/// Mutating operations bump [`HistoryStore::revision`] exactly once no
/// matter how many entries they touch, so observers get one notification
/// per user action. Selection flags are UI state and are never persisted.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    /// Append order, oldest first.
    entries: Vec<HistoryEntry>,
    /// Parallel to `entries`.
    selected: Vec<bool>,
    revision: u64,
}

impl HistoryStore {
    /// Load the store from `path`. A missing file is an empty store; an
    /// unreadable or unparseable one logs a warning and starts empty, the
    /// app must come up regardless.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path);
        let selected = vec![false; entries.len()];
        Self {
            path,
            entries,
            selected,
            revision: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bumped once per mutating operation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Entries in display order, newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Entry at a display (newest-first) row index.
    pub fn display_entry(&self, display_index: usize) -> Option<&HistoryEntry> {
        let storage = self.storage_index(display_index)?;
        self.entries.get(storage)
    }

    pub fn is_selected(&self, display_index: usize) -> bool {
        self.storage_index(display_index)
            .is_some_and(|storage| self.selected[storage])
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|on| **on).count()
    }

    pub fn selection_state(&self) -> SelectionState {
        SelectionState::from_counts(self.selected_count(), self.entries.len())
    }

    /// Stamp `content` with the current local time, append it, and rewrite
    /// the file. The entry stays in memory even when the write fails.
    pub fn append(&mut self, source: Source, content: impl Into<String>) -> Result<(), HistoryError> {
        let entry = HistoryEntry {
            source,
            content: content.into(),
            timestamp: now_stamp(),
        };
        self.entries.push(entry);
        self.selected.push(false);
        self.revision += 1;
        self.persist()
    }

    /// Set the selection flag of a display row. Out-of-range indexes and
    /// writes that do not change the flag are no-ops.
    pub fn set_selected(&mut self, display_index: usize, on: bool) {
        let Some(storage) = self.storage_index(display_index) else {
            return;
        };
        if self.selected[storage] != on {
            self.selected[storage] = on;
            self.revision += 1;
        }
    }

    /// Set every selection flag at once with a single revision bump.
    pub fn set_all(&mut self, on: bool) {
        for flag in &mut self.selected {
            *flag = on;
        }
        self.revision += 1;
    }

    /// Remove every selected entry and rewrite the file once.
    ///
    /// Entries are removed in descending storage order so earlier removals
    /// cannot shift the indexes of later ones.
    pub fn delete_selected(&mut self) -> Result<DeleteOutcome, HistoryError> {
        let doomed: Vec<usize> = self
            .selected
            .iter()
            .enumerate()
            .filter_map(|(storage, on)| on.then_some(storage))
            .collect();
        if doomed.is_empty() {
            return Ok(DeleteOutcome::NothingSelected);
        }
        for &storage in doomed.iter().rev() {
            self.entries.remove(storage);
            self.selected.remove(storage);
        }
        self.revision += 1;
        self.persist()?;
        Ok(DeleteOutcome::Deleted(doomed.len()))
    }

    /// `storage = total - 1 - display`; `None` when out of range.
    fn storage_index(&self, display_index: usize) -> Option<usize> {
        self.entries.len().checked_sub(display_index + 1)
    }

    fn persist(&self) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn load_entries(path: &Path) -> Vec<HistoryEntry> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            log::warn!("could not read history file {}: {err}", path.display());
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
        Ok(entries) => entries,
        Err(_) => match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(items) => {
                let entries: Vec<HistoryEntry> =
                    items.iter().filter_map(entry_from_value).collect();
                log::info!(
                    "migrated {} of {} entries from an older history format",
                    entries.len(),
                    items.len()
                );
                entries
            }
            Err(err) => {
                log::warn!(
                    "history file {} is neither current nor legacy JSON, starting empty: {err}",
                    path.display()
                );
                Vec::new()
            }
        },
    }
}

/// Convert one item of an old-format history array.
///
/// The previous release stored `{"text", "time"}` objects with the source
/// baked into the text as a prefix; files it had already converted itself
/// hold `{"source", "content", "time"}` objects, and one array can mix
/// both shapes. Plain strings take the same prefix classification. Items
/// of any other shape are dropped.
fn entry_from_value(value: &serde_json::Value) -> Option<HistoryEntry> {
    if let Some(text) = value.as_str() {
        return Some(entry_from_legacy(text, None));
    }
    let object = value.as_object()?;
    if let (Some(source), Some(content)) = (object.get("source"), object.get("content")) {
        return Some(HistoryEntry {
            source: Source::from_wire(source.as_str()?),
            content: content.as_str()?.to_owned(),
            timestamp: object
                .get("time")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_owned(),
        });
    }
    let text = object.get("text")?.as_str()?;
    let time = object.get("time").and_then(serde_json::Value::as_str);
    Some(entry_from_legacy(text, time))
}

/// Prefixes the previous release baked into the text of each entry.
/// Match order matters: the first prefix found wins.
const LEGACY_PREFIXES: [(&str, Source); 3] = [
    ("截屏识别：", Source::ScreenCapture),
    ("解析图片：", Source::ImageDecode),
    ("生成：", Source::Generated),
];

/// Classify one legacy text. The matched prefix is stripped from the
/// content wherever it appears; unprefixed text keeps its full form under
/// [`Source::Unknown`]. A missing `time` becomes the load time, matching
/// what the previous release stamped during its own conversion.
pub(crate) fn entry_from_legacy(text: &str, time: Option<&str>) -> HistoryEntry {
    let timestamp = time.map_or_else(now_stamp, str::to_owned);
    for (prefix, source) in LEGACY_PREFIXES {
        if text.contains(prefix) {
            return HistoryEntry {
                source,
                content: text.replace(prefix, ""),
                timestamp,
            };
        }
    }
    HistoryEntry {
        source: Source::Unknown,
        content: text.to_owned(),
        timestamp,
    }
}

fn now_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
