//! Schedule history store.
//!
//! Persists generated schedules as a JSON file holding a newest-first list
//! of [`SavedSchedule`] snapshots, capped at [`MAX_SAVED`] entries. The
//! store is keyed by opaque ids of the form `sched_{unix_millis}` and
//! supports save, list, rename, delete, and clear.
//!
//! A missing store file means an empty history. An unreadable store is
//! treated as empty rather than fatal, since history is a convenience
//! cache over regenerable data.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{SavedSchedule, ScheduleEntry};

/// Maximum number of schedules retained; older entries are dropped.
pub const MAX_SAVED: usize = 20;

/// History store failures.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Filesystem failure reading or writing the store file.
    #[error("history store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The store contents could not be serialized.
    #[error("history store serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed store of saved schedules.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Opens a store at the given file path. The file is created lazily on
    /// first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lists saved schedules, newest first.
    ///
    /// A missing file yields an empty list. A file that exists but does not
    /// parse is logged and treated as empty.
    pub fn list(&self) -> Result<Vec<SavedSchedule>, HistoryError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable history store, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Saves a schedule snapshot and returns it.
    ///
    /// The new entry is prepended; anything beyond [`MAX_SAVED`] is dropped.
    /// When `name` is `None` a timestamp-based name is generated.
    pub fn save(
        &self,
        data: Vec<ScheduleEntry>,
        status: impl Into<String>,
        name: Option<String>,
    ) -> Result<SavedSchedule, HistoryError> {
        let mut existing = self.list()?;
        let now = Utc::now();
        let saved = SavedSchedule {
            id: format!("sched_{}", now.timestamp_millis()),
            name: name.unwrap_or_else(|| format!("Schedule {}", now.format("%d %b %Y %H:%M"))),
            created_at: now,
            entry_count: data.len(),
            status: status.into(),
            data,
        };

        existing.insert(0, saved.clone());
        if existing.len() > MAX_SAVED {
            debug!(dropped = existing.len() - MAX_SAVED, "history cap reached");
            existing.truncate(MAX_SAVED);
        }
        self.write(&existing)?;
        debug!(id = %saved.id, entries = saved.entry_count, "schedule saved");
        Ok(saved)
    }

    /// Removes the schedule with the given id. Unknown ids are a no-op.
    pub fn delete(&self, id: &str) -> Result<(), HistoryError> {
        let mut existing = self.list()?;
        existing.retain(|s| s.id != id);
        self.write(&existing)
    }

    /// Renames the schedule with the given id. Unknown ids are a no-op.
    pub fn rename(&self, id: &str, name: impl Into<String>) -> Result<(), HistoryError> {
        let mut existing = self.list()?;
        let name = name.into();
        for s in &mut existing {
            if s.id == id {
                s.name = name.clone();
            }
        }
        self.write(&existing)
    }

    /// Removes all saved schedules.
    pub fn clear(&self) -> Result<(), HistoryError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, list: &[SavedSchedule]) -> Result<(), HistoryError> {
        let json = serde_json::to_string(list)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
