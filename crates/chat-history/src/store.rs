//! Persistence collaborators.
//!
//! A store hands every saved record back at startup and receives the full
//! ascending-id record list after each mutation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::HistoryError;
use crate::record::{HistoryDocument, SessionRecord};

pub trait SessionStore {
    /// Every persisted record, in the order they should be re-inserted.
    fn load_all(&self) -> Result<Vec<SessionRecord>, HistoryError>;

    /// Replace the persisted history with `records`.
    fn save_all(&mut self, records: &[SessionRecord]) -> Result<(), HistoryError>;
}

/// History kept as a single JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    chats: &'a [SessionRecord],
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SessionStore for JsonFileStore {
    /// A missing or blank file is an empty history.
    fn load_all(&self) -> Result<Vec<SessionRecord>, HistoryError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let doc: HistoryDocument = serde_json::from_str(&text).map_err(|source| HistoryError::Json {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), chats = doc.chats.len(), "loaded history file");
        Ok(doc.chats)
    }

    /// Writes a sibling `.tmp` file and renames it over the target.
    fn save_all(&mut self, records: &[SessionRecord]) -> Result<(), HistoryError> {
        let json = serde_json::to_string(&DocumentRef { chats: records }).map_err(|source| HistoryError::Json {
            path: self.path.clone(),
            source,
        })?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }
        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), chats = records.len(), "saved history file");
        Ok(())
    }
}

/// In-memory store; counts saves so callers can observe persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<SessionRecord>,
    saves: usize,
}

impl MemoryStore {
    pub fn new(records: Vec<SessionRecord>) -> Self {
        Self { records, saves: 0 }
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SessionStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<SessionRecord>, HistoryError> {
        Ok(self.records.clone())
    }

    fn save_all(&mut self, records: &[SessionRecord]) -> Result<(), HistoryError> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}
