use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tempfile::NamedTempFile;

use crate::error::StoreError;

/// Learned source → target pairs, kept sorted so the persisted slot is stable
pub type LearnedEntries = BTreeMap<String, String>;

/// A single named slot of durable storage holding the learned table.
///
/// `save` always receives the full table and overwrites the slot.
pub trait LearnedStore: Send + Sync {
    fn load(&self) -> Result<LearnedEntries, StoreError>;

    fn save(&self, entries: &LearnedEntries) -> Result<(), StoreError>;

    /// Human readable location, for logs
    fn location(&self) -> String;
}

/// Stores the learned table as a flat JSON object in `<dir>/<namespace>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>, namespace: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{namespace}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LearnedStore for JsonFileStore {
    fn load(&self) -> Result<LearnedEntries, StoreError> {
        if !self.path.exists() {
            tracing::debug!("No learned store at {}, starting empty", self.path.display());
            return Ok(LearnedEntries::new());
        }

        let file = File::open(&self.path)?;
        let entries = serde_json::from_reader(BufReader::new(file))?;
        Ok(entries)
    }

    fn save(&self, entries: &LearnedEntries) -> Result<(), StoreError> {
        let parent_dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent_dir)?;

        // Write next to the target and rename, so a crash never leaves half a file
        let mut temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, entries)?;
            writer.flush()?;
        }

        temp_file.persist(&self.path).map_err(|e| e.error)?;
        tracing::debug!("Saved {} learned entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-process slot holding the serialized table.
/// Used when persistence is disabled, and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw slot contents, valid or not
    pub fn with_contents(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LearnedStore for MemoryStore {
    fn load(&self) -> Result<LearnedEntries, StoreError> {
        match self.contents() {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(LearnedEntries::new()),
        }
    }

    fn save(&self, entries: &LearnedEntries) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries)?;
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
