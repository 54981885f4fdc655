//! Persistence boundary for the last successfully saved scan.
//!
//! A key-value store keyed by fixed string identifiers, one per data
//! category, holding serialized JSON. Datasets are written through on
//! every successful scan and loaded once at startup; malformed or missing
//! entries are "no data available", never a fatal error. Callers receive
//! the store by explicit injection, not ambient lookup.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::Result;
use crate::scan::ScanDataset;

/// Fixed identifiers for the persisted data categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// The scan summary.
    ScanSummary,
    /// The largest-files list.
    LargestFiles,
    /// The folder records.
    Folders,
    /// The file-type rollups.
    FileTypes,
    /// Completion timestamp of the last saved scan.
    LastScanTime,
}

impl StorageKey {
    /// Every key, for clear/enumerate operations.
    pub const ALL: [Self; 5] = [
        Self::ScanSummary,
        Self::LargestFiles,
        Self::Folders,
        Self::FileTypes,
        Self::LastScanTime,
    ];

    /// The stable string identifier persisted payloads live under.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ScanSummary => "diskviz_scan_data",
            Self::LargestFiles => "diskviz_largest_files",
            Self::Folders => "diskviz_folders",
            Self::FileTypes => "diskviz_file_type_distribution",
            Self::LastScanTime => "diskviz_last_scan_time",
        }
    }
}

/// Key-value persistence for serialized scan payloads.
pub trait DatasetStore {
    /// Read the payload stored under `key`, if any.
    fn get(&self, key: StorageKey) -> Result<Option<String>>;
    /// Write `payload` under `key`, replacing any previous value.
    fn set(&mut self, key: StorageKey, payload: &str) -> Result<()>;
    /// Remove every stored payload.
    fn clear(&mut self) -> Result<()>;
}

/// In-memory store, for tests and scratch sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<&'static str, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatasetStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>> {
        Ok(self.entries.get(key.as_str()).cloned())
    }

    fn set(&mut self, key: StorageKey, payload: &str) -> Result<()> {
        self.entries.insert(key.as_str(), payload.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}

/// File-backed store: one JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl DatasetStore for JsonFileStore {
    fn get(&self, key: StorageKey) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: StorageKey, payload: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), payload)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        for key in StorageKey::ALL {
            match fs::remove_file(self.path(key)) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}

/// Write one dataset through to the store, every category at once.
pub fn save_dataset(store: &mut dyn DatasetStore, dataset: &ScanDataset) -> Result<()> {
    store.set(
        StorageKey::ScanSummary,
        &serde_json::to_string(&dataset.summary)?,
    )?;
    store.set(
        StorageKey::LargestFiles,
        &serde_json::to_string(&dataset.largest_files)?,
    )?;
    store.set(
        StorageKey::Folders,
        &serde_json::to_string(&dataset.folders)?,
    )?;
    store.set(
        StorageKey::FileTypes,
        &serde_json::to_string(&dataset.file_types)?,
    )?;
    store.set(
        StorageKey::LastScanTime,
        &serde_json::to_string(&dataset.summary.timestamp)?,
    )?;
    Ok(())
}

fn decode<T: DeserializeOwned>(store: &dyn DatasetStore, key: StorageKey) -> Option<T> {
    let payload = match store.get(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return None,
        Err(err) => {
            warn!(key = key.as_str(), %err, "failed to read persisted entry");
            return None;
        }
    };
    match serde_json::from_str(&payload) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key = key.as_str(), %err, "malformed persisted entry, treating as missing");
            None
        }
    }
}

/// Load the last saved dataset, if a usable one exists.
///
/// The summary is required; list categories degrade independently to
/// empty when missing or malformed. Any failure is "no data available",
/// never an error.
#[must_use]
pub fn load_dataset(store: &dyn DatasetStore) -> Option<ScanDataset> {
    let mut summary = decode::<crate::scan::ScanSummary>(store, StorageKey::ScanSummary)?;
    if summary.timestamp == 0 {
        if let Some(last) = decode::<u64>(store, StorageKey::LastScanTime) {
            summary.timestamp = last;
        }
    }
    let largest_files = decode(store, StorageKey::LargestFiles).unwrap_or_default();
    let folders = decode(store, StorageKey::Folders).unwrap_or_default();
    let file_types = decode(store, StorageKey::FileTypes).unwrap_or_default();

    match ScanDataset::from_parts(summary, largest_files, folders, file_types) {
        Ok(dataset) => Some(dataset),
        Err(err) => {
            warn!(%err, "persisted dataset failed validation, treating as missing");
            None
        }
    }
}
