//! Backend data contract and the validated parse boundary.
//!
//! The scanning backend supplies scan summaries, file/folder records and
//! file-type aggregates as serialized payloads. Everything crossing that
//! boundary is deserialized into the strongly-typed records here and
//! validated before the engine sees it; the engine never consumes
//! unchecked dynamic data. All records are read-only inputs.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::aggregate::WeightedItem;
use crate::color::{self, Rgba};
use crate::error::{Error, Result};

/// Top-level result of one completed scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Number of files scanned.
    pub total_files: u64,
    /// Number of folders scanned.
    pub total_folders: u64,
    /// Total size of the scanned tree in bytes.
    pub total_size: u64,
    /// Free space remaining on the volume in bytes.
    pub free_space: u64,
    /// Used fraction of the volume, in percent.
    pub used_percentage: f32,
    /// Scan duration in seconds.
    pub scan_time: f32,
    /// Root path of the scan.
    pub scan_path: String,
    /// Unix timestamp of scan completion, stamped by the caller.
    #[serde(default)]
    pub timestamp: u64,
}

/// One file as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Backend-assigned identifier.
    pub id: u64,
    /// File name.
    pub name: String,
    /// Absolute path.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
    /// Coarse type label ("Video", "Document", ...).
    #[serde(rename = "type")]
    pub file_type: String,
    /// File extension without the dot.
    pub extension: String,
}

/// One folder as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderRecord {
    /// Backend-assigned identifier.
    pub id: u64,
    /// Folder name.
    pub name: String,
    /// Absolute path, when the backend reports one.
    #[serde(default)]
    pub path: Option<String>,
    /// Total size in bytes.
    pub size: u64,
    /// Number of files directly or transitively contained.
    pub file_count: u64,
    /// The backend's own share-of-total figure, in percent.
    pub percentage: f32,
}

/// Per-file-type rollup as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileTypeAggregate {
    /// Type label.
    #[serde(rename = "type")]
    pub file_type: String,
    /// Accumulated size in bytes.
    pub size: u64,
    /// Number of files of this type.
    pub count: u64,
    /// Display color as a hex string.
    pub color: String,
}

/// Interface to the scanning backend. Calls are opaque request/response
/// operations; retries, if any, live behind this trait, not in the engine.
pub trait ScanBackend {
    /// Fetch the summary of the last completed scan.
    fn scan_summary(&self) -> Result<ScanSummary>;
    /// Fetch the largest files of the last completed scan.
    fn largest_files(&self) -> Result<Vec<FileRecord>>;
    /// Fetch the top-level folder records of the last completed scan.
    fn folders(&self) -> Result<Vec<FolderRecord>>;
    /// Fetch the per-type rollups of the last completed scan.
    fn file_type_aggregates(&self) -> Result<Vec<FileTypeAggregate>>;
    /// Fetch the files contained in one folder.
    fn folder_files(&self, folder_id: u64) -> Result<Vec<FileRecord>>;
}

/// One scan's worth of data, validated and bundled.
///
/// The `generation` is a request sequence number assigned by the caller;
/// views use it to discard responses that resolve after a newer request
/// already did (see [`crate::view::DistributionView::install_dataset`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanDataset {
    /// Request sequence number for staleness checks.
    pub generation: u64,
    /// Scan summary.
    pub summary: ScanSummary,
    /// Largest files, as reported.
    pub largest_files: Vec<FileRecord>,
    /// Folder records, as reported.
    pub folders: Vec<FolderRecord>,
    /// File-type rollups, as reported.
    pub file_types: Vec<FileTypeAggregate>,
}

fn check_finite(value: f32, what: &str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::MalformedRecord(format!("non-finite {what}")))
    }
}

impl ScanDataset {
    /// Bundle and validate one scan's data.
    ///
    /// Rejects non-finite percentages and durations; those indicate a
    /// corrupted payload rather than an empty category.
    pub fn from_parts(
        summary: ScanSummary,
        largest_files: Vec<FileRecord>,
        folders: Vec<FolderRecord>,
        file_types: Vec<FileTypeAggregate>,
    ) -> Result<Self> {
        check_finite(summary.used_percentage, "used_percentage in scan summary")?;
        check_finite(summary.scan_time, "scan_time in scan summary")?;
        for folder in &folders {
            check_finite(folder.percentage, "percentage in folder record")?;
        }
        Ok(Self {
            generation: 0,
            summary,
            largest_files,
            folders,
            file_types,
        })
    }

    /// Fetch and validate every category from the backend in one round.
    pub fn fetch(backend: &dyn ScanBackend) -> Result<Self> {
        Self::from_parts(
            backend.scan_summary()?,
            backend.largest_files()?,
            backend.folders()?,
            backend.file_type_aggregates()?,
        )
    }

    /// Tag the dataset with a request sequence number.
    #[must_use]
    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    /// Weighted items for the file-type category.
    #[must_use]
    pub fn file_type_items(&self) -> Vec<WeightedItem> {
        file_type_items(&self.file_types)
    }

    /// Weighted items for the folder category.
    #[must_use]
    pub fn folder_items(&self) -> Vec<WeightedItem> {
        folder_items(&self.folders)
    }
}

fn parse_color(hex: &str, rank: usize) -> Rgba {
    match Rgba::from_hex(hex) {
        Ok(color) => color,
        Err(_) => {
            warn!(hex, "malformed backend color, falling back to palette");
            color::palette_color(rank)
        }
    }
}

/// Convert file-type rollups into weighted items. Backend colors are
/// parsed; malformed ones fall back to the palette with a warning.
#[must_use]
pub fn file_type_items(aggregates: &[FileTypeAggregate]) -> Vec<WeightedItem> {
    aggregates
        .iter()
        .enumerate()
        .map(|(rank, agg)| {
            WeightedItem::new(agg.file_type.clone(), agg.size, rank)
                .with_count(agg.count)
                .with_color(parse_color(&agg.color, rank))
        })
        .collect()
}

/// Convert folder records into weighted items, colored by rank.
#[must_use]
pub fn folder_items(folders: &[FolderRecord]) -> Vec<WeightedItem> {
    folders
        .iter()
        .enumerate()
        .map(|(rank, folder)| {
            WeightedItem::new(folder.name.clone(), folder.size, rank)
                .with_count(folder.file_count)
        })
        .collect()
}

/// Convert file records into weighted items, colored by rank.
#[must_use]
pub fn file_items(files: &[FileRecord]) -> Vec<WeightedItem> {
    files
        .iter()
        .enumerate()
        .map(|(rank, file)| WeightedItem::new(file.name.clone(), file.size, rank))
        .collect()
}
