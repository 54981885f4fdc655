//! # Diskviz
//!
//! Proportional data-distribution engine for disk-usage visualization.
//!
//! Diskviz is the client-side visualization core of a desktop disk-usage
//! analyzer: it takes scan results supplied by an external scanning
//! backend (file-type rollups, folder records, file records) and turns
//! them into render-ready projections that stay mutually consistent:
//!
//! - an aggregated, "Others"-collapsed item list for pie and treemap views
//! - non-overlapping, weight-proportional treemap rectangles
//! - pie/doughnut slice geometry
//! - paginated windows over the full item list
//! - per-shape label decisions that degrade with tile size
//!
//! The engine performs no scanning, no file I/O on scan targets, and no
//! drawing; rendering frontends consume its geometry and text output.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use diskviz::prelude::*;
//!
//! let mut view = DistributionView::new();
//! view.install_dataset(dataset);
//!
//! view.dispatch(ViewEvent::SelectView(ViewKind::Treemap));
//! if let ViewData::Aggregated(items) = view.current_data() {
//!     let rects = TreemapLayout::new().canvas(400.0, 320.0).layout(items);
//!     let policy = LabelPolicy::new();
//!     for (item, rect) in items.iter().zip(&rects) {
//!         let label = policy.fit(item, rect);
//!         // hand (rect, item.color, label) to the renderer
//!     }
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and the categorical tile palette.
pub mod color;

/// Human-readable size and count formatting.
pub mod format;

/// Geometric primitives for layout output.
pub mod geometry;

// ============================================================================
// Engine Modules
// ============================================================================

/// Aggregation of weighted items into bounded, Others-collapsed lists.
pub mod aggregate;

/// Label-fit policy for rendered shapes.
pub mod label;

/// Pagination and windowing for large item collections.
pub mod page;

/// Pie/doughnut slice projection.
pub mod pie;

/// Treemap layout engine.
pub mod treemap;

/// View synchronization over one canonical dataset.
pub mod view;

// ============================================================================
// Boundary Modules
// ============================================================================

/// Backend data contract and the validated parse boundary.
pub mod scan;

/// Persistence for the last saved scan.
pub mod store;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for diskviz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use diskviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregate::{aggregate, annotate, AggregatedItem, WeightedItem};
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::format::{format_count, format_size};
    pub use crate::geometry::{Point, Rect};
    pub use crate::label::{LabelPolicy, LabelTier, TileLabel};
    pub use crate::page::{page_window, PageInfo};
    pub use crate::pie::{PieProjection, PieSlice};
    pub use crate::scan::{
        FileRecord, FileTypeAggregate, FolderRecord, ScanBackend, ScanDataset, ScanSummary,
    };
    pub use crate::store::{load_dataset, save_dataset, DatasetStore, JsonFileStore, MemoryStore};
    pub use crate::treemap::TreemapLayout;
    pub use crate::view::{
        DataKind, DistributionView, ViewConfig, ViewData, ViewEvent, ViewKind, ViewState,
    };
}
