//! View synchronization over one canonical dataset.
//!
//! Maintains the aggregated dataset for the currently installed scan and
//! derives every simultaneous view from it: the capped pie/treemap item
//! lists and the paginated list window. View state transitions go through
//! an explicit event reducer so the state machine is testable without any
//! rendering framework.

use std::fmt;

use tracing::debug;

use crate::aggregate::{aggregate, annotate, AggregatedItem, WeightedItem};
use crate::page::{is_large_dataset, page_window, PageInfo};
use crate::scan::{ScanDataset, ScanSummary};

/// Maximum slices a pie view renders; the aggregator folds the tail past
/// this into Others.
pub const PIE_MAX_ITEMS: usize = 15;
/// Maximum tiles a treemap renders. Smaller than the pie cap: tile
/// legibility degrades faster than slice legibility.
pub const TREEMAP_MAX_ITEMS: usize = 12;
/// Items per page in the list view.
pub const LIST_PAGE_SIZE: usize = 20;
/// Share below which an item is a candidate for the Others bucket, in
/// percent.
pub const AGGREGATION_THRESHOLD: f64 = 1.0;

/// Which dataset category a view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataKind {
    /// Per-file-type rollups.
    #[default]
    FileTypes,
    /// Per-folder totals.
    Folders,
}

/// Which visualization renders the current category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    /// Pie/doughnut chart.
    #[default]
    Pie,
    /// Proportional treemap.
    Treemap,
    /// Paginated/sortable list.
    List,
}

/// Local UI state of one distribution view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Selected dataset category.
    pub data_kind: DataKind,
    /// Selected visualization.
    pub view_kind: ViewKind,
    /// Current list page.
    pub page: usize,
    /// Whether the list view bypasses pagination.
    pub show_all: bool,
}

/// User actions that mutate [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Switch the dataset category.
    SelectDataKind(DataKind),
    /// Switch the visualization.
    SelectView(ViewKind),
    /// Advance one page.
    NextPage,
    /// Go back one page.
    PrevPage,
    /// Jump to a page (clamped).
    SetPage(usize),
    /// Bypass pagination and show the full list.
    ShowAll,
    /// Return to paginated display, back on the first page.
    ShowPaged,
}

impl ViewState {
    /// Apply one event, producing the next state.
    ///
    /// Selecting a data kind or view always resets pagination: stale page
    /// state must never carry across a dataset or view switch. Paging
    /// events clamp against `total_pages`, never error.
    #[must_use]
    pub fn reduce(self, event: ViewEvent, total_pages: usize) -> Self {
        let last_page = total_pages.saturating_sub(1);
        match event {
            ViewEvent::SelectDataKind(data_kind) => Self {
                data_kind,
                page: 0,
                show_all: false,
                ..self
            },
            ViewEvent::SelectView(view_kind) => Self {
                view_kind,
                page: 0,
                show_all: false,
                ..self
            },
            ViewEvent::NextPage => Self {
                page: (self.page + 1).min(last_page),
                ..self
            },
            ViewEvent::PrevPage => Self {
                page: self.page.saturating_sub(1),
                ..self
            },
            ViewEvent::SetPage(page) => Self {
                page: page.min(last_page),
                ..self
            },
            ViewEvent::ShowAll => Self {
                show_all: true,
                ..self
            },
            ViewEvent::ShowPaged => Self {
                show_all: false,
                page: 0,
                ..self
            },
        }
    }
}

/// Per-view caps and aggregation settings.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Maximum pie slices.
    pub pie_max_items: usize,
    /// Maximum treemap tiles.
    pub treemap_max_items: usize,
    /// List page size.
    pub list_page_size: usize,
    /// Others-bucket threshold, in percent.
    pub aggregation_threshold: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            pie_max_items: PIE_MAX_ITEMS,
            treemap_max_items: TREEMAP_MAX_ITEMS,
            list_page_size: LIST_PAGE_SIZE,
            aggregation_threshold: AGGREGATION_THRESHOLD,
        }
    }
}

/// The data one view renders right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewData<'a> {
    /// Aggregated, Others-collapsed items for pie/treemap.
    Aggregated(&'a [AggregatedItem]),
    /// One window of the full, uncollapsed item list.
    Window {
        /// Items on the current page (or all items under show-all).
        items: &'a [AggregatedItem],
        /// Pagination bookkeeping for the full list.
        info: PageInfo,
        /// Whether the full list warrants a large-dataset advisory.
        large_dataset: bool,
    },
}

impl ViewData<'_> {
    /// Items backing the view, whichever variant.
    #[must_use]
    pub fn items(&self) -> &[AggregatedItem] {
        match self {
            Self::Aggregated(items) => items,
            Self::Window { items, .. } => items,
        }
    }

    /// Whether there is nothing to render (empty-state display).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

type ChangeCallback<T> = Box<dyn Fn(T)>;

/// One dataset, many synchronized projections.
///
/// Owns the canonical aggregated data for the lifetime of one scan result
/// set. All derived lists are recomputed (never mutated in place) when a
/// dataset is installed, so projections stay cheap and reference-stable
/// between installs.
#[derive(Default)]
pub struct DistributionView {
    config: ViewConfig,
    state: ViewState,
    dataset: Option<ScanDataset>,
    file_type_full: Vec<AggregatedItem>,
    folder_full: Vec<AggregatedItem>,
    file_type_agg: Vec<AggregatedItem>,
    folder_agg: Vec<AggregatedItem>,
    on_data_kind_change: Option<ChangeCallback<DataKind>>,
    on_view_change: Option<ChangeCallback<ViewKind>>,
}

impl fmt::Debug for DistributionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistributionView")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("generation", &self.dataset.as_ref().map(|d| d.generation))
            .field("file_types", &self.file_type_full.len())
            .field("folders", &self.folder_full.len())
            .finish_non_exhaustive()
    }
}

impl DistributionView {
    /// Create an empty view with default caps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty view with explicit caps.
    #[must_use]
    pub fn with_config(config: ViewConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Register a notification for data-kind switches. Notification only;
    /// state transitions never wait on it.
    #[must_use]
    pub fn on_data_kind_change(mut self, callback: impl Fn(DataKind) + 'static) -> Self {
        self.on_data_kind_change = Some(Box::new(callback));
        self
    }

    /// Register a notification for view switches.
    #[must_use]
    pub fn on_view_change(mut self, callback: impl Fn(ViewKind) + 'static) -> Self {
        self.on_view_change = Some(Box::new(callback));
        self
    }

    /// Install a new dataset, replacing the previous one.
    ///
    /// A dataset older than the installed one (by generation) is a stale
    /// response from a superseded request and is discarded; returns
    /// whether the dataset was installed. Derived lists are recomputed
    /// from scratch; nothing from the superseded computation is retained.
    pub fn install_dataset(&mut self, dataset: ScanDataset) -> bool {
        if let Some(current) = &self.dataset {
            if dataset.generation < current.generation {
                debug!(
                    incoming = dataset.generation,
                    installed = current.generation,
                    "discarding stale dataset"
                );
                return false;
            }
        }
        debug!(generation = dataset.generation, "installing dataset");

        let total = dataset.summary.total_size;
        let file_type_items: Vec<WeightedItem> = dataset.file_type_items();
        let folder_items: Vec<WeightedItem> = dataset.folder_items();

        self.file_type_full = annotate(&file_type_items, total);
        self.folder_full = annotate(&folder_items, total);
        self.file_type_agg = aggregate(
            &file_type_items,
            total,
            self.config.pie_max_items,
            self.config.aggregation_threshold,
        );
        self.folder_agg = aggregate(
            &folder_items,
            total,
            self.config.pie_max_items,
            self.config.aggregation_threshold,
        );
        self.dataset = Some(dataset);
        true
    }

    /// Drop the installed dataset and all derived lists.
    pub fn clear_dataset(&mut self) {
        self.dataset = None;
        self.file_type_full = Vec::new();
        self.folder_full = Vec::new();
        self.file_type_agg = Vec::new();
        self.folder_agg = Vec::new();
    }

    /// The installed scan summary, if any.
    #[must_use]
    pub fn summary(&self) -> Option<&ScanSummary> {
        self.dataset.as_ref().map(|d| &d.summary)
    }

    /// Whether there is anything to render at all. Empty categories get
    /// an explicit empty state, never a crashed view.
    #[must_use]
    pub fn is_data_available(&self) -> bool {
        self.summary()
            .is_some_and(|s| s.total_files > 0 && s.total_size > 0)
    }

    /// Current view state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Apply one user action.
    ///
    /// Data-kind and view switches fire their registered callbacks after
    /// the transition; the callbacks cannot veto or delay it.
    pub fn dispatch(&mut self, event: ViewEvent) {
        self.state = self.state.reduce(event, self.total_pages());
        match event {
            ViewEvent::SelectDataKind(kind) => {
                if let Some(callback) = &self.on_data_kind_change {
                    callback(kind);
                }
            }
            ViewEvent::SelectView(view) => {
                if let Some(callback) = &self.on_view_change {
                    callback(view);
                }
            }
            _ => {}
        }
    }

    fn full_list(&self) -> &[AggregatedItem] {
        match self.state.data_kind {
            DataKind::FileTypes => &self.file_type_full,
            DataKind::Folders => &self.folder_full,
        }
    }

    fn aggregated_list(&self) -> &[AggregatedItem] {
        match self.state.data_kind {
            DataKind::FileTypes => &self.file_type_agg,
            DataKind::Folders => &self.folder_agg,
        }
    }

    /// Number of list-view pages for the current category.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        PageInfo::new(self.full_list().len(), self.config.list_page_size, 0).total_pages
    }

    /// The items the active view should render.
    ///
    /// Pie and treemap get the aggregated list capped to their maximum;
    /// the list view gets the full uncollapsed list, windowed unless
    /// show-all is active.
    #[must_use]
    pub fn current_data(&self) -> ViewData<'_> {
        match self.state.view_kind {
            ViewKind::Pie => {
                let items = self.aggregated_list();
                ViewData::Aggregated(&items[..items.len().min(self.config.pie_max_items)])
            }
            ViewKind::Treemap => {
                let items = self.aggregated_list();
                ViewData::Aggregated(&items[..items.len().min(self.config.treemap_max_items)])
            }
            ViewKind::List => {
                let full = self.full_list();
                let info = PageInfo::new(full.len(), self.config.list_page_size, self.state.page);
                let items = if self.state.show_all {
                    full
                } else {
                    page_window(full, self.state.page, self.config.list_page_size)
                };
                ViewData::Window {
                    items,
                    info,
                    large_dataset: is_large_dataset(full.len()),
                }
            }
        }
    }
}
