//! Pagination and windowing for large item collections.
//!
//! Slices item lists into fixed-size pages without re-sorting or
//! re-aggregating. Out-of-range page requests are clamped, never an
//! error; "show all" is the caller's bypass at the view layer.

/// Item count above which callers should surface a "large dataset"
/// advisory before rendering everything. Advisory only, never a hard cap.
pub const LARGE_DATASET_THRESHOLD: usize = 50;

/// Whether a list is large enough to warrant the advisory.
#[must_use]
pub fn is_large_dataset(total_items: usize) -> bool {
    total_items > LARGE_DATASET_THRESHOLD
}

/// Window `items` to one page.
///
/// The page index is clamped to the last page; an empty input or a zero
/// page size yields an empty window. Never panics.
#[must_use]
pub fn page_window<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if items.is_empty() || page_size == 0 {
        return &[];
    }
    let info = PageInfo::new(items.len(), page_size, page);
    let start = info.page * page_size;
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Pagination bookkeeping for one windowed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Total number of items across all pages.
    pub total_items: usize,
    /// Items per page.
    pub page_size: usize,
    /// Current page index, already clamped into range.
    pub page: usize,
    /// Total number of pages (at least 1).
    pub total_pages: usize,
}

impl PageInfo {
    /// Compute pagination state, clamping `requested_page` into range.
    #[must_use]
    pub fn new(total_items: usize, page_size: usize, requested_page: usize) -> Self {
        let total_pages = if page_size == 0 {
            1
        } else {
            total_items.div_ceil(page_size).max(1)
        };
        Self {
            total_items,
            page_size,
            page: requested_page.min(total_pages - 1),
            total_pages,
        }
    }

    /// Whether the current page is the first.
    #[must_use]
    pub fn is_first_page(&self) -> bool {
        self.page == 0
    }

    /// Whether the current page is the last.
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.page + 1 >= self.total_pages
    }

    /// Index one past the last item shown on the current page, for
    /// "Showing N of M" summaries.
    #[must_use]
    pub fn shown_through(&self) -> usize {
        ((self.page + 1) * self.page_size).min(self.total_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let items: Vec<u32> = (0..100).collect();
        let window = page_window(&items, 0, 20);
        assert_eq!(window.len(), 20);
        assert_eq!(window[0], 0);
        assert_eq!(window[19], 19);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (0..237).collect();
        let window = page_window(&items, 11, 20);
        assert_eq!(window.len(), 17);
        assert_eq!(window[0], 220);
        assert_eq!(window[16], 236);
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let items: Vec<u32> = (0..237).collect();
        let window = page_window(&items, 999, 20);
        assert_eq!(window.len(), 17);
        assert_eq!(window[0], 220);
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<u32> = Vec::new();
        assert!(page_window(&items, 0, 20).is_empty());
        assert!(page_window(&items, 5, 20).is_empty());
    }

    #[test]
    fn test_zero_page_size() {
        let items: Vec<u32> = (0..10).collect();
        assert!(page_window(&items, 0, 0).is_empty());
    }

    #[test]
    fn test_exact_multiple() {
        let items: Vec<u32> = (0..40).collect();
        let info = PageInfo::new(items.len(), 20, 1);
        assert_eq!(info.total_pages, 2);
        assert!(info.is_last_page());
        assert_eq!(page_window(&items, 1, 20).len(), 20);
    }

    #[test]
    fn test_page_info_clamping() {
        let info = PageInfo::new(237, 20, 50);
        assert_eq!(info.total_pages, 12);
        assert_eq!(info.page, 11);
        assert!(info.is_last_page());
        assert!(!info.is_first_page());
    }

    #[test]
    fn test_shown_through() {
        let info = PageInfo::new(237, 20, 0);
        assert_eq!(info.shown_through(), 20);
        let last = PageInfo::new(237, 20, 11);
        assert_eq!(last.shown_through(), 237);
    }

    #[test]
    fn test_large_dataset_advisory() {
        assert!(!is_large_dataset(50));
        assert!(is_large_dataset(51));
    }
}
