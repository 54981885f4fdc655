//! Aggregation of weighted items into a bounded, render-ready list.
//!
//! Reduces a raw weighted item list (file types, folders, files) into a
//! descending-sorted list annotated with percentages, collapsing the long
//! tail of insignificant items into a single synthetic "Others" bucket so
//! that pie and treemap views stay legible and cheap to render.

use crate::color::{self, Rgba};

/// Display name of the synthetic bucket that absorbs the long tail.
pub const OTHERS_LABEL: &str = "Others";

/// A named entity with a byte-size weight driving its visual share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedItem {
    /// Display name. Not required to be unique across the raw list.
    pub name: String,
    /// Weight in bytes.
    pub weight: u64,
    /// Secondary count shown in sublines (files in a folder, items of a
    /// type). Zero when the source has none.
    pub secondary_count: u64,
    /// Tile/slice color.
    pub color: Rgba,
}

impl WeightedItem {
    /// Create a weighted item with a palette color assigned by rank.
    #[must_use]
    pub fn new(name: impl Into<String>, weight: u64, rank: usize) -> Self {
        Self {
            name: name.into(),
            weight,
            secondary_count: 0,
            color: color::palette_color(rank),
        }
    }

    /// Set the secondary count.
    #[must_use]
    pub fn with_count(mut self, count: u64) -> Self {
        self.secondary_count = count;
        self
    }

    /// Set an explicit color.
    #[must_use]
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }
}

/// A weighted item annotated with its share of the total, as produced by
/// [`aggregate`] or [`annotate`].
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedItem {
    /// Display name.
    pub name: String,
    /// Weight in bytes. For the Others bucket, the accumulated weight of
    /// every folded item.
    pub weight: u64,
    /// Accumulated secondary count.
    pub secondary_count: u64,
    /// Tile/slice color.
    pub color: Rgba,
    /// Share of the total weight, in percent. Zero when the total is zero.
    /// Not clamped: upstream bookkeeping errors are reported as-is.
    pub percentage: f64,
    /// Whether this entry is the synthetic Others bucket.
    pub is_others: bool,
}

impl AggregatedItem {
    fn from_item(item: &WeightedItem, percentage: f64) -> Self {
        Self {
            name: item.name.clone(),
            weight: item.weight,
            secondary_count: item.secondary_count,
            color: item.color,
            percentage,
            is_others: false,
        }
    }
}

fn share(weight: u64, total_weight: u64) -> f64 {
    if total_weight == 0 {
        0.0
    } else {
        weight as f64 / total_weight as f64 * 100.0
    }
}

/// Stable descending sort by weight; ties keep input order so output is
/// deterministic across calls with identical input.
fn sorted_desc(items: &[WeightedItem]) -> Vec<&WeightedItem> {
    let mut sorted: Vec<&WeightedItem> = items.iter().collect();
    sorted.sort_by(|a, b| b.weight.cmp(&a.weight));
    sorted
}

/// Annotate every item with its percentage of `total_weight`, sorted
/// descending by weight, without collapsing anything.
///
/// This is the list-view projection: the full dataset, percentage-tagged.
#[must_use]
pub fn annotate(items: &[WeightedItem], total_weight: u64) -> Vec<AggregatedItem> {
    sorted_desc(items)
        .into_iter()
        .map(|item| AggregatedItem::from_item(item, share(item.weight, total_weight)))
        .collect()
}

/// Reduce a raw weighted item list into a bounded, Others-collapsed list.
///
/// Items are sorted descending by weight and annotated with percentages.
/// An item is folded into the Others bucket only when both hold: its share
/// is below `min_percentage_threshold` (in percent), and `max_visible - 1`
/// items have already been kept. The bucket accumulates weight and
/// secondary counts and is appended after all kept items.
///
/// A zero `total_weight` disables collapsing entirely (every percentage is
/// zero); the sorted list is returned as-is, capped at `max_visible`.
///
/// Pure function of its inputs; conservation holds: the weights of the
/// output (bucket included) sum to the weights of the input, minus only
/// zero-weight tail items that had nothing to contribute.
#[must_use]
pub fn aggregate(
    items: &[WeightedItem],
    total_weight: u64,
    max_visible: usize,
    min_percentage_threshold: f64,
) -> Vec<AggregatedItem> {
    let sorted = sorted_desc(items);

    if total_weight == 0 {
        return sorted
            .into_iter()
            .take(max_visible)
            .map(|item| AggregatedItem::from_item(item, 0.0))
            .collect();
    }

    let keep_cap = max_visible.saturating_sub(1);
    let mut kept: Vec<AggregatedItem> = Vec::with_capacity(max_visible);
    let mut others_weight: u64 = 0;
    let mut others_count: u64 = 0;

    for item in sorted {
        let percentage = share(item.weight, total_weight);
        if percentage < min_percentage_threshold && kept.len() >= keep_cap {
            others_weight += item.weight;
            others_count += item.secondary_count.max(1);
        } else {
            kept.push(AggregatedItem::from_item(item, percentage));
        }
    }

    if others_weight > 0 {
        kept.push(AggregatedItem {
            name: OTHERS_LABEL.to_string(),
            weight: others_weight,
            secondary_count: others_count,
            color: color::OTHERS,
            percentage: share(others_weight, total_weight),
            is_others: true,
        });
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(weights: &[u64]) -> Vec<WeightedItem> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| WeightedItem::new(format!("item-{i}"), w, i))
            .collect()
    }

    #[test]
    fn test_two_items_no_bucket() {
        let input = vec![
            WeightedItem::new("Videos", 190_000_000_000, 0),
            WeightedItem::new("Images", 10_000_000_000, 1),
        ];
        let out = aggregate(&input, 200_000_000_000, 10, 1.0);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|i| !i.is_others));
        assert!((out[0].percentage - 95.0).abs() < 1e-9);
        assert!((out[1].percentage - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_long_tail_folds_into_others() {
        // 20 items, 1% of the total each; the rest of the disk is unnamed.
        let input = items(&[10; 20]);
        let out = aggregate(&input, 1000, 10, 5.0);
        assert_eq!(out.len(), 10);
        let others = out.last().unwrap();
        assert!(others.is_others);
        assert_eq!(others.name, OTHERS_LABEL);
        assert_eq!(others.weight, 11 * 10);
        assert!((others.percentage - 11.0).abs() < 1e-9);
        assert_eq!(out.iter().filter(|i| i.is_others).count(), 1);
    }

    #[test]
    fn test_zero_total_no_division() {
        let input = items(&[0, 0, 0]);
        let out = aggregate(&input, 0, 10, 1.0);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|i| i.percentage == 0.0));
        assert!(out.iter().all(|i| !i.is_others));
    }

    #[test]
    fn test_zero_total_caps_at_max_visible() {
        let input = items(&[0; 8]);
        let out = aggregate(&input, 0, 5, 1.0);
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[], 100, 10, 1.0).is_empty());
        assert!(annotate(&[], 100).is_empty());
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let input = vec![
            WeightedItem::new("a", 5, 0),
            WeightedItem::new("b", 9, 1),
            WeightedItem::new("c", 5, 2),
        ];
        let out = aggregate(&input, 19, 10, 0.0);
        let names: Vec<&str> = out.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_conservation_with_bucket() {
        let input = items(&[500, 300, 7, 5, 3, 2, 1, 1, 1]);
        let total: u64 = input.iter().map(|i| i.weight).sum();
        let out = aggregate(&input, total, 4, 2.0);
        let out_total: u64 = out.iter().map(|i| i.weight).sum();
        assert_eq!(out_total, total);
    }

    #[test]
    fn test_overreported_weight_passes_through() {
        // Weight bookkeeping error upstream: a single item above 100%.
        let input = vec![WeightedItem::new("broken", 300, 0)];
        let out = aggregate(&input, 200, 10, 1.0);
        assert_eq!(out.len(), 1);
        assert!((out[0].percentage - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_others_accumulates_secondary_counts() {
        let input = vec![
            WeightedItem::new("big", 990, 0).with_count(12),
            WeightedItem::new("t1", 4, 1).with_count(7),
            WeightedItem::new("t2", 3, 2).with_count(2),
            WeightedItem::new("t3", 3, 3), // no count reported, counts as 1
        ];
        let out = aggregate(&input, 1000, 2, 1.0);
        assert_eq!(out.len(), 2);
        let others = &out[1];
        assert!(others.is_others);
        assert_eq!(others.secondary_count, 10);
        assert_eq!(others.color, crate::color::OTHERS);
    }

    #[test]
    fn test_annotate_keeps_everything() {
        let input = items(&[900, 50, 30, 15, 3, 1, 1]);
        let out = annotate(&input, 1000);
        assert_eq!(out.len(), 7);
        assert!(out.iter().all(|i| !i.is_others));
        assert!((out[0].percentage - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let input = items(&[40, 40, 40, 10, 10, 10, 5, 5, 5]);
        let a = aggregate(&input, 165, 5, 10.0);
        let b = aggregate(&input, 165, 5, 10.0);
        assert_eq!(a, b);
    }
}
