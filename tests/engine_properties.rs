#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Property tests for the aggregation, layout and pagination contracts.

use diskviz::prelude::*;
use proptest::prelude::*;

fn weighted(weights: &[u64]) -> Vec<WeightedItem> {
    weights
        .iter()
        .enumerate()
        .map(|(i, &w)| WeightedItem::new(format!("item-{i}"), w, i))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Conservation of mass: the aggregated list (Others bucket included)
    /// carries exactly the input weight.
    #[test]
    fn prop_aggregate_conserves_weight(
        weights in prop::collection::vec(0u64..1_000_000_000_000, 0..50),
        max_visible in 1usize..20,
        threshold in 0.0f64..10.0
    ) {
        let items = weighted(&weights);
        let total: u64 = weights.iter().sum();
        let out = aggregate(&items, total, max_visible, threshold);
        let out_total: u64 = out.iter().map(|i| i.weight).sum();
        prop_assert_eq!(out_total, total);
    }

    /// Output is sorted descending by weight, except the trailing Others
    /// bucket.
    #[test]
    fn prop_aggregate_sorted_descending(
        weights in prop::collection::vec(0u64..1_000_000_000, 0..50),
        max_visible in 1usize..20,
        threshold in 0.0f64..10.0
    ) {
        let items = weighted(&weights);
        let total: u64 = weights.iter().sum();
        let out = aggregate(&items, total, max_visible, threshold);

        prop_assert!(out.iter().filter(|i| i.is_others).count() <= 1);
        if let Some(others_at) = out.iter().position(|i| i.is_others) {
            prop_assert_eq!(others_at, out.len() - 1);
        }
        let kept: Vec<&AggregatedItem> = out.iter().filter(|i| !i.is_others).collect();
        for pair in kept.windows(2) {
            prop_assert!(pair[0].weight >= pair[1].weight);
        }
    }

    /// Aggregation is a pure function: identical input, identical output.
    #[test]
    fn prop_aggregate_deterministic(
        weights in prop::collection::vec(0u64..1_000_000, 0..30),
        max_visible in 1usize..16,
    ) {
        let items = weighted(&weights);
        let total: u64 = weights.iter().sum();
        let a = aggregate(&items, total, max_visible, 1.0);
        let b = aggregate(&items, total, max_visible, 1.0);
        prop_assert_eq!(a, b);
    }

    /// Two layout passes over identical arguments yield identical
    /// rectangles.
    #[test]
    fn prop_layout_idempotent(
        weights in prop::collection::vec(1u64..1_000_000, 1..12),
    ) {
        let items = weighted(&weights);
        let total: u64 = weights.iter().sum();
        let aggregated = aggregate(&items, total, 12, 1.0);
        let layout = TreemapLayout::new().canvas(400.0, 320.0).padding(3.0);
        prop_assert_eq!(layout.layout(&aggregated), layout.layout(&aggregated));
    }

    /// No two rectangles of one layout pass overlap with positive area.
    #[test]
    fn prop_layout_non_overlap(
        weights in prop::collection::vec(0u64..1_000_000, 0..12),
        width in 200.0f32..1200.0,
        height in 150.0f32..900.0,
    ) {
        let items = weighted(&weights);
        let total: u64 = weights.iter().sum();
        let aggregated = aggregate(&items, total, 12, 1.0);
        let rects = TreemapLayout::new().canvas(width, height).padding(3.0).layout(&aggregated);
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                prop_assert!(
                    a.intersection_area(b) < 1e-2,
                    "overlap between {:?} and {:?}", a, b
                );
            }
        }
    }

    /// Every rectangle lies within the canvas.
    #[test]
    fn prop_layout_containment(
        weights in prop::collection::vec(0u64..1_000_000, 0..12),
        width in 200.0f32..1200.0,
        height in 150.0f32..900.0,
    ) {
        let items = weighted(&weights);
        let total: u64 = weights.iter().sum();
        let aggregated = aggregate(&items, total, 12, 1.0);
        let rects = TreemapLayout::new().canvas(width, height).padding(3.0).layout(&aggregated);
        prop_assert_eq!(rects.len(), aggregated.len());
        for r in &rects {
            prop_assert!(r.x >= 0.0 && r.y >= 0.0, "{:?} escapes origin", r);
            prop_assert!(r.right() <= width + 1e-2, "{:?} escapes width {}", r, width);
            prop_assert!(r.bottom() <= height + 1e-2, "{:?} escapes height {}", r, height);
            prop_assert!(r.width >= 0.0 && r.height >= 0.0);
        }
    }

    /// Page windows stay inside the list and never exceed the page size;
    /// out-of-range pages clamp to the last page.
    #[test]
    fn prop_page_window_bounded(
        len in 0usize..500,
        page in 0usize..1000,
        page_size in 1usize..50,
    ) {
        let items: Vec<u32> = (0..len as u32).collect();
        let window = page_window(&items, page, page_size);
        prop_assert!(window.len() <= page_size);
        if len == 0 {
            prop_assert!(window.is_empty());
        } else {
            prop_assert!(!window.is_empty());
            let info = PageInfo::new(len, page_size, page);
            prop_assert!(info.page < info.total_pages);
            prop_assert_eq!(window[0], (info.page * page_size) as u32);
        }
    }

    /// Label decisions are deterministic and degrade monotonically: a
    /// strictly larger rectangle never gets a less detailed tier.
    #[test]
    fn prop_label_tier_monotone_in_size(
        w in 0.0f32..200.0,
        h in 0.0f32..120.0,
        grow_w in 0.0f32..100.0,
        grow_h in 0.0f32..60.0,
    ) {
        let policy = LabelPolicy::new();
        let small = policy.choose_tier(&Rect::new(0.0, 0.0, w, h));
        let large = policy.choose_tier(&Rect::new(0.0, 0.0, w + grow_w, h + grow_h));
        let rank = |tier: LabelTier| match tier {
            LabelTier::None => 0,
            LabelTier::Compact => 1,
            LabelTier::Full => 2,
        };
        prop_assert!(rank(large) >= rank(small));
    }
}
