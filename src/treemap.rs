//! Treemap layout engine.
//!
//! Converts an aggregated item list into non-overlapping rectangles sized
//! proportionally to weight within a fixed canvas. The layout is a
//! row-walk heuristic with a percentage-banded aspect rule, not an optimal
//! squarified treemap: the contract is non-overlap and containment, not
//! minimal aspect-ratio variance.

use tracing::warn;

use crate::aggregate::AggregatedItem;
use crate::geometry::Rect;

/// Default canvas width, matching the frontend's viewport.
pub const DEFAULT_CANVAS_WIDTH: f32 = 400.0;
/// Default canvas height, matching the frontend's viewport.
pub const DEFAULT_CANVAS_HEIGHT: f32 = 320.0;
/// Default gap between tiles.
pub const DEFAULT_PADDING: f32 = 3.0;

/// Row-walk treemap layout with tunable banding constants.
///
/// Items are expected pre-sorted descending by weight (the aggregator's
/// output order); the engine does not re-sort, so the biggest-first visual
/// grouping stays stable across re-layouts.
///
/// The aspect bands avoid extreme slivers at both ends of the
/// distribution: dominant shares get a width-capped wide rectangle,
/// mid-size shares a narrower cap, and small shares a square
/// approximation. The band thresholds are tuning constants carried over
/// from the shipped layout, not derived from a model.
#[derive(Debug, Clone)]
pub struct TreemapLayout {
    width: f32,
    height: f32,
    padding: f32,
    /// Percentage at or above which an item uses the wide band.
    wide_band: f64,
    /// Percentage at or above which an item uses the medium band.
    medium_band: f64,
    /// Width cap for the wide band, as a fraction of canvas width.
    wide_cap: f32,
    /// Width cap for the medium band, as a fraction of canvas width.
    medium_cap: f32,
    /// Smallest tile width the layout will produce (before padding inset).
    min_tile_width: f32,
    /// Smallest tile height the layout will produce (before padding inset).
    min_tile_height: f32,
}

impl Default for TreemapLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl TreemapLayout {
    /// Create a layout with the default canvas, padding and bands.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            padding: DEFAULT_PADDING,
            wide_band: 30.0,
            medium_band: 15.0,
            wide_cap: 0.6,
            medium_cap: 0.4,
            min_tile_width: 50.0,
            min_tile_height: 30.0,
        }
    }

    /// Set the canvas size.
    #[must_use]
    pub fn canvas(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the gap between tiles.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the percentage thresholds for the wide and medium aspect bands.
    #[must_use]
    pub fn bands(mut self, wide: f64, medium: f64) -> Self {
        self.wide_band = wide;
        self.medium_band = medium;
        self
    }

    /// Set the width caps (fractions of canvas width) for the wide and
    /// medium bands.
    #[must_use]
    pub fn width_caps(mut self, wide: f32, medium: f32) -> Self {
        self.wide_cap = wide;
        self.medium_cap = medium;
        self
    }

    /// Set the minimum visual tile size. Flooring to this size is allowed
    /// to break strict proportionality for the smallest items.
    #[must_use]
    pub fn min_tile(mut self, width: f32, height: f32) -> Self {
        self.min_tile_width = width;
        self.min_tile_height = height;
        self
    }

    /// Ideal width/height for one item before placement constraints.
    fn target_extent(&self, percentage: f64, area: f32) -> (f32, f32) {
        if area <= 0.0 || !area.is_finite() {
            return (0.0, 0.0);
        }
        let width = if percentage >= self.wide_band {
            (self.width * self.wide_cap).min((area * 2.0).sqrt())
        } else if percentage >= self.medium_band {
            (self.width * self.medium_cap).min((area * 1.5).sqrt())
        } else {
            area.sqrt()
        };
        if width > 0.0 {
            (width, area / width)
        } else {
            (0.0, 0.0)
        }
    }

    /// Lay out `items` as one rectangle per item, in input order.
    ///
    /// Invalid weight data (non-finite percentage) degrades to zero area
    /// and is floored to the minimum tile size; it never panics. An
    /// unusable canvas yields no rectangles.
    #[must_use]
    pub fn layout(&self, items: &[AggregatedItem]) -> Vec<Rect> {
        if items.is_empty() {
            return Vec::new();
        }
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            warn!(
                width = self.width,
                height = self.height,
                "treemap canvas is unusable, skipping layout"
            );
            return Vec::new();
        }

        let pad = self.padding.max(0.0);

        // A lone item fills the canvas minus padding.
        if items.len() == 1 {
            return vec![Rect::new(
                pad / 2.0,
                pad / 2.0,
                (self.width - pad).max(0.0),
                (self.height - pad).max(0.0),
            )];
        }

        let mut rects = Vec::with_capacity(items.len());
        let mut cursor_x: f32 = 0.0;
        let mut cursor_y: f32 = 0.0;
        let mut row_height: f32 = 0.0;
        let mut clamped_tiles = 0usize;

        for item in items {
            let percentage = if item.percentage.is_finite() {
                item.percentage
            } else {
                0.0
            };
            let area = (percentage / 100.0) as f32 * self.width * self.height;
            let (mut tile_w, mut tile_h) = self.target_extent(percentage, area);

            // Wrap before clamping, on the unconstrained width.
            if cursor_x + tile_w > self.width {
                cursor_x = 0.0;
                cursor_y += row_height + pad;
                row_height = 0.0;
            }

            // Clamp to the remaining canvas, then floor to the minimum
            // visual size so no tile collapses to invisibility.
            tile_w = tile_w
                .min(self.width - cursor_x - pad)
                .max(self.min_tile_width);
            tile_h = tile_h
                .min(self.height - cursor_y - pad)
                .max(self.min_tile_height);

            // The floor may push past the canvas edge; containment wins
            // over the minimum size.
            let max_w = (self.width - cursor_x.min(self.width)).max(0.0);
            let max_h = (self.height - cursor_y.min(self.height)).max(0.0);
            if tile_w > max_w || tile_h > max_h {
                clamped_tiles += 1;
            }
            tile_w = tile_w.min(max_w);
            tile_h = tile_h.min(max_h);

            rects.push(Rect::new(
                (cursor_x + pad / 2.0).min(self.width),
                (cursor_y + pad / 2.0).min(self.height),
                (tile_w - pad).max(0.0),
                (tile_h - pad).max(0.0),
            ));

            cursor_x += tile_w;
            row_height = row_height.max(tile_h);
        }

        if clamped_tiles > 0 {
            warn!(
                clamped_tiles,
                total = items.len(),
                "treemap tiles clamped to canvas bounds, proportionality degraded"
            );
        }

        rects
    }
}
