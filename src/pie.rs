//! Pie/doughnut slice projection.
//!
//! Projects an aggregated item list onto slice geometry: start/end angles
//! beginning at 12 o'clock and proceeding clockwise, plus doughnut radii
//! and center-text helpers. Rendering frontends consume the angles; no
//! drawing happens here.

use std::f64::consts::PI;

use crate::aggregate::AggregatedItem;
use crate::color::Rgba;
use crate::format::format_size;
use crate::geometry::Point;

/// One slice of a pie or doughnut chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Display name of the underlying item.
    pub name: String,
    /// Slice color.
    pub color: Rgba,
    /// Fraction of the rendered whole, in `[0, 1]`. Fractions across one
    /// projection sum to 1.
    pub fraction: f64,
    /// The item's percentage of the dataset total (may differ from
    /// `fraction` when the visible set was capped).
    pub percentage: f64,
    /// Weight in bytes.
    pub weight: u64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Whether the slice is the synthetic Others bucket.
    pub is_others: bool,
}

impl PieSlice {
    /// Angular sweep of the slice in radians.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Angle through the middle of the slice, where labels anchor.
    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep() / 2.0
    }
}

/// Slice projector with doughnut geometry options.
#[derive(Debug, Clone)]
pub struct PieProjection {
    inner_radius: f32,
    outer_radius: f32,
    /// Slices below this fraction are geometry-only: too thin to label.
    label_min_fraction: f64,
}

impl Default for PieProjection {
    fn default() -> Self {
        Self::new()
    }
}

impl PieProjection {
    /// Create a doughnut projection with the frontend's default radii.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner_radius: 60.0,
            outer_radius: 100.0,
            label_min_fraction: 0.03,
        }
    }

    /// Set the inner and outer radii. An inner radius of zero renders as
    /// a full pie.
    #[must_use]
    pub fn radii(mut self, inner: f32, outer: f32) -> Self {
        self.inner_radius = inner;
        self.outer_radius = outer;
        self
    }

    /// Set the minimum fraction for a slice to carry a label.
    #[must_use]
    pub fn label_min_fraction(mut self, fraction: f64) -> Self {
        self.label_min_fraction = fraction;
        self
    }

    /// Inner radius.
    #[must_use]
    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    /// Outer radius.
    #[must_use]
    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    /// Project items onto slices, starting at 12 o'clock.
    ///
    /// Fractions derive from weights over the visible set's weight sum, so
    /// the ring is always complete. A zero weight sum yields no slices
    /// rather than NaN angles.
    #[must_use]
    pub fn slices(&self, items: &[AggregatedItem]) -> Vec<PieSlice> {
        let visible_total: u64 = items.iter().map(|i| i.weight).sum();
        if visible_total == 0 {
            return Vec::new();
        }

        let mut start_angle = -PI / 2.0;
        items
            .iter()
            .map(|item| {
                let fraction = item.weight as f64 / visible_total as f64;
                let end_angle = start_angle + 2.0 * PI * fraction;
                let slice = PieSlice {
                    name: item.name.clone(),
                    color: item.color,
                    fraction,
                    percentage: item.percentage,
                    weight: item.weight,
                    start_angle,
                    end_angle,
                    is_others: item.is_others,
                };
                start_angle = end_angle;
                slice
            })
            .collect()
    }

    /// Whether a slice is wide enough to carry a label.
    #[must_use]
    pub fn shows_label(&self, slice: &PieSlice) -> bool {
        slice.fraction > self.label_min_fraction
    }

    /// Label anchor point for a slice, just outside the outer radius.
    #[must_use]
    pub fn label_anchor(&self, center: Point, slice: &PieSlice) -> Point {
        let r = f64::from(self.outer_radius) + 14.0;
        let mid = slice.mid_angle();
        Point::new(
            center.x + (r * mid.cos()) as f32,
            center.y + (r * mid.sin()) as f32,
        )
    }

    /// Doughnut center text: the formatted total of the underlying data.
    #[must_use]
    pub fn center_text(&self, total_weight: u64) -> String {
        format_size(total_weight)
    }
}
