//! Label-fit policy for rendered shapes.
//!
//! Decides, purely from a rectangle's pixel size, how much text it can
//! carry, and degrades gracefully as tiles shrink: full label with
//! size/percentage subline, a single truncated name, or nothing.

use std::fmt;

use crate::aggregate::AggregatedItem;
use crate::format::format_size;
use crate::geometry::Rect;

/// Level of textual detail chosen for a rendered shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelTier {
    /// Too small for any text.
    #[default]
    None,
    /// A single truncated name.
    Compact,
    /// Name plus a size/percentage subline.
    Full,
}

impl fmt::Display for LabelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Compact => "compact",
            Self::Full => "full",
        };
        write!(f, "{s}")
    }
}

/// The label chosen for one tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLabel {
    /// Chosen detail tier.
    pub tier: LabelTier,
    /// Primary text, absent on the `None` tier.
    pub text: Option<String>,
    /// Size/percentage subline, present only on the `Full` tier.
    pub subline: Option<String>,
}

/// Cut a name to `budget` characters, suffixing an ellipsis when cut.
///
/// Deterministic for a given name and budget; operates on characters, not
/// bytes, so multi-byte names never split mid-character.
#[must_use]
pub fn truncate_name(name: &str, budget: usize) -> String {
    if name.chars().count() <= budget {
        name.to_string()
    } else {
        let mut out: String = name.chars().take(budget).collect();
        out.push('…');
        out
    }
}

/// Size breakpoints and character budgets for tile labels.
#[derive(Debug, Clone)]
pub struct LabelPolicy {
    full_min_width: f32,
    full_min_height: f32,
    compact_min_width: f32,
    compact_min_height: f32,
    full_budget: usize,
    compact_budget: usize,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelPolicy {
    /// Create the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            full_min_width: 90.0,
            full_min_height: 60.0,
            compact_min_width: 40.0,
            compact_min_height: 25.0,
            full_budget: 24,
            compact_budget: 10,
        }
    }

    /// Set the minimum size for the full tier.
    #[must_use]
    pub fn full_breakpoint(mut self, width: f32, height: f32) -> Self {
        self.full_min_width = width;
        self.full_min_height = height;
        self
    }

    /// Set the minimum size for the compact tier.
    #[must_use]
    pub fn compact_breakpoint(mut self, width: f32, height: f32) -> Self {
        self.compact_min_width = width;
        self.compact_min_height = height;
        self
    }

    /// Set the character budgets for the full and compact tiers.
    #[must_use]
    pub fn budgets(mut self, full: usize, compact: usize) -> Self {
        self.full_budget = full;
        self.compact_budget = compact;
        self
    }

    /// Choose the label tier for a rectangle, from its size alone.
    #[must_use]
    pub fn choose_tier(&self, rect: &Rect) -> LabelTier {
        if rect.width > self.full_min_width && rect.height > self.full_min_height {
            LabelTier::Full
        } else if rect.width > self.compact_min_width && rect.height > self.compact_min_height {
            LabelTier::Compact
        } else {
            LabelTier::None
        }
    }

    /// Build the label for an item rendered at `rect`.
    #[must_use]
    pub fn fit(&self, item: &AggregatedItem, rect: &Rect) -> TileLabel {
        let tier = self.choose_tier(rect);
        match tier {
            LabelTier::Full => TileLabel {
                tier,
                text: Some(truncate_name(&item.name, self.full_budget)),
                subline: Some(format!(
                    "{} ({:.1}%)",
                    format_size(item.weight),
                    item.percentage
                )),
            },
            LabelTier::Compact => TileLabel {
                tier,
                text: Some(truncate_name(&item.name, self.compact_budget)),
                subline: None,
            },
            LabelTier::None => TileLabel {
                tier,
                text: None,
                subline: None,
            },
        }
    }
}
