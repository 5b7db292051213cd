//! Region entity and its identity/color types.

use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;

/// Stable identifier of a region, unique within the store that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(pub u64);

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outline color used when drawing a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl DisplayColor {
    /// Assignment order for new regions.
    pub const PALETTE: [DisplayColor; 5] = [
        DisplayColor::Red,
        DisplayColor::Blue,
        DisplayColor::Green,
        DisplayColor::Yellow,
        DisplayColor::Purple,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DisplayColor::Red => "red",
            DisplayColor::Blue => "blue",
            DisplayColor::Green => "green",
            DisplayColor::Yellow => "yellow",
            DisplayColor::Purple => "purple",
        }
    }

    /// Color for the `n`-th region created, cycling through the palette.
    pub fn cycled(n: u64) -> Self {
        Self::PALETTE[(n % Self::PALETTE.len() as u64) as usize]
    }
}

impl std::fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One user-drawn rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Identifier assigned at creation; never changes.
    pub id: RegionId,

    /// Bounds as clamped to the image the region was drawn on.
    pub bounds: Bounds,

    /// Whether this region is the comparison baseline.
    pub is_reference: bool,

    /// Outline color for presentation only.
    pub display_color: DisplayColor,
}
