//! Rectangle geometry for regions.
//!
//! Gesture input arrives as a [`RawRect`] with floating-point corners in
//! buffer space. [`Bounds`] is the normalized, clamped integer form the
//! rest of the engine works with.

use serde::{Deserialize, Serialize};

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDims {
    pub width: u32,
    pub height: u32,
}

impl ImageDims {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// A rectangle as drawn: two arbitrary corner points, not yet normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl RawRect {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build from the press and release points of a drag gesture.
    pub fn from_corners(start: (f64, f64), end: (f64, f64)) -> Self {
        Self::new(start.0, start.1, end.0, end.1)
    }

    /// Whether every coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }
}

/// Normalized half-open pixel bounds: `x1 <= x2`, `y1 <= y2`.
///
/// Covers columns `x1..x2` and rows `y1..y2`. Every constructor, including
/// deserialization, orders the corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BoundsRepr")]
pub struct Bounds {
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
}

#[derive(Deserialize)]
struct BoundsRepr {
    x1: u32,
    y1: u32,
    x2: u32,
    y2: u32,
}

impl From<BoundsRepr> for Bounds {
    fn from(repr: BoundsRepr) -> Self {
        Self::new(repr.x1, repr.y1, repr.x2, repr.y2)
    }
}

impl Bounds {
    /// Create bounds from two corners, ordering each axis.
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// Bounds covering a whole image.
    pub fn covering(dims: ImageDims) -> Self {
        Self::new(0, 0, dims.width, dims.height)
    }

    /// Normalize and clamp a raw gesture rectangle to the image.
    ///
    /// Coordinates are floored to whole pixels. Returns `None` if any
    /// coordinate is not finite. The result may still have zero area.
    pub fn from_raw(raw: &RawRect, dims: ImageDims) -> Option<Self> {
        if !raw.is_finite() {
            return None;
        }
        let clamp_x = |v: f64| v.floor().clamp(0.0, dims.width as f64) as u32;
        let clamp_y = |v: f64| v.floor().clamp(0.0, dims.height as f64) as u32;

        Some(Self::new(
            clamp_x(raw.x1.min(raw.x2)),
            clamp_y(raw.y1.min(raw.y2)),
            clamp_x(raw.x1.max(raw.x2)),
            clamp_y(raw.y1.max(raw.y2)),
        ))
    }

    /// Re-clamp already normalized bounds to (possibly smaller) dimensions.
    pub fn clamp_to(&self, dims: ImageDims) -> Self {
        Self::new(
            self.x1.min(dims.width),
            self.y1.min(dims.height),
            self.x2.min(dims.width),
            self.y2.min(dims.height),
        )
    }

    pub fn x1(&self) -> u32 {
        self.x1
    }

    pub fn y1(&self) -> u32 {
        self.y1
    }

    pub fn x2(&self) -> u32 {
        self.x2
    }

    pub fn y2(&self) -> u32 {
        self.y2
    }

    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }

    /// Number of pixels covered.
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Whether the bounds enclose no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Check if a pixel lies inside the half-open bounds.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}
