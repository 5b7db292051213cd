//! The ordered region store.
//!
//! Insertion order is significant: the first region added to an empty
//! store becomes the reference every other region is compared against.
//! Removing the reference never promotes another region; the store stays
//! referenceless until the next successful [`RegionStore::add`] or a
//! [`RegionStore::clear`].

use regionlens_common::RegionlensError;

use crate::geometry::{Bounds, ImageDims, RawRect};
use crate::region::{DisplayColor, Region, RegionId};

/// Errors raised by store mutations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegionError {
    #[error("Region ({x1}, {y1}, {x2}, {y2}) has no area inside a {width}x{height} image")]
    InvalidGeometry {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: u32,
        height: u32,
    },
}

impl RegionError {
    fn invalid_geometry(raw: &RawRect, dims: ImageDims) -> Self {
        Self::InvalidGeometry {
            x1: raw.x1,
            y1: raw.y1,
            x2: raw.x2,
            y2: raw.y2,
            width: dims.width,
            height: dims.height,
        }
    }
}

impl From<RegionError> for RegionlensError {
    fn from(err: RegionError) -> Self {
        RegionlensError::geometry(err.to_string())
    }
}

/// Ordered collection of regions drawn over one image.
#[derive(Debug, Clone, Default)]
pub struct RegionStore {
    regions: Vec<Region>,
    next_id: u64,
    created: u64,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize, clamp, and append a new region.
    ///
    /// The region becomes the reference if the store currently has none.
    /// Rectangles that clamp to zero width or height are rejected and
    /// leave the store unchanged.
    pub fn add(&mut self, raw: RawRect, dims: ImageDims) -> Result<Region, RegionError> {
        let bounds = Bounds::from_raw(&raw, dims)
            .filter(|b| !b.is_empty())
            .ok_or_else(|| RegionError::invalid_geometry(&raw, dims))?;

        let region = Region {
            id: RegionId(self.next_id),
            bounds,
            is_reference: self.reference().is_none(),
            display_color: self.next_color(),
        };
        self.next_id += 1;
        self.created += 1;

        tracing::debug!(
            region = %region.id,
            bounds = %region.bounds,
            reference = region.is_reference,
            color = %region.display_color,
            "Region added"
        );

        self.regions.push(region.clone());
        Ok(region)
    }

    /// Remove a region by id. Unknown ids are ignored.
    pub fn remove(&mut self, id: RegionId) -> Option<Region> {
        let index = self.regions.iter().position(|r| r.id == id)?;
        let removed = self.regions.remove(index);

        if removed.is_reference && !self.regions.is_empty() {
            tracing::debug!(
                region = %removed.id,
                remaining = self.regions.len(),
                "Reference region removed, store is now referenceless"
            );
        } else {
            tracing::debug!(region = %removed.id, "Region removed");
        }
        Some(removed)
    }

    /// Remove every region. The next region added becomes the reference.
    pub fn clear(&mut self) {
        tracing::debug!(cleared = self.regions.len(), "Region store cleared");
        self.regions.clear();
    }

    /// Read-only view of the regions in insertion order.
    pub fn snapshot(&self) -> &[Region] {
        &self.regions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// The current reference region, if one is present.
    pub fn reference(&self) -> Option<&Region> {
        self.regions.iter().find(|r| r.is_reference)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// First palette color no current region uses, else cycle by creation count.
    fn next_color(&self) -> DisplayColor {
        DisplayColor::PALETTE
            .iter()
            .copied()
            .find(|color| self.regions.iter().all(|r| r.display_color != *color))
            .unwrap_or_else(|| DisplayColor::cycled(self.created))
    }
}
