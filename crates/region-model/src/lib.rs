//! RegionLens Region Model
//!
//! Defines the data contracts for user-drawn regions:
//! - **Geometry:** Raw gesture rectangles, normalized pixel bounds, image dimensions
//! - **Region:** Identity, bounds, reference flag, and display color
//! - **Store:** The ordered region collection and its reference invariant
//!
//! All bounds are integer pixel coordinates in a half-open
//! `[x1, x2) × [y1, y2)` convention. Nothing here touches pixel data.

pub mod geometry;
pub mod region;
pub mod store;

pub use geometry::*;
pub use region::*;
pub use store::*;
