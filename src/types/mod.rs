//! Value types shared across the crate

pub mod geometry;

pub use geometry::{Geometry, Position, Size, StoredGeometry};
