//! Common types and utilities shared across the terrain contouring crates.

pub mod bbox;
pub mod error;
pub mod point;

pub use bbox::BoundingBox;
pub use error::{ContourError, ContourResult, ProviderError};
pub use point::{ElevationSample, GeoPoint};
