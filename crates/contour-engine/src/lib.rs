//! Terrain contouring for a user-drawn polygon.
//!
//! # Architecture
//!
//! ```text
//! boundary (lat/lng vertices)
//!      │
//!      ▼
//! SamplingGrid::for_bbox ──► ElevationProvider::fetch_elevations
//!                                   │
//!               ┌───────────────────┴──────────────┐
//!               ▼                                  ▼
//!        find_extrema (min/max)          elevation matrix [lng][lat]
//!               │                                  │
//!               ▼                                  │
//!        select_levels ──────────────► conrec (per-triangle segments)
//!                                                  │
//!                                                  ▼
//!                                       stitch_segments (polylines)
//!                                                  │
//!                                                  ▼
//!                                       clip_to_boundary (lat/lng)
//! ```
//!
//! Inside the pipeline geometry is handled in planar (lng, lat) order; the
//! only (lat, lng) output is the final `latlngs` of each polyline.

pub mod boundary;
pub mod clip;
pub mod conrec;
pub mod extremum;
pub mod grid;
pub mod levels;
pub mod pipeline;
pub mod settings;
pub mod stitch;
pub mod types;

pub use boundary::BoundaryPolygon;
pub use clip::clip_to_boundary;
pub use conrec::{conrec, ContourSegment, Point};
pub use extremum::{find_extrema, Extrema};
pub use grid::SamplingGrid;
pub use levels::{select_levels, select_step, LevelSet, NICE_STEPS};
pub use pipeline::{assemble_contours, compute_contours};
pub use settings::{ContourSettings, LevelSettings, SamplingSettings};
pub use stitch::{stitch_segments, Contour};
pub use types::{ContourOutput, ContourPolyline};
