//! Contour API Service Library
//!
//! HTTP front end for the terrain contouring pipeline: accepts a drawn
//! boundary, samples elevations through the configured provider and
//! returns the clipped contour lines.

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod state;
