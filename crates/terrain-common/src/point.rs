//! Geographic point and elevation sample types.
//!
//! These are the wire types shared by the elevation provider, the contour
//! pipeline and the HTTP service, so their serde layout is part of the
//! external contract: `{lat, lng}` and `{location, elevation}`.

use serde::{Deserialize, Serialize};

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// The point as an `(x, y)` pair in planar (lng, lat) order.
    pub fn to_xy(self) -> (f64, f64) {
        (self.lng, self.lat)
    }

    /// Build a point from a planar `(x, y)` pair in (lng, lat) order.
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self { lat: y, lng: x }
    }

    /// The point as a `[lat, lng]` pair, the order used in polyline output.
    pub fn to_lat_lng(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// Elevation (meters) reported by the provider for a location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationSample {
    pub location: GeoPoint,
    pub elevation: f64,
}

impl ElevationSample {
    pub fn new(location: GeoPoint, elevation: f64) -> Self {
        Self {
            location,
            elevation,
        }
    }
}
