//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::point::GeoPoint;

/// An axis-aligned geographic bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
        }
    }

    /// Smallest box enclosing every point, or `None` for an empty slice.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;
        let init = Self::new(first.lat, first.lng, first.lat, first.lng);

        Some(points.iter().skip(1).fold(init, |bbox, p| Self {
            min_lat: bbox.min_lat.min(p.lat),
            min_lng: bbox.min_lng.min(p.lng),
            max_lat: bbox.max_lat.max(p.lat),
            max_lng: bbox.max_lng.max(p.lng),
        }))
    }

    /// Longitude extent in degrees.
    pub fn width(&self) -> f64 {
        (self.max_lng - self.min_lng).abs()
    }

    /// Latitude extent in degrees.
    pub fn height(&self) -> f64 {
        (self.max_lat - self.min_lat).abs()
    }

    /// Check if a point is contained within this bbox (edges inclusive).
    pub fn contains_point(&self, point: &GeoPoint) -> bool {
        point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lng >= self.min_lng
            && point.lng <= self.max_lng
    }

    /// Check if this bbox intersects another (touching edges count).
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_lng <= other.max_lng
            && self.max_lng >= other.min_lng
            && self.min_lat <= other.max_lat
            && self.max_lat >= other.min_lat
    }
}
