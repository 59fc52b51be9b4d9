//! Validated polygon boundary.

use std::collections::HashSet;

use geo::{Area, Intersects, LineString, Point as GeoPointXY, Polygon};
use terrain_common::{BoundingBox, ContourError, ContourResult, GeoPoint};

/// A user-drawn boundary, implicitly closed.
///
/// Holds the input vertices plus a planar polygon in (lng, lat) order for
/// geometric predicates. Self-intersection is not checked.
#[derive(Debug, Clone)]
pub struct BoundaryPolygon {
    vertices: Vec<GeoPoint>,
    bbox: BoundingBox,
    polygon: Polygon<f64>,
}

impl BoundaryPolygon {
    /// Validate the vertices and build the boundary.
    ///
    /// Rejects fewer than 3 distinct vertices, non-finite coordinates and
    /// boundaries enclosing no area.
    pub fn new(vertices: Vec<GeoPoint>) -> ContourResult<Self> {
        if let Some(bad) = vertices.iter().find(|v| !v.is_finite()) {
            return Err(ContourError::invalid_boundary(format!(
                "non-finite coordinate ({}, {})",
                bad.lat, bad.lng
            )));
        }

        let distinct: HashSet<(u64, u64)> = vertices
            .iter()
            .map(|v| (v.lat.to_bits(), v.lng.to_bits()))
            .collect();
        if distinct.len() < 3 {
            return Err(ContourError::invalid_boundary(format!(
                "at least 3 distinct vertices are required, got {}",
                distinct.len()
            )));
        }

        // Polygon::new closes the ring.
        let exterior: LineString<f64> = vertices.iter().map(|v| v.to_xy()).collect();
        let polygon = Polygon::new(exterior, vec![]);

        if polygon.unsigned_area() == 0.0 {
            return Err(ContourError::invalid_boundary("boundary encloses no area"));
        }

        let bbox = BoundingBox::from_points(&vertices)
            .ok_or_else(|| ContourError::invalid_boundary("empty boundary"))?;

        Ok(Self {
            vertices,
            bbox,
            polygon,
        })
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    /// The boundary as a planar (lng, lat) polygon.
    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    /// True when the point lies inside the boundary or on its edge
    /// (distance to the polygon is zero).
    pub fn covers(&self, point: &GeoPoint) -> bool {
        self.bbox.contains_point(point)
            && self.polygon.intersects(&GeoPointXY::new(point.lng, point.lat))
    }
}
