//! Clipping contour polylines to the boundary polygon.

use geo::{BooleanOps, BoundingRect, Contains, LineString, MultiLineString};
use terrain_common::BoundingBox;

use crate::boundary::BoundaryPolygon;
use crate::stitch::Contour;
use crate::types::ContourPolyline;

/// Keep the part(s) of a contour inside the boundary.
///
/// Returns nothing when the contour misses the boundary, one polyline when
/// the inside part is connected, and one polyline per piece otherwise. All
/// pieces carry the contour's level. Coordinates are emitted as
/// `[lat, lng]`.
pub fn clip_to_boundary(contour: &Contour, boundary: &BoundaryPolygon) -> Vec<ContourPolyline> {
    if contour.points.len() < 2 {
        return vec![];
    }

    let line: LineString<f64> = contour.points.iter().map(|p| (p.x, p.y)).collect();

    let Some(rect) = line.bounding_rect() else {
        return vec![];
    };
    let line_bbox = BoundingBox::new(rect.min().y, rect.min().x, rect.max().y, rect.max().x);
    if !boundary.bbox().intersects(&line_bbox) {
        return vec![];
    }

    let polygon = boundary.polygon();

    // Wholly inside: no need to run the overlay, and the path keeps its
    // exact vertices and ordering.
    if polygon.contains(&line) {
        return vec![to_polyline(contour.level, &line)];
    }

    polygon
        .clip(&MultiLineString::new(vec![line]), false)
        .0
        .iter()
        .filter(|piece| piece.0.len() >= 2)
        .map(|piece| to_polyline(contour.level, piece))
        .collect()
}

fn to_polyline(level: f64, line: &LineString<f64>) -> ContourPolyline {
    ContourPolyline {
        elevation: level,
        latlngs: line.coords().map(|c| [c.y, c.x]).collect(),
    }
}
