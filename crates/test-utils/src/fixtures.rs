//! Common boundary fixtures.
//!
//! Vertices are `(lat, lng)` pairs, listed the way a user would draw them.

use terrain_common::GeoPoint;

/// Unit square with corners at (0,0) and (1,1).
pub const UNIT_SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];

/// Right triangle below the line lat + lng = 1.
pub const RIGHT_TRIANGLE: [(f64, f64); 3] = [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)];

/// A "U" open to the north: two prongs over lng 0..1 and 2..3, joined
/// below lat 1.
pub const U_SHAPE: [(f64, f64); 8] = [
    (0.0, 0.0),
    (0.0, 3.0),
    (3.0, 3.0),
    (3.0, 2.0),
    (1.0, 2.0),
    (1.0, 1.0),
    (3.0, 1.0),
    (3.0, 0.0),
];

/// A small mountain area in the Alps, roughly 4 x 3 km.
pub const ALPINE_PATCH: [(f64, f64); 5] = [
    (46.55, 7.95),
    (46.56, 7.99),
    (46.58, 8.00),
    (46.585, 7.96),
    (46.57, 7.94),
];

/// Convert `(lat, lng)` pairs to points.
pub fn boundary(vertices: &[(f64, f64)]) -> Vec<GeoPoint> {
    vertices
        .iter()
        .map(|&(lat, lng)| GeoPoint::new(lat, lng))
        .collect()
}

/// The unit square as points.
pub fn unit_square() -> Vec<GeoPoint> {
    boundary(&UNIT_SQUARE)
}
