//! Isoline extraction using the CONREC algorithm.
//!
//! Each grid cell is split into four triangles sharing the cell center,
//! whose value is the mean of the four corners. A level crossing a triangle
//! produces one straight segment between the two crossed edges, found by
//! linear interpolation. Triangles have no saddle ambiguity, unlike square
//! marching cells.
//!
//! A vertex exactly on a level is classified as below it. A segment lying
//! along a grid edge is then emitted once, from the side above it.
//! Segments whose ends fall on the same stitch key are dropped.

use rayon::prelude::*;
use tracing::debug;

use crate::stitch::{endpoint_key, STITCH_TOLERANCE};

/// A point in grid coordinate space (x = lng, y = lat).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A two-point piece of an isoline inside one triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourSegment {
    pub level: f64,
    /// Position of `level` in the requested level list.
    pub level_index: usize,
    pub start: Point,
    pub end: Point,
}

/// Cell corner offsets `(di, dj)`, walking around the cell.
const CORNERS: [(usize, usize); 4] = [(0, 0), (1, 0), (1, 1), (0, 1)];

/// Extract contour segments from a `[x_index][y_index]` value grid.
///
/// # Arguments
/// * `data` - One column of values per entry of `xs`, each `ys.len()` long
/// * `xs` - Column coordinates (longitudes), ascending
/// * `ys` - Row coordinates (latitudes), ascending
/// * `levels` - Levels to extract
///
/// # Returns
/// Unordered, independent segments tagged with their level. Cells with a
/// NaN corner are skipped; mismatched dimensions yield no segments.
pub fn conrec(data: &[Vec<f64>], xs: &[f64], ys: &[f64], levels: &[f64]) -> Vec<ContourSegment> {
    if xs.len() < 2
        || ys.len() < 2
        || levels.is_empty()
        || data.len() != xs.len()
        || data.iter().any(|column| column.len() != ys.len())
    {
        return vec![];
    }

    let columns: Vec<Vec<ContourSegment>> = (0..xs.len() - 1)
        .into_par_iter()
        .map(|i| column_segments(data, xs, ys, levels, i))
        .collect();

    let segments: Vec<ContourSegment> = columns.into_iter().flatten().collect();

    debug!(
        columns = xs.len(),
        rows = ys.len(),
        num_levels = levels.len(),
        num_segments = segments.len(),
        "CONREC extraction complete"
    );

    segments
}

/// Segments for every cell in column `i`.
fn column_segments(
    data: &[Vec<f64>],
    xs: &[f64],
    ys: &[f64],
    levels: &[f64],
    i: usize,
) -> Vec<ContourSegment> {
    let mut segments = Vec::new();

    for j in 0..ys.len() - 1 {
        let values = CORNERS.map(|(di, dj)| data[i + di][j + dj]);
        if values.iter().any(|v| v.is_nan()) {
            continue;
        }

        let dmin = values.iter().copied().fold(f64::INFINITY, f64::min);
        let dmax = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let corners = CORNERS.map(|(di, dj)| Point::new(xs[i + di], ys[j + dj]));
        let center = Point::new(0.5 * (xs[i] + xs[i + 1]), 0.5 * (ys[j] + ys[j + 1]));

        for (level_index, &level) in levels.iter().enumerate() {
            // Nothing can be strictly above a level at or over the cell max.
            // A level equal to dmin stays: corners on it count as below.
            if level < dmin || level >= dmax {
                continue;
            }

            let h = values.map(|v| v - level);
            let h_center = 0.25 * (h[0] + h[1] + h[2] + h[3]);

            for m in 0..4 {
                let n = (m + 1) % 4;
                let triangle = [(corners[m], h[m]), (center, h_center), (corners[n], h[n])];

                if let Some((start, end)) = triangle_crossing(&triangle) {
                    segments.push(ContourSegment {
                        level,
                        level_index,
                        start,
                        end,
                    });
                }
            }
        }
    }

    segments
}

/// Where height zero crosses a triangle of `(vertex, height)` pairs.
fn triangle_crossing(triangle: &[(Point, f64); 3]) -> Option<(Point, Point)> {
    let above = triangle.map(|(_, h)| h > 0.0);

    // The vertex on its own side of the level; both crossed edges touch it.
    let lone = match above {
        [false, false, false] | [true, true, true] => return None,
        [_, b, c] if b == c => 0,
        [a, _, c] if a == c => 1,
        _ => 2,
    };

    let (p, hp) = triangle[lone];
    let (q1, h1) = triangle[(lone + 1) % 3];
    let (q2, h2) = triangle[(lone + 2) % 3];

    let start = edge_crossing(p, hp, q1, h1);
    let end = edge_crossing(p, hp, q2, h2);

    // Crossings a hair apart come from levels passing through a node up to
    // rounding; they would stitch into slivers.
    if endpoint_key(&start, STITCH_TOLERANCE) == endpoint_key(&end, STITCH_TOLERANCE) {
        None
    } else {
        Some((start, end))
    }
}

/// Linear interpolation of the zero crossing between two vertices whose
/// heights lie on opposite sides of the level.
fn edge_crossing(p1: Point, h1: f64, p2: Point, h2: f64) -> Point {
    if h1 == 0.0 {
        return p1;
    }
    if h2 == 0.0 {
        return p2;
    }
    Point::new(
        (h2 * p1.x - h1 * p2.x) / (h2 - h1),
        (h2 * p1.y - h1 * p2.y) / (h2 - h1),
    )
}
