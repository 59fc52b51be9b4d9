//! Joining CONREC segments into continuous polylines.

use std::collections::{BTreeMap, HashMap, VecDeque};

use tracing::debug;

use crate::conrec::{ContourSegment, Point};

/// Endpoint matching tolerance in grid units (degrees).
pub const STITCH_TOLERANCE: f64 = 1e-9;

/// A connected isoline at one level.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub level: f64,
    /// Points in path order (x = lng, y = lat).
    pub points: Vec<Point>,
    /// First and last points coincide.
    pub closed: bool,
}

pub(crate) type EndpointKey = (i64, i64);

/// Quantized endpoint; points within `tolerance` of each other usually share a key.
pub(crate) fn endpoint_key(p: &Point, tolerance: f64) -> EndpointKey {
    (
        (p.x / tolerance).round() as i64,
        (p.y / tolerance).round() as i64,
    )
}

/// Connect segments into maximal polylines, level by level.
///
/// Segments are grouped by `level_index`; within a level, chains are grown
/// greedily from both ends through segments sharing an endpoint (within
/// `tolerance`). Output is ordered by level, then by first segment.
pub fn stitch_segments(segments: &[ContourSegment], tolerance: f64) -> Vec<Contour> {
    let mut by_level: BTreeMap<usize, Vec<&ContourSegment>> = BTreeMap::new();
    for segment in segments {
        by_level.entry(segment.level_index).or_default().push(segment);
    }

    let contours: Vec<Contour> = by_level
        .into_values()
        .flat_map(|level_segments| stitch_level(&level_segments, tolerance))
        .collect();

    debug!(
        num_segments = segments.len(),
        num_contours = contours.len(),
        closed = contours.iter().filter(|c| c.closed).count(),
        "Stitched contour segments"
    );

    contours
}

fn stitch_level(segments: &[&ContourSegment], tolerance: f64) -> Vec<Contour> {
    let Some(first) = segments.first() else {
        return vec![];
    };
    let level = first.level;

    let mut endpoints: HashMap<EndpointKey, Vec<usize>> = HashMap::new();
    for (idx, segment) in segments.iter().enumerate() {
        endpoints
            .entry(endpoint_key(&segment.start, tolerance))
            .or_default()
            .push(idx);
        endpoints
            .entry(endpoint_key(&segment.end, tolerance))
            .or_default()
            .push(idx);
    }

    // Degenerate segments would otherwise seed sliver contours of their own.
    let mut used: Vec<bool> = segments
        .iter()
        .map(|s| endpoint_key(&s.start, tolerance) == endpoint_key(&s.end, tolerance))
        .collect();
    let mut contours = Vec::new();

    for start_idx in 0..segments.len() {
        if used[start_idx] {
            continue;
        }
        used[start_idx] = true;

        let seed = segments[start_idx];
        let mut points = VecDeque::from([seed.start, seed.end]);

        while let Some(tail) = points.back().copied() {
            match take_adjacent(&tail, segments, &endpoints, &mut used, tolerance) {
                Some(next) => points.push_back(next),
                None => break,
            }
        }
        while let Some(head) = points.front().copied() {
            match take_adjacent(&head, segments, &endpoints, &mut used, tolerance) {
                Some(prev) => points.push_front(prev),
                None => break,
            }
        }

        let points: Vec<Point> = points.into();
        let closed = points.len() > 2
            && endpoint_key(&points[0], tolerance)
                == endpoint_key(&points[points.len() - 1], tolerance);

        contours.push(Contour {
            level,
            points,
            closed,
        });
    }

    contours
}

/// Claim an unused segment touching `at` and return its other endpoint.
fn take_adjacent(
    at: &Point,
    segments: &[&ContourSegment],
    endpoints: &HashMap<EndpointKey, Vec<usize>>,
    used: &mut [bool],
    tolerance: f64,
) -> Option<Point> {
    let key = endpoint_key(at, tolerance);
    let candidates = endpoints.get(&key)?;

    for &idx in candidates {
        if used[idx] {
            continue;
        }
        used[idx] = true;
        let segment = segments[idx];
        return Some(if endpoint_key(&segment.start, tolerance) == key {
            segment.end
        } else {
            segment.start
        });
    }

    None
}
