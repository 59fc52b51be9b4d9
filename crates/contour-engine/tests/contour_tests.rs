//! Tests for the terrain contouring pipeline.

use contour_engine::{
    assemble_contours, clip_to_boundary, compute_contours, conrec, find_extrema, select_levels,
    stitch_segments, BoundaryPolygon, Contour, ContourSettings, LevelSettings, Point,
    SamplingGrid, NICE_STEPS,
};
use terrain_common::{ContourError, ElevationSample, GeoPoint};
use test_utils::{
    assert_approx_eq, boundary, cone_hill, fill_grid, flat, lat_ramp, linspace, lng_ramp,
    rolling_hills, unit_square, FailingElevationProvider, SyntheticElevationProvider,
    ALPINE_PATCH, RIGHT_TRIANGLE, U_SHAPE, UNIT_SQUARE,
};

const STITCH_TOLERANCE: f64 = contour_engine::stitch::STITCH_TOLERANCE;

fn sample_grid<F: Fn(&GeoPoint) -> f64>(grid: &SamplingGrid, surface: F) -> Vec<ElevationSample> {
    grid.nodes()
        .into_iter()
        .map(|p| ElevationSample::new(p, surface(&p)))
        .collect()
}

// ============================================================================
// Grid sampler tests
// ============================================================================

#[test]
fn test_node_count_matches_divisions() {
    let polygons: [&[(f64, f64)]; 4] = [&UNIT_SQUARE, &RIGHT_TRIANGLE, &U_SHAPE, &ALPINE_PATCH];

    for vertices in polygons {
        let b = BoundaryPolygon::new(boundary(vertices)).unwrap();
        let grid = SamplingGrid::for_bbox(b.bbox(), 50);

        assert_eq!(grid.n_divs_h().max(grid.n_divs_v()), 50);
        assert_eq!(
            grid.nodes().len(),
            (grid.n_divs_h() + 1) * (grid.n_divs_v() + 1)
        );
    }
}

#[test]
fn test_grid_spans_bounding_box() {
    let b = BoundaryPolygon::new(boundary(&ALPINE_PATCH)).unwrap();
    let grid = SamplingGrid::for_bbox(b.bbox(), 50);

    assert_eq!(grid.lngs[0], b.bbox().min_lng);
    assert_eq!(*grid.lngs.last().unwrap(), b.bbox().max_lng);
    assert_eq!(grid.lats[0], b.bbox().min_lat);
    assert_eq!(*grid.lats.last().unwrap(), b.bbox().max_lat);
    assert!(grid.nodes().iter().all(|p| b.bbox().contains_point(p)));
}

// ============================================================================
// Level selector tests
// ============================================================================

#[test]
fn test_level_step_always_from_table() {
    let settings = LevelSettings::default();
    let ranges = [
        (0.0, 0.05),
        (12.3, 13.1),
        (100.0, 101.7),
        (0.0, 100.0),
        (-35.2, 480.9),
        (1520.0, 4478.0),
        (0.0, 25_000.0),
    ];

    for (min, max) in ranges {
        let set = select_levels(min, max, &settings);
        assert!(NICE_STEPS.contains(&set.step), "step {} not in table", set.step);
        assert!(set.levels.windows(2).all(|w| w[1] > w[0]));
        assert!(set.levels.iter().all(|&l| l < max));
        assert!(set.levels[0] <= min);
    }
}

#[test]
fn test_level_count_meets_minimum_when_achievable() {
    let settings = LevelSettings::default();

    for (min, max) in [(12.3, 13.9), (100.0, 137.0), (-35.2, 480.9), (1520.0, 4478.0)] {
        let set = select_levels(min, max, &settings);
        assert!(
            set.levels.len() >= 10,
            "{}..{} gave {} levels",
            min,
            max,
            set.levels.len()
        );
    }
}

#[test]
fn test_levels_start_at_step_multiple_below_min() {
    let set = select_levels(1234.0, 1789.0, &LevelSettings::default());
    assert_eq!(set.step, 50.0);
    assert_eq!(set.levels[0], 1200.0);
    assert_eq!(*set.levels.last().unwrap(), 1750.0);
}

#[test]
fn test_levels_negative_elevations() {
    let set = select_levels(-87.0, 12.0, &LevelSettings::default());
    assert_eq!(set.step, 10.0);
    assert_eq!(set.levels[0], -90.0);
    assert_eq!(*set.levels.last().unwrap(), 10.0);
}

#[test]
fn test_levels_flat_terrain() {
    // Zero relief falls back to the smallest step; nothing lies below max
    // except the floor multiple itself.
    let set = select_levels(250.0, 250.0, &LevelSettings::default());
    assert_eq!(set.step, 0.1);
    assert!(set.levels.len() <= 1);
}

// ============================================================================
// CONREC tests
// ============================================================================

#[test]
fn test_conrec_flat_grid_has_no_segments() {
    let xs = linspace(0.0, 1.0, 11);
    let ys = linspace(0.0, 1.0, 11);
    let data = fill_grid(&xs, &ys, flat(50.0));

    for level in [10.0, 49.9, 50.0, 50.1, 90.0] {
        assert!(conrec(&data, &xs, &ys, &[level]).is_empty(), "level {}", level);
    }
}

#[test]
fn test_conrec_linear_ramp_is_vertical_line() {
    let xs = linspace(0.0, 10.0, 21);
    let ys = linspace(0.0, 5.0, 11);
    // elevation = x
    let data = fill_grid(&xs, &ys, lng_ramp(1.0));

    for level in [0.3, 2.5, 4.0, 7.77, 9.9] {
        let segments = conrec(&data, &xs, &ys, &[level]);
        assert!(!segments.is_empty(), "level {}", level);
        for seg in &segments {
            assert_approx_eq!(seg.start.x, level, 1e-9);
            assert_approx_eq!(seg.end.x, level, 1e-9);
            assert!(seg.start != seg.end);
        }
    }
}

#[test]
fn test_conrec_level_on_grid_line_emitted_once() {
    // Level 5 lies exactly on the column x = 5: each row edge once, no duplicates.
    let xs = linspace(0.0, 10.0, 11);
    let ys = linspace(0.0, 4.0, 5);
    let data = fill_grid(&xs, &ys, lng_ramp(1.0));

    let segments = conrec(&data, &xs, &ys, &[5.0]);
    assert_eq!(segments.len(), 4);
    for seg in &segments {
        assert_eq!(seg.start.x, 5.0);
        assert_eq!(seg.end.x, 5.0);
    }

    let contours = stitch_segments(&segments, STITCH_TOLERANCE);
    assert_eq!(contours.len(), 1);
    assert_eq!(contours[0].points.len(), 5);
}

#[test]
fn test_conrec_levels_tagged() {
    let xs = linspace(0.0, 10.0, 11);
    let ys = linspace(0.0, 1.0, 3);
    let data = fill_grid(&xs, &ys, lng_ramp(1.0));

    let segments = conrec(&data, &xs, &ys, &[2.5, 7.5]);
    assert!(segments.iter().any(|s| s.level_index == 0 && s.level == 2.5));
    assert!(segments.iter().any(|s| s.level_index == 1 && s.level == 7.5));
}

// ============================================================================
// Stitching and clipping tests
// ============================================================================

#[test]
fn test_hill_produces_closed_rings() {
    let xs = linspace(0.0, 1.0, 41);
    let ys = linspace(0.0, 1.0, 41);
    let data = fill_grid(&xs, &ys, cone_hill(GeoPoint::new(0.5, 0.5), 100.0, 100.0));

    let contours = stitch_segments(&conrec(&data, &xs, &ys, &[70.0, 80.0, 90.0]), STITCH_TOLERANCE);
    assert_eq!(contours.len(), 3);
    assert!(contours.iter().all(|c| c.closed));
}

#[test]
fn test_level_through_grid_nodes_emits_no_slivers() {
    // Level 90 passes through nodes whose values round to just above it.
    let xs = linspace(0.0, 1.0, 41);
    let ys = linspace(0.0, 1.0, 41);
    let data = fill_grid(&xs, &ys, cone_hill(GeoPoint::new(0.5, 0.5), 100.0, 100.0));
    let square = BoundaryPolygon::new(unit_square()).unwrap();

    let polylines: Vec<_> = stitch_segments(&conrec(&data, &xs, &ys, &[90.0]), STITCH_TOLERANCE)
        .iter()
        .flat_map(|c| clip_to_boundary(c, &square))
        .collect();

    assert_eq!(polylines.len(), 1);
    let lngs = polylines[0].latlngs.iter().map(|[_, lng]| *lng);
    let span = lngs.clone().fold(f64::NEG_INFINITY, f64::max) - lngs.fold(f64::INFINITY, f64::min);
    assert!(span > 0.15, "ring spans only {}", span);
}

#[test]
fn test_clip_keeps_everything_when_boundary_contains_grid() {
    let xs = linspace(0.1, 0.9, 41);
    let ys = linspace(0.1, 0.9, 41);
    let data = fill_grid(&xs, &ys, rolling_hills(100.0, 20.0));
    let square = BoundaryPolygon::new(unit_square()).unwrap();

    let levels: Vec<f64> = (0..8).map(|i| 70.0 + i as f64 * 8.0).collect();
    let contours = stitch_segments(&conrec(&data, &xs, &ys, &levels), STITCH_TOLERANCE);
    assert!(!contours.is_empty());

    for contour in &contours {
        let clipped = clip_to_boundary(contour, &square);
        assert_eq!(clipped.len(), 1);
        assert_eq!(clipped[0].latlngs.len(), contour.points.len());
        assert_eq!(clipped[0].elevation, contour.level);
    }
}

#[test]
fn test_clip_splits_across_concave_boundary() {
    let u_shape = BoundaryPolygon::new(boundary(&U_SHAPE)).unwrap();
    let contour = Contour {
        level: 200.0,
        points: vec![Point::new(-1.0, 2.0), Point::new(1.5, 2.0), Point::new(4.0, 2.0)],
        closed: false,
    };

    let pieces = clip_to_boundary(&contour, &u_shape);
    assert_eq!(pieces.len(), 2);
    for piece in &pieces {
        assert_eq!(piece.elevation, 200.0);
        for [lat, lng] in &piece.latlngs {
            assert_approx_eq!(*lat, 2.0, 1e-9);
            assert!(*lng <= 1.0 + 1e-9 || *lng >= 2.0 - 1e-9);
        }
    }
}

// ============================================================================
// Extremum tests
// ============================================================================

#[test]
fn test_extrema_flat_grid() {
    let b = BoundaryPolygon::new(boundary(&RIGHT_TRIANGLE)).unwrap();
    let grid = SamplingGrid::for_bbox(b.bbox(), 10);
    let samples = sample_grid(&grid, flat(321.0));

    let extrema = find_extrema(&samples, &b).unwrap();
    assert_eq!(extrema.min.elevation, 321.0);
    assert_eq!(extrema.max.elevation, 321.0);
}

#[test]
fn test_extrema_excludes_corner_outside_triangle() {
    // Highest bbox corner (1, 1) is outside the triangle.
    let b = BoundaryPolygon::new(boundary(&RIGHT_TRIANGLE)).unwrap();
    let grid = SamplingGrid::for_bbox(b.bbox(), 10);
    let samples = sample_grid(&grid, |p: &GeoPoint| p.lat + p.lng);

    let extrema = find_extrema(&samples, &b).unwrap();
    assert_approx_eq!(extrema.max.elevation, 1.0, 1e-9);
    assert!(b.covers(&extrema.max.location));
    assert_eq!(extrema.min.location, GeoPoint::new(0.0, 0.0));
}

// ============================================================================
// Pipeline tests
// ============================================================================

#[tokio::test]
async fn test_unit_square_lat_ramp_end_to_end() {
    let provider = SyntheticElevationProvider::new(lat_ramp(100.0));

    let output = compute_contours(&provider, unit_square(), &ContourSettings::default())
        .await
        .unwrap();

    assert_eq!(provider.calls(), 1);
    assert_eq!(provider.points_requested(), 51 * 51);

    assert_approx_eq!(output.min_point.location.lat, 0.0, 1e-9);
    assert_approx_eq!(output.max_point.location.lat, 1.0, 1e-9);
    assert_approx_eq!(output.min_point.elevation, 0.0, 1e-9);
    assert_approx_eq!(output.max_point.elevation, 100.0, 1e-9);

    for level in (1..=9).map(|i| i as f64 * 10.0) {
        let lines: Vec<_> = output
            .contour_data
            .iter()
            .filter(|c| (c.elevation - level).abs() < 1e-6)
            .collect();
        assert!(!lines.is_empty(), "no contour at {}", level);

        for line in lines {
            assert!(line.latlngs.len() >= 2);
            for [lat, lng] in &line.latlngs {
                assert_approx_eq!(*lat, level / 100.0, 1e-6);
                assert!(*lng >= -1e-9 && *lng <= 1.0 + 1e-9);
            }
        }
    }

    // Step 10: no level outside 0..100.
    assert!(output
        .contour_data
        .iter()
        .all(|c| c.elevation >= 0.0 && c.elevation < 100.0));
}

#[tokio::test]
async fn test_u_shape_contours_split_into_prongs() {
    let provider = SyntheticElevationProvider::new(lat_ramp(100.0));

    let output = compute_contours(&provider, boundary(&U_SHAPE), &ContourSettings::default())
        .await
        .unwrap();

    // 300 m of relief -> 30 m step.
    let count_at = |level: f64| {
        output
            .contour_data
            .iter()
            .filter(|c| (c.elevation - level).abs() < 1e-6)
            .count()
    };
    assert_eq!(count_at(60.0), 1);
    assert_eq!(count_at(210.0), 2);
    assert_eq!(count_at(270.0), 2);
}

#[tokio::test]
async fn test_provider_failure_propagates_message() {
    let provider = FailingElevationProvider::new("OVER_QUERY_LIMIT");

    let err = compute_contours(&provider, unit_square(), &ContourSettings::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ContourError::Provider(_)));
    assert_eq!(err.to_string(), "OVER_QUERY_LIMIT");
}

#[tokio::test]
async fn test_invalid_boundary_fails_before_provider_call() {
    let provider = SyntheticElevationProvider::new(flat(0.0));
    let two_points = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)];

    let err = compute_contours(&provider, two_points, &ContourSettings::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "geometry");
    assert_eq!(provider.calls(), 0);
}

#[test]
fn test_assemble_rejects_short_sample_list() {
    let b = BoundaryPolygon::new(unit_square()).unwrap();
    let grid = SamplingGrid::for_bbox(b.bbox(), 5);
    let mut samples = sample_grid(&grid, flat(1.0));
    samples.pop();

    let err = assemble_contours(&grid, &samples, &b, &ContourSettings::default()).unwrap_err();
    assert_eq!(err.kind(), "provider");
}

#[test]
fn test_assemble_hill_inside_triangle() {
    let b = BoundaryPolygon::new(boundary(&RIGHT_TRIANGLE)).unwrap();
    let grid = SamplingGrid::for_bbox(b.bbox(), 50);
    let samples = sample_grid(&grid, cone_hill(GeoPoint::new(0.3, 0.3), 500.0, 400.0));

    let output = assemble_contours(&grid, &samples, &b, &ContourSettings::default()).unwrap();

    assert_approx_eq!(output.max_point.elevation, 500.0, 1e-6);
    assert!(!output.contour_data.is_empty());
    for line in &output.contour_data {
        assert!(line.latlngs.len() >= 2);
        for [lat, lng] in &line.latlngs {
            // Clipped output stays in the triangle, up to rounding.
            assert!(lat + lng <= 1.0 + 1e-9);
            assert!(*lat >= -1e-9 && *lng >= -1e-9);
        }
    }
}
