//! End-to-end contour computation for one request.

use elevation_client::ElevationProvider;
use terrain_common::{ContourError, ContourResult, ElevationSample, GeoPoint};
use tracing::{debug, info, instrument};

use crate::boundary::BoundaryPolygon;
use crate::clip::clip_to_boundary;
use crate::conrec::conrec;
use crate::extremum::find_extrema;
use crate::grid::SamplingGrid;
use crate::levels::select_levels;
use crate::settings::ContourSettings;
use crate::stitch::{stitch_segments, STITCH_TOLERANCE};
use crate::types::{ContourOutput, ContourPolyline};

/// Compute clipped contours for a boundary.
///
/// Validates the boundary, samples the elevation grid through `provider`
/// and runs the CPU-bound stages on the blocking pool. Any failure discards
/// the whole request.
#[instrument(skip_all, fields(vertices = vertices.len(), provider = provider.name()))]
pub async fn compute_contours(
    provider: &dyn ElevationProvider,
    vertices: Vec<GeoPoint>,
    settings: &ContourSettings,
) -> ContourResult<ContourOutput> {
    let boundary = BoundaryPolygon::new(vertices)?;
    let grid = SamplingGrid::for_bbox(boundary.bbox(), settings.sampling.divisions);
    let nodes = grid.nodes();

    info!(
        n_divs_h = grid.n_divs_h(),
        n_divs_v = grid.n_divs_v(),
        nodes = nodes.len(),
        "Requesting elevation grid"
    );

    let samples = provider.fetch_elevations(&nodes).await?;

    let settings = settings.clone();
    tokio::task::spawn_blocking(move || assemble_contours(&grid, &samples, &boundary, &settings))
        .await
        .map_err(|e| ContourError::Internal(format!("contour worker failed: {}", e)))?
}

/// Run the synchronous stages on sampled elevations.
///
/// `samples` must be in `grid.nodes()` order.
pub fn assemble_contours(
    grid: &SamplingGrid,
    samples: &[ElevationSample],
    boundary: &BoundaryPolygon,
    settings: &ContourSettings,
) -> ContourResult<ContourOutput> {
    let matrix = grid.elevation_matrix(samples)?;
    let extrema = find_extrema(samples, boundary)?;

    let level_set = select_levels(
        extrema.min.elevation,
        extrema.max.elevation,
        &settings.levels,
    );

    let segments = conrec(&matrix, &grid.lngs, &grid.lats, &level_set.levels);
    let contours = stitch_segments(&segments, STITCH_TOLERANCE);

    let contour_data: Vec<ContourPolyline> = contours
        .iter()
        .flat_map(|contour| clip_to_boundary(contour, boundary))
        .collect();

    debug!(
        min_elevation = extrema.min.elevation,
        max_elevation = extrema.max.elevation,
        step = level_set.step,
        num_levels = level_set.levels.len(),
        num_segments = segments.len(),
        num_contours = contours.len(),
        num_polylines = contour_data.len(),
        "Assembled contours"
    );

    Ok(ContourOutput {
        min_point: extrema.min,
        max_point: extrema.max,
        contour_data,
    })
}
