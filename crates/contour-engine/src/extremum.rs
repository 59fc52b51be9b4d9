//! Lowest and highest samples within the boundary.

use terrain_common::{ContourError, ContourResult, ElevationSample};

use crate::boundary::BoundaryPolygon;

/// Extremal samples among those inside or on the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: ElevationSample,
    pub max: ElevationSample,
}

/// Find the minimum- and maximum-elevation samples lying in or on the
/// boundary. Ties keep the first sample in iteration order.
///
/// Fails with [`ContourError::NoInteriorSamples`] when no sample qualifies.
pub fn find_extrema(
    samples: &[ElevationSample],
    boundary: &BoundaryPolygon,
) -> ContourResult<Extrema> {
    let mut min: Option<ElevationSample> = None;
    let mut max: Option<ElevationSample> = None;

    for sample in samples.iter().filter(|s| boundary.covers(&s.location)) {
        if min.map_or(true, |m| sample.elevation < m.elevation) {
            min = Some(*sample);
        }
        if max.map_or(true, |m| sample.elevation > m.elevation) {
            max = Some(*sample);
        }
    }

    match (min, max) {
        (Some(min), Some(max)) => Ok(Extrema { min, max }),
        _ => Err(ContourError::NoInteriorSamples),
    }
}
