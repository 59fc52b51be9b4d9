//! Result types returned to callers.

use serde::{Deserialize, Serialize};
use terrain_common::ElevationSample;

/// A clipped contour line ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourPolyline {
    pub elevation: f64,
    /// `[lat, lng]` pairs in path order.
    pub latlngs: Vec<[f64; 2]>,
}

/// Complete result of a contour request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContourOutput {
    pub min_point: ElevationSample,
    pub max_point: ElevationSample,
    pub contour_data: Vec<ContourPolyline>,
}
