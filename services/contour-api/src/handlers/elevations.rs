//! Elevation passthrough handler.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    response::{IntoResponse, Response},
    Json,
};
use terrain_common::ElevationSample;
use tracing::{instrument, warn};

use super::{ApiError, LatLngsRequest};
use crate::state::AppState;

/// POST /elevations - provider samples for the posted points, in order
#[instrument(skip_all)]
pub async fn elevations_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<LatLngsRequest>, JsonRejection>,
) -> Response {
    match elevations(&state, payload).await {
        Ok(samples) => Json(samples).into_response(),
        Err(err) => {
            warn!(kind = err.kind, error = %err.message, "Elevation request failed");
            err.into_response()
        }
    }
}

async fn elevations(
    state: &AppState,
    payload: Result<Json<LatLngsRequest>, JsonRejection>,
) -> Result<Vec<ElevationSample>, ApiError> {
    let Json(request) = payload?;
    Ok(state.provider.fetch_elevations(&request.lat_lngs).await?)
}
