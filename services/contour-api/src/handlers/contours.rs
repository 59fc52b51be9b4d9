//! Contour line handler.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    response::{IntoResponse, Response},
    Json,
};
use contour_engine::{compute_contours, ContourOutput};
use terrain_common::ContourError;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{ApiError, LatLngsRequest};
use crate::metrics::record_contour_request;
use crate::state::AppState;

/// POST /contourLines - contours clipped to the posted boundary
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn contour_lines_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<LatLngsRequest>, JsonRejection>,
) -> Response {
    let start = Instant::now();

    match contour_lines(&state, payload).await {
        Ok(output) => {
            let polylines = output.contour_data.len();
            record_contour_request("ok", start.elapsed(), polylines);
            info!(
                polylines,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Contours computed"
            );
            Json(output).into_response()
        }
        Err(err) => {
            record_contour_request(err.kind, start.elapsed(), 0);
            warn!(kind = err.kind, error = %err.message, "Contour request failed");
            err.into_response()
        }
    }
}

async fn contour_lines(
    state: &AppState,
    payload: Result<Json<LatLngsRequest>, JsonRejection>,
) -> Result<ContourOutput, ApiError> {
    let Json(request) = payload?;

    let max_vertices = state.config.limits.max_vertices;
    if request.lat_lngs.len() > max_vertices {
        return Err(ContourError::invalid_boundary(format!(
            "{} vertices exceeds the limit of {}",
            request.lat_lngs.len(),
            max_vertices
        ))
        .into());
    }

    let _permit = state
        .request_permits
        .acquire()
        .await
        .map_err(|e| ContourError::Internal(e.to_string()))?;

    Ok(compute_contours(state.provider.as_ref(), request.lat_lngs, &state.config.contour).await?)
}
