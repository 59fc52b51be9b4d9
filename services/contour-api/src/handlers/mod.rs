//! HTTP request handlers for the contour API.
//!
//! Failures are reported in the body as `{"error": true, "message": ...}`
//! with status 200; clients inspect the payload rather than the status.

pub mod contours;
pub mod elevations;
pub mod health;

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use terrain_common::{ContourError, GeoPoint, ProviderError};

/// Request body shared by `/contourLines` and `/elevations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLngsRequest {
    pub lat_lngs: Vec<GeoPoint>,
}

/// Failure payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: bool,
    pub message: String,
}

/// A failed request, rendered as the failure payload.
#[derive(Debug)]
pub struct ApiError {
    /// Label for logs and metrics.
    pub kind: &'static str,
    pub message: String,
}

impl From<ContourError> for ApiError {
    fn from(err: ContourError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        ContourError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            kind: "bad_request",
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Json(ErrorBody {
            error: true,
            message: self.message,
        })
        .into_response()
    }
}
