//! Route table and middleware stack.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Extension, Router,
};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Contouring
        .route(
            "/contourLines",
            post(handlers::contours::contour_lines_handler),
        )
        .route("/elevations", post(handlers::elevations::elevations_handler))
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
