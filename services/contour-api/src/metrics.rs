//! Application metrics recording.
//!
//! Metrics go through the `metrics` facade; the binary installs the
//! Prometheus recorder and `/metrics` renders it. Without a recorder
//! (tests, embedding) every call here is a no-op.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use elevation_client::ElevationProvider;
use metrics::{counter, histogram};
use terrain_common::{ElevationSample, GeoPoint, ProviderError};

/// Record one finished `/contourLines` request.
pub fn record_contour_request(outcome: &'static str, elapsed: Duration, polylines: usize) {
    counter!("contour_requests_total", "outcome" => outcome).increment(1);
    histogram!("contour_request_duration_ms").record(elapsed.as_secs_f64() * 1000.0);
    if outcome == "ok" {
        histogram!("contour_polylines_emitted").record(polylines as f64);
    }
}

/// Elevation provider wrapper counting provider calls and points.
pub struct MeteredProvider {
    inner: Arc<dyn ElevationProvider>,
}

impl MeteredProvider {
    pub fn new(inner: Arc<dyn ElevationProvider>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ElevationProvider for MeteredProvider {
    async fn fetch_elevations(
        &self,
        points: &[GeoPoint],
    ) -> Result<Vec<ElevationSample>, ProviderError> {
        histogram!("elevation_points_requested").record(points.len() as f64);

        let result = self.inner.fetch_elevations(points).await;
        let outcome = match &result {
            Ok(_) => "ok",
            Err(ProviderError::Status(_)) => "status",
            Err(ProviderError::Request(_)) => "request",
            Err(_) => "malformed",
        };
        counter!("elevation_requests_total", "outcome" => outcome).increment(1);
        result
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }
}
