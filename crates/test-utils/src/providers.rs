//! In-memory elevation providers for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use elevation_client::ElevationProvider;
use terrain_common::{ElevationSample, GeoPoint, ProviderError};

/// Provider answering from a synthetic surface.
pub struct SyntheticElevationProvider<F> {
    surface: F,
    calls: AtomicUsize,
    points_requested: AtomicUsize,
}

impl<F> SyntheticElevationProvider<F>
where
    F: Fn(&GeoPoint) -> f64 + Send + Sync,
{
    pub fn new(surface: F) -> Self {
        Self {
            surface,
            calls: AtomicUsize::new(0),
            points_requested: AtomicUsize::new(0),
        }
    }

    /// Number of `fetch_elevations` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Total points requested so far.
    pub fn points_requested(&self) -> usize {
        self.points_requested.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<F> ElevationProvider for SyntheticElevationProvider<F>
where
    F: Fn(&GeoPoint) -> f64 + Send + Sync,
{
    async fn fetch_elevations(
        &self,
        points: &[GeoPoint],
    ) -> Result<Vec<ElevationSample>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.points_requested
            .fetch_add(points.len(), Ordering::SeqCst);
        Ok(points
            .iter()
            .map(|p| ElevationSample::new(*p, (self.surface)(p)))
            .collect())
    }

    fn name(&self) -> &str {
        "synthetic"
    }
}

/// Provider that always fails with a non-OK status.
pub struct FailingElevationProvider {
    status: String,
}

impl FailingElevationProvider {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

#[async_trait]
impl ElevationProvider for FailingElevationProvider {
    async fn fetch_elevations(
        &self,
        _points: &[GeoPoint],
    ) -> Result<Vec<ElevationSample>, ProviderError> {
        Err(ProviderError::Status(self.status.clone()))
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn is_ready(&self) -> bool {
        false
    }
}
