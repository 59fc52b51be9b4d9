//! Application state for the contour API.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;

use elevation_client::{ElevationProvider, GoogleElevationProvider};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::ContourServiceConfig;
use crate::metrics::MeteredProvider;

/// Shared application state.
pub struct AppState {
    /// Elevation source for sampling grids.
    pub provider: Arc<dyn ElevationProvider>,

    /// Service configuration.
    pub config: ContourServiceConfig,

    /// Admission control for contour computations.
    pub request_permits: Semaphore,

    /// Prometheus recorder handle, when one is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create state backed by the Google elevation provider, reading the
    /// API key from the environment.
    pub fn new(config: ContourServiceConfig) -> Result<Self> {
        let provider = GoogleElevationProvider::from_env(config.provider.clone())
            .context("Failed to create elevation provider")?;
        Ok(Self::with_provider(Arc::new(provider), config))
    }

    /// Create state around an explicit provider.
    pub fn with_provider(provider: Arc<dyn ElevationProvider>, config: ContourServiceConfig) -> Self {
        let permits = config.limits.max_concurrent_requests.max(1);
        Self {
            provider: Arc::new(MeteredProvider::new(provider)),
            config,
            request_permits: Semaphore::new(permits),
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
