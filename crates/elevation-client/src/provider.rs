//! The elevation provider seam.

use async_trait::async_trait;
use terrain_common::{ElevationSample, GeoPoint, ProviderError};

/// A source of elevation data for batches of locations.
#[async_trait]
pub trait ElevationProvider: Send + Sync {
    /// Look up the elevation of every point.
    ///
    /// Samples are returned in the same order as `points`. Any failure
    /// fails the whole lookup; no partial results are returned.
    async fn fetch_elevations(
        &self,
        points: &[GeoPoint],
    ) -> Result<Vec<ElevationSample>, ProviderError>;

    /// Short name used in logs and readiness output.
    fn name(&self) -> &str;

    /// Whether the provider has everything it needs to serve requests.
    fn is_ready(&self) -> bool {
        true
    }
}
