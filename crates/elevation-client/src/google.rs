//! Google Maps Elevation API provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use terrain_common::{ElevationSample, GeoPoint, ProviderError};
use tracing::{debug, instrument, warn};

use crate::batch::fetch_in_batches;
use crate::polyline::encode_polyline;
use crate::provider::ElevationProvider;

/// Configuration for the Google elevation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleProviderConfig {
    /// Elevation API JSON endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Maximum locations per request.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Batches in flight at once (1 = sequential).
    #[serde(default = "default_max_concurrent_batches")]
    pub max_concurrent_batches: usize,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for GoogleProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            batch_size: default_batch_size(),
            max_concurrent_batches: default_max_concurrent_batches(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api/elevation/json".to_string()
}
fn default_api_key_env() -> String {
    "GOOGLE_MAPS_API_KEY".to_string()
}
fn default_batch_size() -> usize {
    512
}
fn default_max_concurrent_batches() -> usize {
    1
}
fn default_request_timeout_secs() -> u64 {
    30
}

/// Raw Elevation API response body.
#[derive(Debug, Deserialize)]
struct ElevationApiResponse {
    status: String,
    #[serde(default)]
    results: Vec<ElevationSample>,
    #[serde(default)]
    error_message: Option<String>,
}

/// Decode one Elevation API response body for a batch of `expected` points.
pub fn parse_response(body: &str, expected: usize) -> Result<Vec<ElevationSample>, ProviderError> {
    let response: ElevationApiResponse = serde_json::from_str(body)?;

    if response.status != "OK" {
        warn!(
            status = %response.status,
            error_message = response.error_message.as_deref().unwrap_or(""),
            "Elevation provider returned an error status"
        );
        return Err(ProviderError::Status(response.status));
    }

    if response.results.len() != expected {
        return Err(ProviderError::CountMismatch {
            expected,
            actual: response.results.len(),
        });
    }

    Ok(response.results)
}

/// Elevation provider backed by the Google Maps Elevation API.
pub struct GoogleElevationProvider {
    client: Client,
    config: GoogleProviderConfig,
    api_key: Option<String>,
}

impl GoogleElevationProvider {
    /// Create a provider with an explicit API key.
    pub fn new(config: GoogleProviderConfig, api_key: Option<String>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Create a provider reading the API key from the configured environment variable.
    pub fn from_env(config: GoogleProviderConfig) -> Result<Self, ProviderError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.is_empty());
        if api_key.is_none() {
            warn!(
                env = %config.api_key_env,
                "No elevation API key configured; provider requests will be rejected"
            );
        }
        Self::new(config, api_key)
    }

    pub fn config(&self) -> &GoogleProviderConfig {
        &self.config
    }

    #[instrument(skip(self, batch), fields(batch_index = index, points = batch.len()))]
    async fn fetch_batch(
        &self,
        index: usize,
        batch: &[GeoPoint],
    ) -> Result<Vec<ElevationSample>, ProviderError> {
        let locations = format!("enc:{}", encode_polyline(batch));
        let mut query = vec![("locations", locations)];
        if let Some(key) = &self.api_key {
            query.push(("key", key.clone()));
        }

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let samples = parse_response(&body, batch.len())?;
        debug!(samples = samples.len(), "Fetched elevation batch");
        Ok(samples)
    }
}

#[async_trait]
impl ElevationProvider for GoogleElevationProvider {
    async fn fetch_elevations(
        &self,
        points: &[GeoPoint],
    ) -> Result<Vec<ElevationSample>, ProviderError> {
        fetch_in_batches(
            points,
            self.config.batch_size,
            self.config.max_concurrent_batches,
            |index, batch| self.fetch_batch(index, batch),
        )
        .await
    }

    fn name(&self) -> &str {
        "google"
    }

    fn is_ready(&self) -> bool {
        self.api_key.is_some()
    }
}
