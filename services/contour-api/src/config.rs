//! Service configuration loading and types.

use anyhow::{Context, Result};
use contour_engine::ContourSettings;
use elevation_client::GoogleProviderConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Service configuration loaded from a YAML file.
///
/// Every field has a default, so a partial file (or none at all) is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContourServiceConfig {
    /// Sampling and level selection (`sampling:` and `levels:` sections).
    #[serde(flatten)]
    pub contour: ContourSettings,

    /// Elevation provider settings.
    #[serde(default)]
    pub provider: GoogleProviderConfig,

    /// Request limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl ContourServiceConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file does not exist.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Contour config file does not exist, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {:?}", path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse: {:?}", path))
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Request limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum boundary vertices accepted per request.
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,

    /// Contour computations running at once; further requests wait.
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_vertices: default_max_vertices(),
            max_concurrent_requests: default_max_concurrent_requests(),
        }
    }
}

fn default_max_vertices() -> usize {
    10_000
}

fn default_max_concurrent_requests() -> usize {
    16
}
