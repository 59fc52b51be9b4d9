//! Tunables for sampling and level selection.

use serde::{Deserialize, Serialize};

use crate::levels::NICE_STEPS;

/// Contouring settings, deserializable from the service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContourSettings {
    #[serde(default)]
    pub sampling: SamplingSettings,

    #[serde(default)]
    pub levels: LevelSettings,
}

/// Sampling grid resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingSettings {
    /// Divisions along the longer bounding-box axis.
    #[serde(default = "default_divisions")]
    pub divisions: usize,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            divisions: default_divisions(),
        }
    }
}

/// Contour level selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSettings {
    /// Minimum number of levels the chosen step should yield.
    #[serde(default = "default_min_levels")]
    pub min_levels: usize,

    /// Candidate step sizes.
    #[serde(default = "default_steps")]
    pub steps: Vec<f64>,
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            min_levels: default_min_levels(),
            steps: default_steps(),
        }
    }
}

fn default_divisions() -> usize {
    50
}
fn default_min_levels() -> usize {
    10
}
fn default_steps() -> Vec<f64> {
    NICE_STEPS.to_vec()
}
