//! Contour level selection.
//!
//! Picks a "nice" step from a fixed table so intervals stay human-legible
//! whatever the absolute elevation or relief of the terrain.

use tracing::debug;

use crate::settings::LevelSettings;

/// Default candidate steps, descending.
pub const NICE_STEPS: [f64; 32] = [
    1000.0, 750.0, 500.0, 400.0, 300.0, 250.0, 200.0, 150.0, 100.0, 75.0, 50.0, 40.0, 30.0, 25.0,
    20.0, 15.0, 10.0, 5.0, 4.0, 3.0, 2.5, 2.0, 1.5, 1.0, 0.75, 0.5, 0.4, 0.3, 0.25, 0.2, 0.15, 0.1,
];

/// Chosen step and the levels it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSet {
    pub step: f64,
    pub levels: Vec<f64>,
}

/// Largest candidate step yielding at least `min_levels` levels over `range`.
///
/// Falls back to the smallest candidate when none qualifies. Non-positive
/// candidates are ignored; with no usable candidate the smallest default
/// step is returned.
pub fn select_step(range: f64, steps: &[f64], min_levels: usize) -> f64 {
    let mut candidates: Vec<f64> = steps
        .iter()
        .copied()
        .filter(|s| s.is_finite() && *s > 0.0)
        .collect();
    candidates.sort_by(|a, b| b.total_cmp(a));

    let fallback = candidates
        .last()
        .copied()
        .unwrap_or(NICE_STEPS[NICE_STEPS.len() - 1]);

    candidates
        .into_iter()
        .find(|&step| level_count(range, step) >= min_levels)
        .unwrap_or(fallback)
}

fn level_count(range: f64, step: f64) -> usize {
    let divisions = (range / step).floor();
    if divisions.is_finite() && divisions >= 0.0 {
        divisions as usize + 1
    } else {
        0
    }
}

/// Levels from the largest step multiple at or below `min_elevation`,
/// strictly below `max_elevation`.
pub fn select_levels(min_elevation: f64, max_elevation: f64, settings: &LevelSettings) -> LevelSet {
    let range = max_elevation - min_elevation;
    let step = select_step(range, &settings.steps, settings.min_levels);
    let min_level = (min_elevation / step).floor() * step;

    let levels: Vec<f64> = if min_level.is_finite() && max_elevation.is_finite() {
        (0..)
            .map(|i| min_level + i as f64 * step)
            .take_while(|&level| level < max_elevation)
            .collect()
    } else {
        Vec::new()
    };

    debug!(
        min_elevation = min_elevation,
        max_elevation = max_elevation,
        step = step,
        num_levels = levels.len(),
        "Selected contour levels"
    );

    LevelSet { step, levels }
}
