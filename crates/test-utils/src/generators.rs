//! Synthetic elevation surfaces.
//!
//! Each generator returns a closure from a location to an elevation, so the
//! same surface can back a provider or fill a grid directly.

use terrain_common::GeoPoint;

/// Elevation rising linearly with latitude: `lat * meters_per_degree`.
pub fn lat_ramp(meters_per_degree: f64) -> impl Fn(&GeoPoint) -> f64 + Send + Sync + Clone {
    move |p| p.lat * meters_per_degree
}

/// Elevation rising linearly with longitude: `lng * meters_per_degree`.
pub fn lng_ramp(meters_per_degree: f64) -> impl Fn(&GeoPoint) -> f64 + Send + Sync + Clone {
    move |p| p.lng * meters_per_degree
}

/// Constant elevation.
pub fn flat(elevation: f64) -> impl Fn(&GeoPoint) -> f64 + Send + Sync + Clone {
    move |_| elevation
}

/// A cone-shaped hill: `peak` at `center`, falling off linearly by
/// `slope` meters per degree of planar distance.
pub fn cone_hill(
    center: GeoPoint,
    peak: f64,
    slope: f64,
) -> impl Fn(&GeoPoint) -> f64 + Send + Sync + Clone {
    move |p| {
        let d = ((p.lat - center.lat).powi(2) + (p.lng - center.lng).powi(2)).sqrt();
        peak - slope * d
    }
}

/// Two overlapping sine waves, giving several disjoint hills and valleys.
pub fn rolling_hills(base: f64, amplitude: f64) -> impl Fn(&GeoPoint) -> f64 + Send + Sync + Clone {
    move |p| {
        let v1 = (p.lng * std::f64::consts::PI * 4.0).sin();
        let v2 = (p.lat * std::f64::consts::PI * 4.0).sin();
        base + amplitude * (v1 + v2)
    }
}

/// Fill a `[x_index][y_index]` grid from a surface, with `x = lng`, `y = lat`.
pub fn fill_grid<F>(xs: &[f64], ys: &[f64], surface: F) -> Vec<Vec<f64>>
where
    F: Fn(&GeoPoint) -> f64,
{
    xs.iter()
        .map(|&x| ys.iter().map(|&y| surface(&GeoPoint::new(y, x))).collect())
        .collect()
}

/// `n` evenly spaced values from `min` to `max` inclusive.
pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![min; n];
    }
    let step = (max - min) / (n - 1) as f64;
    (0..n).map(|i| min + i as f64 * step).collect()
}
