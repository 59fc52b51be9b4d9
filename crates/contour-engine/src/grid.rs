//! Sampling grid over the boundary's bounding box.

use terrain_common::{BoundingBox, ContourResult, ElevationSample, GeoPoint, ProviderError};

/// Regular lng/lat sampling grid.
///
/// The longer bounding-box axis gets exactly `divisions` cells; the other
/// axis gets however many cells keep the cells closest to square, with its
/// step recomputed so nodes are evenly spaced across the full extent.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingGrid {
    pub bbox: BoundingBox,
    /// Node longitudes, ascending (`n_divs_h + 1` values).
    pub lngs: Vec<f64>,
    /// Node latitudes, ascending (`n_divs_v + 1` values).
    pub lats: Vec<f64>,
}

impl SamplingGrid {
    /// Build the grid for a bounding box.
    pub fn for_bbox(bbox: &BoundingBox, divisions: usize) -> Self {
        let n = divisions.max(1);
        let width = bbox.width();
        let height = bbox.height();

        let (n_divs_h, n_divs_v) = if height > width {
            (secondary_divisions(width, height / n as f64), n)
        } else {
            (n, secondary_divisions(height, width / n as f64))
        };

        Self {
            bbox: *bbox,
            lngs: axis_values(bbox.min_lng, bbox.max_lng, n_divs_h),
            lats: axis_values(bbox.min_lat, bbox.max_lat, n_divs_v),
        }
    }

    /// Cells along the longitude axis.
    pub fn n_divs_h(&self) -> usize {
        self.lngs.len() - 1
    }

    /// Cells along the latitude axis.
    pub fn n_divs_v(&self) -> usize {
        self.lats.len() - 1
    }

    pub fn node_count(&self) -> usize {
        self.lngs.len() * self.lats.len()
    }

    /// All grid nodes, longitude-major (outer loop lng, inner loop lat).
    pub fn nodes(&self) -> Vec<GeoPoint> {
        self.lngs
            .iter()
            .flat_map(|&lng| self.lats.iter().map(move |&lat| GeoPoint::new(lat, lng)))
            .collect()
    }

    /// Arrange samples (in `nodes()` order) as a `[lng_index][lat_index]` matrix.
    pub fn elevation_matrix(&self, samples: &[ElevationSample]) -> ContourResult<Vec<Vec<f64>>> {
        if samples.len() != self.node_count() {
            return Err(ProviderError::CountMismatch {
                expected: self.node_count(),
                actual: samples.len(),
            }
            .into());
        }

        Ok(samples
            .chunks(self.lats.len())
            .map(|column| column.iter().map(|s| s.elevation).collect())
            .collect())
    }
}

fn secondary_divisions(extent: f64, primary_step: f64) -> usize {
    if primary_step <= 0.0 {
        return 1;
    }
    ((extent / primary_step).round() as usize).max(1)
}

fn axis_values(min: f64, max: f64, divisions: usize) -> Vec<f64> {
    let step = (max - min) / divisions as f64;
    (0..=divisions)
        .map(|i| {
            if i == divisions {
                max
            } else {
                min + i as f64 * step
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_box_gets_equal_divisions() {
        let grid = SamplingGrid::for_bbox(&BoundingBox::new(0.0, 0.0, 1.0, 1.0), 50);
        assert_eq!(grid.n_divs_h(), 50);
        assert_eq!(grid.n_divs_v(), 50);
        assert_eq!(grid.node_count(), 51 * 51);
    }

    #[test]
    fn test_wide_box() {
        // 2 degrees wide, 0.6 high: 50 x round(0.6 / 0.04)
        let grid = SamplingGrid::for_bbox(&BoundingBox::new(10.0, 20.0, 10.6, 22.0), 50);
        assert_eq!(grid.n_divs_h(), 50);
        assert_eq!(grid.n_divs_v(), 15);
        assert_eq!(*grid.lats.last().unwrap(), 10.6);
        assert_eq!(*grid.lngs.last().unwrap(), 22.0);
    }

    #[test]
    fn test_tall_box() {
        let grid = SamplingGrid::for_bbox(&BoundingBox::new(0.0, 0.0, 3.0, 1.0), 50);
        assert_eq!(grid.n_divs_v(), 50);
        assert_eq!(grid.n_divs_h(), 17); // round(16.67)
    }

    #[test]
    fn test_secondary_axis_evenly_spaced() {
        let grid = SamplingGrid::for_bbox(&BoundingBox::new(0.0, 0.0, 0.37, 1.0), 50);
        let step = grid.lats[1] - grid.lats[0];
        for pair in grid.lats.windows(2) {
            assert!(((pair[1] - pair[0]) - step).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_extent_axis_gets_one_division() {
        let grid = SamplingGrid::for_bbox(&BoundingBox::new(5.0, 0.0, 5.0, 1.0), 50);
        assert_eq!(grid.n_divs_v(), 1);
        assert_eq!(grid.lats, vec![5.0, 5.0]);
    }

    #[test]
    fn test_nodes_are_lng_major() {
        let grid = SamplingGrid::for_bbox(&BoundingBox::new(0.0, 0.0, 1.0, 2.0), 2);
        // 2 x 1 cells -> 3 lngs x 2 lats
        let nodes = grid.nodes();
        assert_eq!(nodes.len(), 6);
        assert_eq!(nodes[0], GeoPoint::new(0.0, 0.0));
        assert_eq!(nodes[1], GeoPoint::new(1.0, 0.0));
        assert_eq!(nodes[2], GeoPoint::new(0.0, 1.0));
        assert_eq!(nodes[5], GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn test_elevation_matrix_layout() {
        let grid = SamplingGrid::for_bbox(&BoundingBox::new(0.0, 0.0, 1.0, 2.0), 2);
        let samples: Vec<ElevationSample> = grid
            .nodes()
            .into_iter()
            .enumerate()
            .map(|(i, p)| ElevationSample::new(p, i as f64))
            .collect();
        let matrix = grid.elevation_matrix(&samples).unwrap();
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix[1], vec![2.0, 3.0]);
    }

    #[test]
    fn test_elevation_matrix_count_mismatch() {
        let grid = SamplingGrid::for_bbox(&BoundingBox::new(0.0, 0.0, 1.0, 1.0), 4);
        let err = grid.elevation_matrix(&[]).unwrap_err();
        assert_eq!(err.kind(), "provider");
    }
}
