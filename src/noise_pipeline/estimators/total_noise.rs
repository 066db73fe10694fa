use crate::noise_pipeline::bayer::types::ChannelGrid;
use crate::noise_pipeline::estimators::mean;

/// Total noise of one channel grid: the population standard deviation of
/// every sample around the grid's own mean, treating the grid as a flat
/// collection regardless of row/column structure.
///
/// Computed once per frame per channel; measures the overall per-frame
/// variability. A constant grid yields exactly 0.
pub fn total_noise(grid: &ChannelGrid) -> f64 {
    let grid_mean = mean(&grid.data);
    let mean_sq_dev = grid
        .data
        .iter()
        .map(|&v| (v - grid_mean).powi(2))
        .sum::<f64>()
        / grid.data.len() as f64;
    mean_sq_dev.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, cols: usize, data: Vec<f64>) -> ChannelGrid {
        ChannelGrid::new(rows, cols, data)
    }

    #[test]
    fn test_constant_grid_is_zero() {
        let g = grid(2, 2, vec![100.0; 4]);
        assert_eq!(total_noise(&g), 0.0);
    }

    #[test]
    fn test_single_sample_is_zero() {
        let g = grid(1, 1, vec![42.0]);
        assert_eq!(total_noise(&g), 0.0);
    }

    #[test]
    fn test_known_population_stddev() {
        // Samples [2, 4, 4, 4, 5, 5, 7, 9]: mean 5, population stddev 2.
        let g = grid(2, 4, vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((total_noise(&g) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_ignores_row_column_structure() {
        // Same samples, different shapes: the flat reduction must agree.
        let wide = grid(1, 6, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let tall = grid(6, 1, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let rect = grid(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(total_noise(&wide), total_noise(&tall));
        assert_eq!(total_noise(&wide), total_noise(&rect));
    }

    #[test]
    fn test_non_negative() {
        let g = grid(2, 2, vec![-3.0, 1.0, 4.0, -1.5]);
        assert!(total_noise(&g) >= 0.0);
    }
}
