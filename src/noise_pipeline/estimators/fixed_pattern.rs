use crate::noise_pipeline::bayer::types::ChannelGrid;
use crate::noise_pipeline::estimators::mean;

/// Fixed pattern noise of one channel grid, conventionally the first frame
/// of a stack.
///
/// Reduces the grid to one mean per column, then takes the population
/// standard deviation of those per-column means around their own mean. The
/// column-wise reduction isolates spatially structured sensor defects from
/// frame-to-frame variation; FPN is assumed temporally constant, so a
/// single reference frame suffices. A one-column grid yields 0.
pub fn fixed_pattern_noise(grid: &ChannelGrid) -> f64 {
    let column_means: Vec<f64> = (0..grid.cols)
        .map(|col| {
            (0..grid.rows).map(|row| grid.sample(row, col)).sum::<f64>() / grid.rows as f64
        })
        .collect();

    let global_mean = mean(&column_means);
    let mean_sq_dev = column_means
        .iter()
        .map(|&m| (m - global_mean).powi(2))
        .sum::<f64>()
        / column_means.len() as f64;
    mean_sq_dev.sqrt()
}
