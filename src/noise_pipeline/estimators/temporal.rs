use crate::noise_pipeline::estimators::mean;
use crate::noise_pipeline::stack::types::ChannelStack;

/// Temporal noise of a full channel stack.
///
/// Two-pass: first each frame's own mean, then the root-mean-square of
/// every sample's deviation from *its own frame's* mean, pooled over all
/// frames and pixel positions. Centering per frame rather than on the
/// global mean keeps frame-to-frame brightness drift out of the figure, so
/// only pixel-level variability over time remains.
///
/// With a single frame the result collapses to the total noise of that
/// frame; it is well-defined but not a true temporal measurement, so
/// stacks of N >= 2 are expected in practice.
pub fn temporal_noise(stack: &ChannelStack) -> f64 {
    let frame_means: Vec<f64> = stack.grids.iter().map(|grid| mean(&grid.data)).collect();

    let total_samples: usize = stack.grids.iter().map(|grid| grid.len()).sum();
    let pooled_sq_dev: f64 = stack
        .grids
        .iter()
        .zip(&frame_means)
        .map(|(grid, &frame_mean)| {
            grid.data
                .iter()
                .map(|&v| (v - frame_mean).powi(2))
                .sum::<f64>()
        })
        .sum();

    (pooled_sq_dev / total_samples as f64).sqrt()
}
