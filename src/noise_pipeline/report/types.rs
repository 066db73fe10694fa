//! Noise report types

use crate::noise_pipeline::bayer::types::CfaChannel;

/// The three noise metrics for one color channel.
///
/// `total_noise` keeps the full per-frame detail; `avg_total_noise` is its
/// arithmetic mean, a convenience summary. FPN and temporal noise are
/// already stack-level aggregates. Never mutated after assembly.
#[derive(Debug, Clone)]
pub struct ChannelNoise {
    pub channel: CfaChannel,
    /// Total noise of each frame, in input frame order
    pub total_noise: Vec<f64>,
    /// Arithmetic mean of `total_noise`
    pub avg_total_noise: f64,
    /// Fixed pattern noise, computed from the stack's first frame
    pub fixed_pattern_noise: f64,
    /// Temporal noise across the whole stack
    pub temporal_noise: f64,
}

/// Per-channel noise characterization of one capture sequence.
#[derive(Debug, Clone)]
pub struct NoiseReport {
    pub red: ChannelNoise,
    pub green: ChannelNoise,
    pub blue: ChannelNoise,
}

impl NoiseReport {
    pub fn channels(&self) -> impl Iterator<Item = &ChannelNoise> {
        [&self.red, &self.green, &self.blue].into_iter()
    }
}
