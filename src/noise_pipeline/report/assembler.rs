use crate::noise_pipeline::bayer::types::CfaChannel;
use crate::noise_pipeline::report::types::{ChannelNoise, NoiseReport};

impl ChannelNoise {
    /// Bundles the per-frame total noise sequence with the two stack-level
    /// scalars, computing the average total noise as the only derived
    /// quantity. Inputs are already validated upstream.
    pub fn assemble(
        channel: CfaChannel,
        total_noise: Vec<f64>,
        fixed_pattern_noise: f64,
        temporal_noise: f64,
    ) -> Self {
        let avg_total_noise = total_noise.iter().sum::<f64>() / total_noise.len() as f64;
        Self {
            channel,
            total_noise,
            avg_total_noise,
            fixed_pattern_noise,
            temporal_noise,
        }
    }
}

impl NoiseReport {
    pub fn assemble(red: ChannelNoise, green: ChannelNoise, blue: ChannelNoise) -> Self {
        Self { red, green, blue }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_total_noise() {
        let noise = ChannelNoise::assemble(CfaChannel::Red, vec![1.0, 2.0, 3.0], 0.5, 0.25);
        assert!((noise.avg_total_noise - 2.0).abs() < 1e-12);
        assert_eq!(noise.total_noise, vec![1.0, 2.0, 3.0]);
        assert_eq!(noise.fixed_pattern_noise, 0.5);
        assert_eq!(noise.temporal_noise, 0.25);
    }

    #[test]
    fn test_report_channel_order() {
        let make = |channel| ChannelNoise::assemble(channel, vec![0.0], 0.0, 0.0);
        let report = NoiseReport::assemble(
            make(CfaChannel::Red),
            make(CfaChannel::Green),
            make(CfaChannel::Blue),
        );
        let labels: Vec<&str> = report.channels().map(|c| c.channel.label()).collect();
        assert_eq!(labels, vec!["Red", "Green", "Blue"]);
    }
}
