use std::path::Path;

use tracing::{info, instrument};

use crate::noise_pipeline::analysis::config::AnalysisConfig;
use crate::noise_pipeline::common::error::Result;
use crate::noise_pipeline::estimators::{fixed_pattern_noise, temporal_noise, total_noise};
use crate::noise_pipeline::frame::{FrameSource, PngFrameSource, RawFrame, load_numbered_frames};
use crate::noise_pipeline::report::{ChannelNoise, NoiseReport};
use crate::noise_pipeline::stack::types::ChannelStack;
use crate::noise_pipeline::stack::FrameStackBuilder;

/// End-to-end noise characterization: frames in, report out.
///
/// Decomposition, stacking, and the three estimators run in a strict
/// forward order; nothing feeds back, so validation failures abort the run
/// before any metric is produced.
pub struct NoiseAnalysisPipeline<S: FrameSource> {
    source: S,
    config: AnalysisConfig,
}

impl NoiseAnalysisPipeline<PngFrameSource> {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            source: PngFrameSource,
            config,
        }
    }
}

impl<S: FrameSource> NoiseAnalysisPipeline<S> {
    pub fn with_source(source: S, config: AnalysisConfig) -> Self {
        Self { source, config }
    }

    /// Characterizes an already-loaded, ordered frame sequence.
    #[instrument(skip(self, frames), fields(frames = frames.len()))]
    pub fn analyze(&self, frames: &[RawFrame]) -> Result<NoiseReport> {
        info!("Starting noise characterization");

        let frames = match self.config.frame_count {
            Some(count) if count < frames.len() => &frames[..count],
            _ => frames,
        };

        let stacks = {
            let _span = tracing::info_span!("build_stacks").entered();
            FrameStackBuilder::new(self.config.mosaic_pattern)
                .parallel(self.config.parallel)
                .build(frames)?
        };

        let report = {
            let _span = tracing::info_span!("estimate_noise").entered();
            NoiseReport::assemble(
                characterize_channel(&stacks.red),
                characterize_channel(&stacks.green),
                characterize_channel(&stacks.blue),
            )
        };

        info!(
            frames = frames.len(),
            red_temporal = report.red.temporal_noise,
            green_temporal = report.green.temporal_noise,
            blue_temporal = report.blue.temporal_noise,
            "Characterization complete"
        );
        Ok(report)
    }

    /// Loads `1.ext .. count.ext` from `dir` through this pipeline's frame
    /// source and characterizes them.
    #[instrument(skip(self, dir))]
    pub fn analyze_directory(
        &self,
        dir: impl AsRef<Path>,
        count: usize,
        extension: &str,
    ) -> Result<NoiseReport> {
        let dir = dir.as_ref();
        info!(dir = %dir.display(), count, "Loading frame sequence");

        let frames = {
            let _span = tracing::info_span!("load_frames").entered();
            load_numbered_frames(dir, count, extension, &self.source)?
        };

        self.analyze(&frames)
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }
}

/// Runs the three estimators over one channel stack.
///
/// Total noise is per frame; FPN uses the stack's first frame as the
/// reference; temporal noise pools the whole stack.
fn characterize_channel(stack: &ChannelStack) -> ChannelNoise {
    let _span = tracing::info_span!(
        "characterize_channel",
        channel = stack.channel.label(),
        frames = stack.frame_count()
    )
    .entered();

    let total: Vec<f64> = stack.grids.iter().map(total_noise).collect();
    let fpn = fixed_pattern_noise(stack.reference());
    let temporal = temporal_noise(stack);

    ChannelNoise::assemble(stack.channel, total, fpn, temporal)
}

/// Formats a report the way the bench tooling prints it: total noise
/// averages, then FPN, then temporal noise, one line per channel.
pub fn format_report(report: &NoiseReport) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out, "=== Total Noise ===");
    for c in report.channels() {
        let _ = writeln!(out, "{} Total Noise (avg): {}", c.channel.label(), c.avg_total_noise);
    }
    let _ = writeln!(out, "\n=== Fixed Pattern Noise (FPN) ===");
    for c in report.channels() {
        let _ = writeln!(out, "{} FPN: {}", c.channel.label(), c.fixed_pattern_noise);
    }
    let _ = writeln!(out, "\n=== Temporal Noise ===");
    for c in report.channels() {
        let _ = writeln!(out, "{} Temporal Noise: {}", c.channel.label(), c.temporal_noise);
    }
    out
}
