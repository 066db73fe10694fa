//! Analysis configuration types

use crate::noise_pipeline::bayer::MosaicPattern;

/// Configuration for a noise characterization run
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// How many frames of the input sequence to stack (None = all)
    pub frame_count: Option<usize>,
    /// Which 2x2 offset assignment defines Red/Green/Blue
    pub mosaic_pattern: MosaicPattern,
    /// Whether to decompose frames on the rayon thread pool
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frame_count: None,
            mosaic_pattern: MosaicPattern::default(),
            parallel: true,
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

/// Builder for AnalysisConfig
#[derive(Default)]
pub struct AnalysisConfigBuilder {
    frame_count: Option<Option<usize>>,
    mosaic_pattern: Option<MosaicPattern>,
    parallel: Option<bool>,
}

impl AnalysisConfigBuilder {
    pub fn frame_count(mut self, count: Option<usize>) -> Self {
        self.frame_count = Some(count);
        self
    }

    pub fn mosaic_pattern(mut self, pattern: MosaicPattern) -> Self {
        self.mosaic_pattern = Some(pattern);
        self
    }

    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            frame_count: self.frame_count.unwrap_or(default.frame_count),
            mosaic_pattern: self.mosaic_pattern.unwrap_or(default.mosaic_pattern),
            parallel: self.parallel.unwrap_or(default.parallel),
        }
    }
}
