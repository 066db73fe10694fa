//! Pipeline orchestration module
//!
//! Wires frame loading, decomposition, stacking, and the estimators into a
//! single entry point with explicit configuration.

mod config;
mod pipeline;

#[cfg(test)]
mod tests;

pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use pipeline::{NoiseAnalysisPipeline, format_report};
