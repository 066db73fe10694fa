//! Sensor noise characterization pipeline
//!
//! This module measures the noise behavior of a color image sensor from a
//! sequence of raw captures of a static scene: each frame is split into its
//! Bayer color planes, the planes are stacked across frames, and three
//! standard metrics are estimated per channel — total noise, fixed pattern
//! noise, and temporal noise.

pub mod analysis;
pub mod bayer;
pub mod common;
pub mod estimators;
pub mod frame;
pub mod report;
pub mod stack;

pub use common::{NoiseError, Result};

pub use frame::{FrameSource, PngFrameSource, RawFrame, RawLoaderSource, load_numbered_frames};

pub use bayer::{CfaChannel, ChannelGrid, ChannelSet, MosaicPattern, decompose};

pub use stack::{ChannelStack, ChannelStacks, FrameStackBuilder};

pub use estimators::{fixed_pattern_noise, temporal_noise, total_noise};

pub use report::{ChannelNoise, NoiseReport};

pub use analysis::{AnalysisConfig, AnalysisConfigBuilder, NoiseAnalysisPipeline, format_report};
