//! Report assembly module
//!
//! Collects the estimator outputs into the immutable per-channel summary
//! handed to the presentation layer.

mod assembler;
pub mod types;

pub use types::{ChannelNoise, NoiseReport};
