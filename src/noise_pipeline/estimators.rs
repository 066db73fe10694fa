//! Noise estimators
//!
//! The three standard sensor-noise metrics, each a total function over
//! validated input. The reduction axes are part of each contract: Total
//! Noise pools every sample of one grid, FPN reduces column-wise first, and
//! Temporal Noise centers each frame on its own mean before pooling. Total
//! Noise is a per-frame (grid-in) metric; FPN and Temporal Noise are
//! per-stack metrics, kept as distinct signatures so the two statistical
//! regimes cannot be confused at a call site.

mod fixed_pattern;
mod temporal;
mod total_noise;

pub use fixed_pattern::fixed_pattern_noise;
pub use temporal::temporal_noise;
pub use total_noise::total_noise;

/// Arithmetic mean. Callers guarantee a non-empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
