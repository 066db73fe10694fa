//! Common utilities module
//!
//! This module contains shared types used across the noise pipeline.

pub mod error;

pub use error::{NoiseError, Result};
