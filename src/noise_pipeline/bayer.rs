//! Bayer decomposition module
//!
//! Splits single-channel raw frames into per-color sample grids according to
//! the sensor's 2x2 mosaic arrangement.

mod decompose;
mod mosaic;
pub mod types;

pub use decompose::decompose;
pub use mosaic::MosaicPattern;
pub use types::{CfaChannel, ChannelGrid, ChannelSet};
