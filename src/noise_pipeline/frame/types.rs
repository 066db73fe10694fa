//! Raw frame data types

use crate::noise_pipeline::common::error::{NoiseError, Result};

/// One raw capture straight off the sensor.
///
/// A single-channel grid of intensity samples in row-major order, carrying
/// the full Bayer mosaic before any channel separation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFrame {
    /// Width of the frame in pixels
    pub width: usize,
    /// Height of the frame in pixels
    pub height: usize,
    /// Raw pixel data (single channel Bayer pattern), row-major
    pub data: Vec<u16>,
    /// Actual bits per sample from the sensor (e.g., 8, 12, 14, or 16)
    pub bits_per_sample: u32,
}

impl RawFrame {
    /// Builds a frame from row-major samples, checking that the sample count
    /// matches the stated dimensions.
    pub fn new(width: usize, height: usize, data: Vec<u16>, bits_per_sample: u32) -> Result<Self> {
        if width == 0 || height == 0 || data.is_empty() {
            return Err(NoiseError::EmptyFrame);
        }
        if data.len() != width * height {
            return Err(NoiseError::DecodeError(format!(
                "sample count {} does not match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
            bits_per_sample,
        })
    }

    /// Sample at (row, col). Caller guarantees bounds.
    #[inline]
    pub fn sample(&self, row: usize, col: usize) -> u16 {
        self.data[row * self.width + col]
    }
}
