//! Camera RAW frame source using the rawloader library.
//!
//! Supports any RAW format rawloader can decode (ARW, NEF, CR2, DNG, ...),
//! yielding the sensor's single-channel Bayer mosaic exactly as captured.
//! Useful when characterizing a sensor straight from the camera's own RAW
//! output rather than from pre-extracted grayscale dumps.

use std::io::Cursor;

use rawloader::RawImageData as RawloaderImageData;
use tracing::debug;

use crate::noise_pipeline::common::error::{NoiseError, Result};
use crate::noise_pipeline::frame::source::FrameSource;
use crate::noise_pipeline::frame::types::RawFrame;

pub struct RawLoaderSource;

/// Default bit depth when no white level information is available from the RAW file.
const DEFAULT_BITS_PER_SAMPLE: u32 = 16;

/// The bit width of the u16 data type, used for calculating actual bits per sample.
const U16_BITS: u32 = 16;

impl FrameSource for RawLoaderSource {
    /// Decodes RAW bytes into a single-channel Bayer frame.
    ///
    /// Integer sensor data is cast directly; float RAW data (normalized
    /// 0.0-1.0) is scaled to the u16 range. The actual bit depth is derived
    /// from the sensor's white level metadata, e.g. a white level of 4095
    /// means a 12-bit sensor.
    fn read_frame(&self, data: &[u8]) -> Result<RawFrame> {
        debug!("Decoding RAW frame, {} bytes", data.len());

        let decoded = rawloader::decode(&mut Cursor::new(data))
            .map_err(|e| NoiseError::DecodeError(e.to_string()))?;

        let width = decoded.width;
        let height = decoded.height;

        debug!("Decoded frame: {}x{}", width, height);

        let samples: Vec<u16> = match decoded.data {
            RawloaderImageData::Integer(values) => values.iter().map(|&v| v as u16).collect(),
            RawloaderImageData::Float(values) => values
                .iter()
                .map(|&v| (v * u16::MAX as f32) as u16)
                .collect(),
        };

        let max_white_level = decoded.whitelevels.iter().max().copied().unwrap_or(u16::MAX);
        let bits_per_sample = if max_white_level == 0 {
            DEFAULT_BITS_PER_SAMPLE
        } else {
            U16_BITS - max_white_level.leading_zeros()
        };

        debug!(
            "Calculated bits_per_sample: {} (max white level: {})",
            bits_per_sample, max_white_level
        );

        RawFrame::new(width, height, samples, bits_per_sample)
    }
}
