//! Grayscale image frame source backed by the `image` crate.
//!
//! Bench captures of the sensor under test are commonly dumped as grayscale
//! PNGs, one file per exposure, with the Bayer mosaic intact in the single
//! luma channel. This source decodes those dumps (and any other format the
//! `image` crate recognizes) into [`RawFrame`]s without touching the sample
//! values.

use tracing::debug;

use crate::noise_pipeline::common::error::{NoiseError, Result};
use crate::noise_pipeline::frame::source::FrameSource;
use crate::noise_pipeline::frame::types::RawFrame;

pub struct PngFrameSource;

impl FrameSource for PngFrameSource {
    fn read_frame(&self, data: &[u8]) -> Result<RawFrame> {
        let decoded = image::load_from_memory(data)
            .map_err(|e| NoiseError::DecodeError(e.to_string()))?;

        let color = decoded.color();
        let width = decoded.width() as usize;
        let height = decoded.height() as usize;

        debug!("Decoded frame: {}x{}, color type {:?}", width, height, color);

        // 8-bit sources are widened to u16 without rescaling so the stored
        // values stay identical to the sensor output.
        let (samples, bits_per_sample) = if color.bits_per_pixel() / color.channel_count() as u16 <= 8
        {
            let luma = decoded.to_luma8();
            (luma.into_raw().into_iter().map(u16::from).collect(), 8)
        } else {
            let luma = decoded.to_luma16();
            (luma.into_raw(), 16)
        };

        RawFrame::new(width, height, samples, bits_per_sample)
    }
}
