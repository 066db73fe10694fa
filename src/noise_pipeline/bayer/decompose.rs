use tracing::debug;

use crate::noise_pipeline::bayer::mosaic::MosaicPattern;
use crate::noise_pipeline::bayer::types::{ChannelGrid, ChannelSet};
use crate::noise_pipeline::common::error::{NoiseError, Result};
use crate::noise_pipeline::frame::types::RawFrame;

/// Splits one raw frame into its three Bayer color planes.
///
/// Red and Blue keep one sample per 2x2 quad, yielding half-height,
/// half-width grids. The two Green sub-mosaics are stacked row-wise into a
/// single full-height, half-width grid; they are never averaged or
/// interleaved, so both green sites contribute their raw samples to the
/// statistics.
///
/// Pure function of the frame and pattern; the frame must be non-empty with
/// even dimensions (the 2x2 quad does not tile an odd extent).
pub fn decompose(frame: &RawFrame, pattern: MosaicPattern) -> Result<ChannelSet> {
    if frame.data.is_empty() || frame.width == 0 || frame.height == 0 {
        return Err(NoiseError::EmptyFrame);
    }
    if frame.width % 2 != 0 || frame.height % 2 != 0 {
        return Err(NoiseError::InvalidFrameDimensions {
            width: frame.width,
            height: frame.height,
        });
    }

    debug!(
        "Decomposing {}x{} frame with pattern {:?}",
        frame.width, frame.height, pattern
    );

    let red = extract_submosaic(frame, pattern.red_offset());
    let blue = extract_submosaic(frame, pattern.blue_offset());

    let [green_top, green_bottom] = pattern.green_offsets();
    let green = stack_green(
        extract_submosaic(frame, green_top),
        extract_submosaic(frame, green_bottom),
    );

    Ok(ChannelSet { red, green, blue })
}

/// Pulls every second sample starting at (row_offset, col_offset) into a
/// half-height, half-width grid.
fn extract_submosaic(frame: &RawFrame, (row_offset, col_offset): (usize, usize)) -> ChannelGrid {
    let rows = frame.height / 2;
    let cols = frame.width / 2;
    let mut data = Vec::with_capacity(rows * cols);
    for row in (row_offset..frame.height).step_by(2) {
        for col in (col_offset..frame.width).step_by(2) {
            data.push(f64::from(frame.sample(row, col)));
        }
    }
    ChannelGrid::new(rows, cols, data)
}

/// Vertical concatenation of the two green sub-mosaics.
fn stack_green(top: ChannelGrid, bottom: ChannelGrid) -> ChannelGrid {
    debug_assert_eq!(top.cols, bottom.cols);
    let rows = top.rows + bottom.rows;
    let cols = top.cols;
    let mut data = top.data;
    data.extend(bottom.data);
    ChannelGrid::new(rows, cols, data)
}
