use rayon::prelude::*;
use tracing::debug;

use crate::noise_pipeline::bayer::types::{CfaChannel, ChannelSet};
use crate::noise_pipeline::bayer::{MosaicPattern, decompose};
use crate::noise_pipeline::common::error::{NoiseError, Result};
use crate::noise_pipeline::frame::types::RawFrame;
use crate::noise_pipeline::stack::types::{ChannelStack, ChannelStacks};

/// Decomposes an ordered frame sequence and groups the results by channel.
pub struct FrameStackBuilder {
    pattern: MosaicPattern,
    parallel: bool,
}

impl FrameStackBuilder {
    pub fn new(pattern: MosaicPattern) -> Self {
        Self {
            pattern,
            parallel: false,
        }
    }

    /// Decompose frames across the rayon thread pool. Output order is still
    /// the input frame order.
    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    /// Builds the three channel stacks from `frames`, preserving frame order.
    ///
    /// Fails with `EmptyFrameSet` when no frames are supplied and with
    /// `FrameDimensionMismatch` when any frame disagrees in shape with the
    /// first; stacking and temporal comparison require a uniform shape.
    pub fn build(&self, frames: &[RawFrame]) -> Result<ChannelStacks> {
        let first = frames.first().ok_or(NoiseError::EmptyFrameSet)?;

        for (index, frame) in frames.iter().enumerate() {
            if frame.width != first.width || frame.height != first.height {
                return Err(NoiseError::FrameDimensionMismatch {
                    frame_index: index,
                    expected_width: first.width,
                    expected_height: first.height,
                    found_width: frame.width,
                    found_height: frame.height,
                });
            }
        }

        debug!(
            frames = frames.len(),
            width = first.width,
            height = first.height,
            parallel = self.parallel,
            "Building channel stacks"
        );

        let sets: Vec<ChannelSet> = if self.parallel {
            frames
                .par_iter()
                .map(|frame| decompose(frame, self.pattern))
                .collect::<Result<_>>()?
        } else {
            frames
                .iter()
                .map(|frame| decompose(frame, self.pattern))
                .collect::<Result<_>>()?
        };

        let mut red = Vec::with_capacity(sets.len());
        let mut green = Vec::with_capacity(sets.len());
        let mut blue = Vec::with_capacity(sets.len());
        for set in sets {
            red.push(set.red);
            green.push(set.green);
            blue.push(set.blue);
        }

        Ok(ChannelStacks {
            red: ChannelStack {
                channel: CfaChannel::Red,
                grids: red,
            },
            green: ChannelStack {
                channel: CfaChannel::Green,
                grids: green,
            },
            blue: ChannelStack {
                channel: CfaChannel::Blue,
                grids: blue,
            },
        })
    }
}
