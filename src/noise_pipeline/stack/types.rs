//! Channel stack types

use crate::noise_pipeline::bayer::types::{CfaChannel, ChannelGrid};

/// An ordered stack of channel grids, one per input frame, for one color.
///
/// Frame order is meaningful: index 0 is the reference frame for fixed
/// pattern noise, and per-frame metrics are reported against this order.
/// The builder guarantees every grid in a stack has identical dimensions.
#[derive(Debug, Clone)]
pub struct ChannelStack {
    pub channel: CfaChannel,
    pub grids: Vec<ChannelGrid>,
}

impl ChannelStack {
    /// Number of frames in the stack.
    pub fn frame_count(&self) -> usize {
        self.grids.len()
    }

    /// The reference frame (frame 0).
    pub fn reference(&self) -> &ChannelGrid {
        &self.grids[0]
    }
}

/// The three per-channel stacks built from one capture sequence.
#[derive(Debug, Clone)]
pub struct ChannelStacks {
    pub red: ChannelStack,
    pub green: ChannelStack,
    pub blue: ChannelStack,
}

impl ChannelStacks {
    pub fn iter(&self) -> impl Iterator<Item = &ChannelStack> {
        [&self.red, &self.green, &self.blue].into_iter()
    }
}
