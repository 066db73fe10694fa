//! Frame stacking module
//!
//! Turns an ordered sequence of raw frames into per-channel 3-D stacks
//! (frame index x row x column) for the stack-wide estimators.

mod builder;
pub mod types;

pub use builder::FrameStackBuilder;
pub use types::{ChannelStack, ChannelStacks};
