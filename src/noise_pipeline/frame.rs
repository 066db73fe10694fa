//! Frame acquisition module
//!
//! This module provides format-agnostic loading of raw captures into the
//! in-memory frame representation the analysis core consumes.

mod png_source;
mod rawloader_source;
mod source;
pub mod types;

pub use png_source::PngFrameSource;
pub use rawloader_source::RawLoaderSource;
pub use source::{FrameSource, load_numbered_frames};
pub use types::RawFrame;
