use std::path::Path;

use tracing::debug;

use crate::noise_pipeline::common::error::{NoiseError, Result};
use crate::noise_pipeline::frame::types::RawFrame;

/// Seam between the analysis core and whatever supplies the captures.
///
/// Implementations decode one on-disk representation of a capture into a
/// [`RawFrame`]; the core never touches file formats itself.
pub trait FrameSource {
    fn read_frame(&self, data: &[u8]) -> Result<RawFrame>;
}

/// Loads `1.png .. count.png` (or whatever extension the source decodes)
/// from `dir`, in frame order.
///
/// The numbering convention matches bench-capture tooling that writes one
/// file per exposure starting at 1. Frame order is preserved: file `i`
/// becomes frame `i - 1` of the stack.
pub fn load_numbered_frames<S: FrameSource>(
    dir: impl AsRef<Path>,
    count: usize,
    extension: &str,
    source: &S,
) -> Result<Vec<RawFrame>> {
    let dir = dir.as_ref();
    if count == 0 {
        return Err(NoiseError::EmptyFrameSet);
    }

    let mut frames = Vec::with_capacity(count);
    for i in 1..=count {
        let path = dir.join(format!("{i}.{extension}"));
        debug!(frame = i, path = %path.display(), "Loading frame");
        let data = std::fs::read(&path)
            .map_err(|e| NoiseError::InputReadError(format!("{}: {}", path.display(), e)))?;
        frames.push(source.read_frame(&data)?);
    }
    Ok(frames)
}
