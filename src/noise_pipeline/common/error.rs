use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoiseError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode frame data: {0}")]
    DecodeError(String),

    #[error("Frame contains no samples")]
    EmptyFrame,

    #[error("Frame set contains no frames")]
    EmptyFrameSet,

    #[error("Invalid frame dimensions for 2x2 mosaic: width={width}, height={height}")]
    InvalidFrameDimensions { width: usize, height: usize },

    #[error(
        "Frame {frame_index} has dimensions {found_width}x{found_height}, expected {expected_width}x{expected_height}"
    )]
    FrameDimensionMismatch {
        frame_index: usize,
        expected_width: usize,
        expected_height: usize,
        found_width: usize,
        found_height: usize,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NoiseError>;
