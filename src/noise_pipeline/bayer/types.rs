//! Channel data types produced by Bayer decomposition

/// The three color planes of the sensor mosaic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CfaChannel {
    Red,
    Green,
    Blue,
}

impl CfaChannel {
    pub fn label(&self) -> &'static str {
        match self {
            CfaChannel::Red => "Red",
            CfaChannel::Green => "Green",
            CfaChannel::Blue => "Blue",
        }
    }
}

/// A 2-D grid of samples extracted from one raw frame for one color channel.
///
/// Samples are stored row-major as f64 so downstream statistics work on the
/// exact values without repeated widening. Read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelGrid {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Samples in row-major order, `rows * cols` long
    pub data: Vec<f64>,
}

impl ChannelGrid {
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Sample at (row, col). Caller guarantees bounds.
    #[inline]
    pub fn sample(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// The three channel grids decomposed from a single raw frame.
#[derive(Debug, Clone)]
pub struct ChannelSet {
    pub red: ChannelGrid,
    pub green: ChannelGrid,
    pub blue: ChannelGrid,
}
