//! Mosaic pattern descriptors
//!
//! The sensor tiles a 2x2 color filter arrangement across the pixel grid.
//! Which corner holds which filter is fixed by the sensor geometry, so the
//! assignment is a named descriptor rather than inlined parity literals;
//! sensors with a different first-row ordering pick a different variant.

/// A 2x2 color filter arrangement, named by its top-left quad read
/// row-major (e.g. `Bggr` = Blue, Green / Green, Red).
///
/// Red and Blue always occupy opposite corners of the quad; the two Green
/// sites fill the remaining diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosaicPattern {
    /// Blue at (0,0), Red at (1,1). The AR0544 arrangement.
    Bggr,
    /// Red at (0,0), Blue at (1,1).
    Rggb,
    /// Red at (0,1), Blue at (1,0).
    Grbg,
    /// Blue at (0,1), Red at (1,0).
    Gbrg,
}

impl MosaicPattern {
    /// (row, col) offset of the Red site within the 2x2 quad.
    pub fn red_offset(&self) -> (usize, usize) {
        match self {
            MosaicPattern::Bggr => (1, 1),
            MosaicPattern::Rggb => (0, 0),
            MosaicPattern::Grbg => (0, 1),
            MosaicPattern::Gbrg => (1, 0),
        }
    }

    /// (row, col) offset of the Blue site, the corner opposite Red.
    pub fn blue_offset(&self) -> (usize, usize) {
        let (r, c) = self.red_offset();
        (1 - r, 1 - c)
    }

    /// The two Green sites, ordered: the one sharing its row with Blue
    /// first, then the one sharing its row with Red. This ordering defines
    /// which sub-mosaic lands on top when the green plane is stacked.
    pub fn green_offsets(&self) -> [(usize, usize); 2] {
        let (red_row, red_col) = self.red_offset();
        let (blue_row, blue_col) = self.blue_offset();
        [(blue_row, red_col), (red_row, blue_col)]
    }
}

impl Default for MosaicPattern {
    fn default() -> Self {
        MosaicPattern::Bggr
    }
}
