//! Block/cell geometry for descriptor extraction.

use crate::error::HogError;
use crate::gradient::BorderMode;
use serde::{Deserialize, Serialize};

/// Geometry of the cell → block → tile hierarchy.
///
/// A block spans `block_size_x × block_size_y` cells, so its pixel footprint
/// is `block_size_x·cell_size_x` by `block_size_y·cell_size_y`. Tiles are
/// non-overlapping placements of that footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HogParams {
    /// Cells per block, horizontally.
    pub block_size_x: usize,
    /// Cells per block, vertically.
    pub block_size_y: usize,
    /// Cell width in pixels.
    pub cell_size_x: usize,
    /// Cell height in pixels.
    pub cell_size_y: usize,
    /// Border policy of the derivative filters.
    pub border: BorderMode,
}

impl Default for HogParams {
    fn default() -> Self {
        Self {
            block_size_x: 6,
            block_size_y: 6,
            cell_size_x: 3,
            cell_size_y: 3,
            border: BorderMode::Reflect101,
        }
    }
}

impl HogParams {
    pub fn new(block_size: (usize, usize), cell_size: (usize, usize)) -> Self {
        Self {
            block_size_x: block_size.0,
            block_size_y: block_size.1,
            cell_size_x: cell_size.0,
            cell_size_y: cell_size.1,
            ..Self::default()
        }
    }

    pub fn with_border(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }

    /// Block footprint width in pixels, saturating at `usize::MAX`.
    #[inline]
    pub fn block_width_px(&self) -> usize {
        self.block_size_x.saturating_mul(self.cell_size_x)
    }

    /// Block footprint height in pixels, saturating at `usize::MAX`.
    #[inline]
    pub fn block_height_px(&self) -> usize {
        self.block_size_y.saturating_mul(self.cell_size_y)
    }

    /// Block footprint `(width, height)` in pixels, `None` on overflow.
    pub fn block_footprint(&self) -> Option<(usize, usize)> {
        let bw = self.block_size_x.checked_mul(self.cell_size_x)?;
        let bh = self.block_size_y.checked_mul(self.cell_size_y)?;
        Some((bw, bh))
    }

    /// Rejects zero-sized blocks or cells and block footprints that overflow.
    pub fn validate(&self) -> Result<(), HogError> {
        let sizes = [
            ("block_size_x", self.block_size_x),
            ("block_size_y", self.block_size_y),
            ("cell_size_x", self.cell_size_x),
            ("cell_size_y", self.cell_size_y),
        ];
        if let Some((name, _)) = sizes.iter().find(|(_, v)| *v == 0) {
            return Err(HogError::InvalidGeometry(format!("{name} must be non-zero")));
        }
        if self.block_footprint().is_none() {
            return Err(HogError::InvalidGeometry(format!(
                "block of {}x{} cells of {}x{} px overflows the pixel range",
                self.block_size_x, self.block_size_y, self.cell_size_x, self.cell_size_y
            )));
        }
        Ok(())
    }

    /// Number of whole tiles `(columns, rows)` that fit in a `w × h` image.
    ///
    /// Remainder strips at the right/bottom are dropped. Both counts are zero
    /// when either axis cannot hold one block, or when the block footprint
    /// overflows.
    pub fn tile_grid(&self, w: usize, h: usize) -> (usize, usize) {
        let Some((bw, bh)) = self.block_footprint() else {
            return (0, 0);
        };
        if bw == 0 || bh == 0 || w < bw || h < bh {
            return (0, 0);
        }
        (w / bw, h / bh)
    }

    /// Descriptor length for a `w × h` image.
    pub fn descriptor_len(&self, w: usize, h: usize) -> usize {
        let (cols, rows) = self.tile_grid(w, h);
        cols * rows * crate::angle::NUM_BINS
    }
}
