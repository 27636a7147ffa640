use crate::angle::NUM_BINS;
use serde::{Deserialize, Serialize};

/// Concatenated block histograms of one image, in raster tile order.
///
/// `values.len() == 9 · tiles_x · tiles_y`. The length depends on the image
/// size, so descriptors of differently sized images are not comparable
/// position by position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub tiles_x: usize,
    pub tiles_y: usize,
    pub values: Vec<f32>,
}

impl Descriptor {
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn tile_count(&self) -> usize {
        self.tiles_x * self.tiles_y
    }

    /// Histogram of the tile at column `tx`, row `ty`.
    pub fn tile(&self, tx: usize, ty: usize) -> Option<&[f32]> {
        if tx >= self.tiles_x || ty >= self.tiles_y {
            return None;
        }
        let start = (ty * self.tiles_x + tx) * NUM_BINS;
        self.values.get(start..start + NUM_BINS)
    }
}
