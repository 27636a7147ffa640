use super::block::block_histogram;
use super::descriptor::Descriptor;
use super::params::HogParams;
use crate::angle::NUM_BINS;
use crate::gradient::GradientField;

/// Non-overlapping raster sweep of block-sized tiles over the field.
///
/// Rows advance by one block height and columns by one block width, starting
/// at (0, 0). A tile is visited only when the remaining extent holds the full
/// block footprint; partial blocks at the right/bottom are skipped.
pub fn scan_tiles(field: &GradientField, params: &HogParams) -> Descriptor {
    let (tiles_x, tiles_y) = params.tile_grid(field.width(), field.height());
    let bw = params.block_width_px();
    let bh = params.block_height_px();

    let mut values = Vec::with_capacity(tiles_x * tiles_y * NUM_BINS);
    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            values.extend_from_slice(&block_histogram(field, tx * bw, ty * bh, params));
        }
    }
    Descriptor {
        tiles_x,
        tiles_y,
        values,
    }
}
