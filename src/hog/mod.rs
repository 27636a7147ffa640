//! HOG-like descriptor pipeline: cells → blocks → tiles.
//!
//! Overview
//! - [`cell`] buckets every pixel's gradient magnitude of one cell into 9
//!   orientation bins of 20° each.
//! - [`block`] sums the cell histograms of a block element-wise and scales the
//!   result to an L2 norm of 100.
//! - [`scan`] sweeps non-overlapping block-sized tiles over the image in raster
//!   order and concatenates their histograms.
//! - [`batch`] runs independent extractions for many images.
//!
//! Extraction is a pure function of the pixel buffer and [`HogParams`]; all
//! intermediate buffers are local to one call.

pub mod batch;
pub mod block;
pub mod cell;
pub mod descriptor;
pub mod params;
pub mod scan;

pub use batch::extract_batch;
pub use block::{block_histogram, normalize_block, NORMALIZATION_SCALE};
pub use cell::{cell_histogram, Histogram};
pub use descriptor::Descriptor;
pub use params::HogParams;
pub use scan::scan_tiles;

use crate::gradient::compute_gradients_with_border;
use crate::image::ImageRgbU8;
use log::{debug, warn};

/// Extract the descriptor of one RGB image.
///
/// Images smaller than one block in either dimension yield an empty descriptor.
pub fn extract_descriptor(img: ImageRgbU8<'_>, params: &HogParams) -> Descriptor {
    let field = compute_gradients_with_border(img, params.border);
    let descriptor = scan_tiles(&field, params);
    if descriptor.is_empty() {
        warn!(
            "extract_descriptor: {}x{} image holds no {}x{} block",
            img.w,
            img.h,
            params.block_width_px(),
            params.block_height_px()
        );
    } else {
        debug!(
            "extract_descriptor: {}x{} tiles -> {} values",
            descriptor.tiles_x,
            descriptor.tiles_y,
            descriptor.len()
        );
    }
    descriptor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::io::RgbImageU8;

    #[test]
    fn uniform_18px_image_yields_one_zero_tile() {
        let img = RgbImageU8::filled(18, 18, [120, 60, 30]);
        let desc = extract_descriptor(img.as_view(), &HogParams::default());
        assert_eq!(desc.tile_count(), 1);
        assert_eq!(desc.values, vec![0.0; 9]);
    }

    #[test]
    fn vertical_edge_lands_in_bin_zero() {
        // left half dark, right half bright: horizontal gradient, orientation 0°
        let data = (0..18 * 18)
            .map(|p| if p % 18 < 9 { [0, 0, 0] } else { [200, 200, 200] })
            .collect();
        let img = RgbImageU8::new(18, 18, data);
        let desc = extract_descriptor(img.as_view(), &HogParams::default());
        assert_eq!(desc.len(), 9);
        assert!((desc.values[0] - 100.0).abs() < 1e-3);
        assert!(desc.values[1..].iter().all(|&v| v == 0.0));
    }
}
