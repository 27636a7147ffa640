use super::cell::{cell_histogram, Histogram};
use super::params::HogParams;
use crate::angle::NUM_BINS;
use crate::gradient::GradientField;

/// Normalized block histograms have this L2 norm (percentage scaling).
pub const NORMALIZATION_SCALE: f32 = 100.0;

/// Sum of the cell histograms of the block at pixel origin (x0, y0), normalized.
///
/// Cells are visited in raster order and summed element-wise; the caller
/// guarantees that the block footprint lies inside the field.
pub fn block_histogram(field: &GradientField, x0: usize, y0: usize, params: &HogParams) -> Histogram {
    let mut sum = [0.0f32; NUM_BINS];
    for cy in 0..params.block_size_y {
        for cx in 0..params.block_size_x {
            let cell = cell_histogram(
                field,
                x0 + cx * params.cell_size_x,
                y0 + cy * params.cell_size_y,
                params.cell_size_x,
                params.cell_size_y,
            );
            for (acc, v) in sum.iter_mut().zip(cell) {
                *acc += v;
            }
        }
    }
    normalize_block(&mut sum);
    sum
}

/// Scales `hist` to an L2 norm of [`NORMALIZATION_SCALE`]. An all-zero
/// histogram is left untouched.
pub fn normalize_block(hist: &mut Histogram) {
    let norm = hist.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm == 0.0 {
        return;
    }
    for v in hist.iter_mut() {
        *v = *v / norm * NORMALIZATION_SCALE;
    }
}
