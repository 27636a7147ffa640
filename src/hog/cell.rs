use crate::angle::{orientation_bin, NUM_BINS};
use crate::gradient::GradientField;
use crate::image::ImageView;

/// Raw or normalized 9-bin orientation histogram.
pub type Histogram = [f32; NUM_BINS];

/// Magnitude-weighted orientation histogram of one `w × h` cell at (x0, y0).
///
/// Bin `k` accumulates every pixel whose orientation lies in `[20k, 20k+20)`;
/// the last bin is `[160, 180]`. The bins sum to the total magnitude of the cell.
pub fn cell_histogram(field: &GradientField, x0: usize, y0: usize, w: usize, h: usize) -> Histogram {
    let mut hist = [0.0f32; NUM_BINS];
    for y in y0..y0 + h {
        let mags = &field.magnitude.row(y)[x0..x0 + w];
        let oris = &field.orientation.row(y)[x0..x0 + w];
        for (&mag, &ori) in mags.iter().zip(oris) {
            if let Some(bin) = orientation_bin(ori) {
                hist[bin] += mag;
            }
        }
    }
    hist
}
