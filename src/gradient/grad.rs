//! Color gradients with per-pixel dominant-channel selection.
//!
//! Complexity: O(W·H) per channel; memory: two float planes per channel plus
//! the two output planes.
use super::border::BorderMode;
use crate::angle::gradient_orientation_deg;
use crate::image::rgb::{BLUE, GREEN, RED};
use crate::image::{ImageF32, ImageRgbU8, ImageView, ImageViewMut};
use log::debug;

type Kernel3 = [f32; 3];

const DERIVATIVE_KERNEL: Kernel3 = [-1.0, 0.0, 1.0];

/// Channel evaluation order. The first channel is the tentative maximum and a
/// later channel only replaces it on a strictly greater magnitude. The order
/// itself is arbitrary; it is kept so descriptors stay reproducible.
const CHANNEL_ORDER: [usize; 3] = [BLUE, GREEN, RED];

/// Per-pixel gradient magnitude and unsigned orientation (degrees, [0, 180]).
#[derive(Clone, Debug, PartialEq)]
pub struct GradientField {
    /// Euclidean magnitude of the winning channel: `sqrt(dx² + dy²)`
    pub magnitude: ImageF32,
    /// Orientation of the winning channel in degrees
    pub orientation: ImageF32,
}

impl GradientField {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            magnitude: ImageF32::new(w, h),
            orientation: ImageF32::new(w, h),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.magnitude.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.magnitude.h
    }
}

fn channel_plane(img: &ImageRgbU8<'_>, channel: usize) -> ImageF32 {
    let mut plane = ImageF32::new(img.w, img.h);
    for (y, src) in img.rows().enumerate() {
        for (dst, px) in plane.row_mut(y).iter_mut().zip(src) {
            *dst = f32::from(px[channel]);
        }
    }
    plane
}

/// Gradient of a single float plane.
pub fn channel_gradient(plane: &ImageF32, border: BorderMode) -> GradientField {
    let w = plane.w;
    let h = plane.h;
    let mut out = GradientField::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    for y in 0..h {
        let y_idx = border.taps(y, h);
        let rows = [plane.row(y_idx[0]), plane.row(y_idx[1]), plane.row(y_idx[2])];
        for x in 0..w {
            let x_idx = border.taps(x, w);
            let centre = rows[1];
            let dx = centre[x_idx[0]] * DERIVATIVE_KERNEL[0]
                + centre[x_idx[1]] * DERIVATIVE_KERNEL[1]
                + centre[x_idx[2]] * DERIVATIVE_KERNEL[2];
            let dy = rows[0][x] * DERIVATIVE_KERNEL[0]
                + rows[1][x] * DERIVATIVE_KERNEL[1]
                + rows[2][x] * DERIVATIVE_KERNEL[2];

            out.magnitude.set(x, y, (dx * dx + dy * dy).sqrt());
            out.orientation.set(x, y, gradient_orientation_deg(dx, dy));
        }
    }
    out
}

/// Compute the gradient field of an RGB image with reflect-101 borders.
pub fn compute_gradients(img: ImageRgbU8<'_>) -> GradientField {
    compute_gradients_with_border(img, BorderMode::Reflect101)
}

/// Compute the gradient field of an RGB image.
///
/// The output has the same size as the input. Each pixel takes magnitude and
/// orientation from the channel with the largest magnitude; exact ties keep
/// the earlier channel in blue, green, red order.
pub fn compute_gradients_with_border(img: ImageRgbU8<'_>, border: BorderMode) -> GradientField {
    let [first, rest @ ..] = CHANNEL_ORDER;
    let mut out = channel_gradient(&channel_plane(&img, first), border);
    for channel in rest {
        let grad = channel_gradient(&channel_plane(&img, channel), border);
        for (i, &mag) in grad.magnitude.data.iter().enumerate() {
            if mag > out.magnitude.data[i] {
                out.magnitude.data[i] = mag;
                out.orientation.data[i] = grad.orientation.data[i];
            }
        }
    }
    debug!(
        "compute_gradients: {}x{} border={:?}",
        out.width(),
        out.height(),
        border
    );
    out
}
