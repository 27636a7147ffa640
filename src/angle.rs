//! Orientation utilities for unsigned (π-periodic) gradients, in degrees.
//!
//! Gradient direction is treated modulo 180°: a raw `atan2` angle is first
//! brought into [0°, 360°) and then reduced by 180° when it exceeds 180°.
//! The value 180° itself is kept, which is why the last histogram bin is
//! closed on both ends.

/// Number of orientation bins in every cell and block histogram.
pub const NUM_BINS: usize = 9;

/// Angular width of one bin in degrees.
pub const BIN_WIDTH_DEG: f32 = 180.0 / NUM_BINS as f32;

/// Folds an angle in degrees into the unsigned range [0, 180].
///
/// 190° and 10° fold to the same value; 180° stays 180°.
#[inline]
pub fn fold_orientation_deg(angle_deg: f32) -> f32 {
    let full = angle_deg.rem_euclid(360.0);
    if full > 180.0 {
        full - 180.0
    } else {
        full
    }
}

/// Unsigned orientation of the gradient `(dx, dy)` in degrees, in [0, 180].
#[inline]
pub fn gradient_orientation_deg(dx: f32, dy: f32) -> f32 {
    // f64 keeps atan2(0, -1) at exactly 180° after the cast back.
    let raw = f64::from(dy).atan2(f64::from(dx)).to_degrees() as f32;
    fold_orientation_deg(raw)
}

/// Histogram bin for a folded orientation.
///
/// Bins are half-open `[20k, 20k + 20)` except the last one, which is
/// `[160, 180]`. Returns `None` for values outside [0, 180] (including NaN).
#[inline]
pub fn orientation_bin(angle_deg: f32) -> Option<usize> {
    if !(0.0..=180.0).contains(&angle_deg) {
        return None;
    }
    let bin = (0..NUM_BINS - 1)
        .find(|&k| angle_deg < BIN_WIDTH_DEG * (k + 1) as f32)
        .unwrap_or(NUM_BINS - 1);
    Some(bin)
}
