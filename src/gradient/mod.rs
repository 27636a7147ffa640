//! Gradient engine: per-channel derivatives and max-magnitude channel selection.
//!
//! - Each of the three color channels is filtered with the 3-tap kernel
//!   `[-1, 0, 1]` horizontally and vertically (correlation, so
//!   `dx(x) = I(x+1) - I(x-1)`).
//! - Per channel and pixel the magnitude is `sqrt(dx² + dy²)` and the
//!   orientation is the unsigned `atan2(dy, dx)` in degrees (see [`crate::angle`]).
//! - Per pixel the channel with the largest magnitude wins; magnitude and
//!   orientation are always copied together from that one channel.
//!
//! Borders use [`BorderMode::Reflect101`] unless configured otherwise.

pub mod border;
pub mod grad;

pub use border::BorderMode;
pub use grad::{channel_gradient, compute_gradients, compute_gradients_with_border, GradientField};
