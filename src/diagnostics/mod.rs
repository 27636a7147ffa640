//! Timed extraction for tools and profiling.

pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};

use crate::gradient::compute_gradients_with_border;
use crate::hog::{scan_tiles, Descriptor, HogParams};
use crate::image::ImageRgbU8;
use serde::Serialize;
use std::time::Instant;

/// Descriptor plus the input size and per-stage timings.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    pub width: usize,
    pub height: usize,
    pub descriptor: Descriptor,
    pub timing: TimingBreakdown,
}

/// Same result as [`crate::hog::extract_descriptor`], with stage timings.
pub fn extract_with_report(img: ImageRgbU8<'_>, params: &HogParams) -> ExtractionReport {
    let mut timing = TimingBreakdown::default();

    let start = Instant::now();
    let field = compute_gradients_with_border(img, params.border);
    timing.push("gradient", start.elapsed().as_secs_f64() * 1000.0);

    let start = Instant::now();
    let descriptor = scan_tiles(&field, params);
    timing.push("scan", start.elapsed().as_secs_f64() * 1000.0);

    ExtractionReport {
        width: img.w,
        height: img.h,
        descriptor,
        timing,
    }
}
