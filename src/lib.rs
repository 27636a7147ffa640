#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod classifier;
pub mod error;
pub mod features;
pub mod hog;
pub mod image;
pub mod svm;

// Building blocks and tooling support.
pub mod angle;
pub mod config;
pub mod diagnostics;
pub mod gradient;

// --- High-level re-exports -------------------------------------------------

// Descriptor extraction.
pub use crate::hog::{extract_batch, extract_descriptor, Descriptor, HogParams};

// Classifier boundary.
pub use crate::classifier::{ClassificationReport, HogClassifier, Label};
pub use crate::features::SparseFeatureVector;
pub use crate::svm::{SvmBackend, SvmParameters};

pub use crate::error::{ErrorKind, HogError};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hog_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (64usize, 128usize);
/// let pixels = vec![[0u8; 3]; w * h];
/// let img = ImageRgbU8::packed(w, h, &pixels);
///
/// let descriptor = extract_descriptor(img, &HogParams::default());
/// let sparse = SparseFeatureVector::from(&descriptor);
/// println!("len={} non_zero={}", descriptor.len(), sparse.len());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgbU8;
    pub use crate::{extract_descriptor, Descriptor, HogParams, SparseFeatureVector};
    pub use crate::{HogClassifier, Label, SvmBackend, SvmParameters};
}
