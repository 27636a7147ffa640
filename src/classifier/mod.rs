//! Training and prediction on top of the descriptor pipeline.
//!
//! Overview
//! - [`HogClassifier`] owns the SVM backend, the block/cell geometry and the
//!   current trained model. There is no process-wide state: callers own the
//!   classifier and pass it where it is needed.
//! - Training validates every input before touching the model: non-empty
//!   lists, equal lengths, known labels, decodable images. A failed training
//!   call leaves any previous model in place.
//! - The kernel gamma is derived from the data as `1 / longest descriptor`
//!   and written into a copy of the caller's [`crate::svm::SvmParameters`].
//! - Prediction and classification require a trained model and fail with a
//!   precondition error otherwise.

mod label;
mod pipeline;

pub use label::Label;
pub use pipeline::{ClassificationReport, HogClassifier, TrainedModel};
