//! Error types surfaced by descriptor extraction and the classifier.
//!
//! Every failure belongs to one of three kinds (see [`ErrorKind`]) so callers
//! can tell bad arguments apart from a wrong call order or a rejected
//! classifier configuration. Nothing here is retried: the pipeline is
//! deterministic and the same input reproduces the same error.
use std::path::PathBuf;

/// Coarse classification of a [`HogError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty or mismatched inputs, unknown labels, undecodable images, bad geometry.
    InvalidInput,
    /// An operation that needs a trained model was called without one.
    PreconditionViolation,
    /// The SVM backend rejected the derived training configuration.
    ConfigurationInvalid,
}

#[derive(Debug, thiserror::Error)]
pub enum HogError {
    #[error("At least one image is required")]
    EmptyInput,
    #[error("Number of labels ({labels}) must equal number of images ({files})")]
    LabelCountMismatch { files: usize, labels: usize },
    #[error("Invalid label {0}: expected 1 or -1")]
    InvalidLabel(i32),
    #[error("Failed to load image {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Invalid block/cell geometry: {0}")]
    InvalidGeometry(String),
    #[error("Invalid sparse feature vector: {0}")]
    InvalidFeatureVector(String),
    #[error("No training image is large enough to hold a single block")]
    ImagesTooSmall,
    #[error("Model not trained")]
    NotTrained,
    #[error("Error checking parameters: {0}")]
    ConfigurationInvalid(String),
}

impl HogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HogError::EmptyInput
            | HogError::LabelCountMismatch { .. }
            | HogError::InvalidLabel(_)
            | HogError::ImageDecode { .. }
            | HogError::InvalidGeometry(_)
            | HogError::InvalidFeatureVector(_)
            | HogError::ImagesTooSmall => ErrorKind::InvalidInput,
            HogError::NotTrained => ErrorKind::PreconditionViolation,
            HogError::ConfigurationInvalid(_) => ErrorKind::ConfigurationInvalid,
        }
    }
}
