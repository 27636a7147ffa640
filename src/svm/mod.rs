//! Boundary types for the external SVM collaborator.

pub mod backend;
pub mod params;

pub use backend::{SvmBackend, TrainingExample};
pub use params::{KernelType, SvmParameters, SvmType};
