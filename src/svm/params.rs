//! Training configuration handed to the SVM backend.
//!
//! The value is immutable from the classifier's point of view: each training
//! call receives one and derives its own copy with the kernel gamma filled in
//! (see [`SvmParameters::with_gamma`]).
use serde::{Deserialize, Serialize};

/// SVM formulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SvmType {
    CSvc,
    NuSvc,
    #[default]
    OneClass,
    EpsilonSvr,
    NuSvr,
}

/// Kernel function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelType {
    Linear,
    Poly,
    #[default]
    Rbf,
    Sigmoid,
    Precomputed,
}

/// Hyperparameters for one training run. Opaque to the descriptor pipeline
/// apart from `gamma`, which training derives from the descriptor length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvmParameters {
    pub svm_type: SvmType,
    pub kernel_type: KernelType,
    /// Highest degree of a polynomial kernel.
    pub degree: i32,
    /// Kernel gamma (poly/rbf/sigmoid). Overwritten during training.
    pub gamma: f64,
    /// Kernel offset (poly/sigmoid).
    pub coef0: f64,
    /// Kernel cache size in MB.
    pub cache_size: f64,
    /// Stopping tolerance.
    pub eps: f64,
    /// Cost for C-SVC, epsilon-SVR and nu-SVR.
    pub c: f64,
    /// Labels with a per-class penalty weight (C-SVC).
    pub weight_labels: Vec<i32>,
    /// Penalty weights, parallel to `weight_labels`.
    pub weights: Vec<f64>,
    /// nu for nu-SVC, one-class and nu-SVR.
    pub nu: f64,
    /// Epsilon of the epsilon-SVR loss.
    pub p: f64,
    pub shrinking: bool,
    pub probability: bool,
}

impl Default for SvmParameters {
    fn default() -> Self {
        Self {
            svm_type: SvmType::OneClass,
            kernel_type: KernelType::Rbf,
            degree: 0,
            gamma: 0.0,
            coef0: 0.0,
            cache_size: 200.0,
            eps: 0.001,
            c: 0.1,
            weight_labels: Vec::new(),
            weights: Vec::new(),
            nu: 0.5,
            p: 0.0,
            shrinking: false,
            probability: false,
        }
    }
}

impl SvmParameters {
    /// Copy of `self` with the kernel gamma replaced.
    pub fn with_gamma(&self, gamma: f64) -> Self {
        Self {
            gamma,
            ..self.clone()
        }
    }

    /// Kernel gamma for a training set whose longest descriptor has
    /// `max_feature_count` entries: `1 / max_feature_count`.
    pub fn derived_gamma(max_feature_count: usize) -> Option<f64> {
        (max_feature_count > 0).then(|| 1.0 / max_feature_count as f64)
    }
}
