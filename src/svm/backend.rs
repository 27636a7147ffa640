use super::params::SvmParameters;
use crate::classifier::Label;
use crate::features::SparseFeatureVector;

/// One labelled training example.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingExample {
    pub features: SparseFeatureVector,
    pub label: Label,
}

/// Boundary to an external SVM implementation.
///
/// The classifier only hands over sparse feature vectors, labels and an
/// [`SvmParameters`] value. Validation messages from the backend are surfaced
/// verbatim as configuration errors.
pub trait SvmBackend {
    /// Trained model handle.
    type Model;

    /// Reject parameter combinations the backend cannot train with.
    fn check_parameters(
        &self,
        _examples: &[TrainingExample],
        _params: &SvmParameters,
    ) -> Result<(), String> {
        Ok(())
    }

    /// Train a model on `examples`, in the given order.
    fn train(
        &self,
        examples: &[TrainingExample],
        params: &SvmParameters,
    ) -> Result<Self::Model, String>;

    /// Predict the label of one feature vector.
    fn predict(&self, model: &Self::Model, features: &SparseFeatureVector) -> Label;
}
