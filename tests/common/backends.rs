use hog_detector::svm::{SvmBackend, SvmParameters, TrainingExample};
use hog_detector::{Label, SparseFeatureVector};

/// Stores the training set and predicts the label of the nearest example (L1).
pub struct NearestNeighbour;

pub struct StoredModel {
    pub examples: Vec<TrainingExample>,
    pub parameters: SvmParameters,
}

impl SvmBackend for NearestNeighbour {
    type Model = StoredModel;

    fn train(
        &self,
        examples: &[TrainingExample],
        params: &SvmParameters,
    ) -> Result<StoredModel, String> {
        Ok(StoredModel {
            examples: examples.to_vec(),
            parameters: params.clone(),
        })
    }

    fn predict(&self, model: &StoredModel, features: &SparseFeatureVector) -> Label {
        let query = features.to_dense();
        model
            .examples
            .iter()
            .map(|ex| (l1(&query, &ex.features.to_dense()), ex.label))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map_or(Label::Negative, |(_, label)| label)
    }
}

fn l1(a: &[f32], b: &[f32]) -> f32 {
    let n = a.len().max(b.len());
    (0..n)
        .map(|i| (a.get(i).copied().unwrap_or(0.0) - b.get(i).copied().unwrap_or(0.0)).abs())
        .sum()
}

/// Rejects every configuration with a fixed message.
pub struct Rejecting(pub &'static str);

impl SvmBackend for Rejecting {
    type Model = ();

    fn check_parameters(&self, _: &[TrainingExample], _: &SvmParameters) -> Result<(), String> {
        Err(self.0.to_string())
    }

    fn train(&self, _: &[TrainingExample], _: &SvmParameters) -> Result<(), String> {
        Ok(())
    }

    fn predict(&self, _: &(), _: &SparseFeatureVector) -> Label {
        Label::Negative
    }
}
