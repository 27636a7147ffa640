use super::label::Label;
use crate::error::HogError;
use crate::features::SparseFeatureVector;
use crate::hog::{extract_batch, extract_descriptor, Descriptor, HogParams};
use crate::image::io::{load_rgb_image, RgbImageU8};
use crate::image::ImageRgbU8;
use crate::svm::{SvmBackend, SvmParameters, TrainingExample};
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// A trained backend model together with the configuration it was trained with.
#[derive(Clone, Debug)]
pub struct TrainedModel<M> {
    pub model: M,
    /// Caller parameters with the derived gamma filled in.
    pub parameters: SvmParameters,
    /// Length of the longest training descriptor.
    pub feature_count: usize,
    pub training_size: usize,
}

/// Outcome of classifying a labelled batch.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationReport {
    /// Predicted label per input, in input order.
    pub predicted: Vec<Label>,
    pub correct: usize,
    /// Share of correct predictions in percent.
    pub percent_correct: f32,
}

/// Owns the SVM backend, the descriptor geometry and the trained model.
pub struct HogClassifier<B: SvmBackend> {
    backend: B,
    params: HogParams,
    trained: Option<TrainedModel<B::Model>>,
}

impl<B: SvmBackend> HogClassifier<B> {
    /// Classifier with the default 6×6-cell blocks of 3×3-pixel cells.
    pub fn new(backend: B) -> Self {
        Self::with_params(backend, HogParams::default())
    }

    pub fn with_params(backend: B, params: HogParams) -> Self {
        Self {
            backend,
            params,
            trained: None,
        }
    }

    pub fn params(&self) -> &HogParams {
        &self.params
    }

    pub fn is_trained(&self) -> bool {
        self.trained.is_some()
    }

    pub fn trained_model(&self) -> Option<&TrainedModel<B::Model>> {
        self.trained.as_ref()
    }

    /// Drop the trained model, if any.
    pub fn reset(&mut self) {
        self.trained = None;
    }

    /// Train from image files and integer labels (`1` / `-1`).
    ///
    /// Every file is decoded and every label checked before the backend is
    /// involved; any failure aborts with the previous model intact.
    pub fn train<P: AsRef<Path> + Sync>(
        &mut self,
        paths: &[P],
        labels: &[i32],
        svm: &SvmParameters,
    ) -> Result<(), HogError> {
        check_counts(paths.len(), labels.len())?;
        let labels = Label::parse_all(labels)?;
        let images = load_images(paths)?;
        let views: Vec<ImageRgbU8<'_>> = images.iter().map(RgbImageU8::as_view).collect();
        self.train_images(&views, &labels, svm)
    }

    /// Train from decoded images.
    pub fn train_images(
        &mut self,
        images: &[ImageRgbU8<'_>],
        labels: &[Label],
        svm: &SvmParameters,
    ) -> Result<(), HogError> {
        check_counts(images.len(), labels.len())?;
        self.params.validate()?;

        let descriptors = extract_batch(images, &self.params);
        let feature_count = descriptors.iter().map(Descriptor::len).max().unwrap_or(0);
        let gamma = SvmParameters::derived_gamma(feature_count).ok_or(HogError::ImagesTooSmall)?;
        let parameters = svm.with_gamma(gamma);

        let examples: Vec<TrainingExample> = descriptors
            .iter()
            .zip(labels)
            .map(|(descriptor, &label)| TrainingExample {
                features: SparseFeatureVector::from(descriptor),
                label,
            })
            .collect();
        debug!(
            "HogClassifier::train examples={} feature_count={} gamma={:.6}",
            examples.len(),
            feature_count,
            gamma
        );

        self.backend
            .check_parameters(&examples, &parameters)
            .map_err(HogError::ConfigurationInvalid)?;
        let model = self
            .backend
            .train(&examples, &parameters)
            .map_err(HogError::ConfigurationInvalid)?;

        self.trained = Some(TrainedModel {
            model,
            parameters,
            feature_count,
            training_size: examples.len(),
        });
        Ok(())
    }

    /// Predict the label of one decoded image.
    pub fn predict(&self, image: ImageRgbU8<'_>) -> Result<Label, HogError> {
        let trained = self.trained.as_ref().ok_or(HogError::NotTrained)?;
        let features = SparseFeatureVector::from(&extract_descriptor(image, &self.params));
        Ok(self.backend.predict(&trained.model, &features))
    }

    /// Predict the label of one image file.
    pub fn predict_path(&self, path: &Path) -> Result<Label, HogError> {
        let image = load_rgb_image(path)?;
        self.predict(image.as_view())
    }

    /// Predict every file and score the predictions against `actual_labels`.
    ///
    /// Input validation (counts, labels, decoding) runs before the trained
    /// model is checked.
    pub fn classify<P: AsRef<Path> + Sync>(
        &self,
        paths: &[P],
        actual_labels: &[i32],
    ) -> Result<ClassificationReport, HogError> {
        check_counts(paths.len(), actual_labels.len())?;
        let actual = Label::parse_all(actual_labels)?;
        let images = load_images(paths)?;
        let views: Vec<ImageRgbU8<'_>> = images.iter().map(RgbImageU8::as_view).collect();
        self.classify_images(&views, &actual)
    }

    /// Predict every decoded image and score against `actual`.
    pub fn classify_images(
        &self,
        images: &[ImageRgbU8<'_>],
        actual: &[Label],
    ) -> Result<ClassificationReport, HogError> {
        check_counts(images.len(), actual.len())?;
        let trained = self.trained.as_ref().ok_or(HogError::NotTrained)?;

        let predicted: Vec<Label> = extract_batch(images, &self.params)
            .iter()
            .map(|descriptor| {
                self.backend
                    .predict(&trained.model, &SparseFeatureVector::from(descriptor))
            })
            .collect();
        let correct = predicted
            .iter()
            .zip(actual)
            .filter(|(p, a)| p == a)
            .count();
        let percent_correct = correct as f32 / predicted.len() as f32 * 100.0;
        debug!(
            "HogClassifier::classify {}/{} correct ({:.1}%)",
            correct,
            predicted.len(),
            percent_correct
        );
        Ok(ClassificationReport {
            predicted,
            correct,
            percent_correct,
        })
    }
}

fn check_counts(files: usize, labels: usize) -> Result<(), HogError> {
    if files == 0 {
        return Err(HogError::EmptyInput);
    }
    if files != labels {
        return Err(HogError::LabelCountMismatch { files, labels });
    }
    Ok(())
}

/// Decode every path; the first failure in input order is reported.
fn load_images<P: AsRef<Path> + Sync>(paths: &[P]) -> Result<Vec<RgbImageU8>, HogError> {
    #[cfg(feature = "parallel")]
    let decoded: Vec<Result<RgbImageU8, HogError>> = paths
        .par_iter()
        .map(|p| load_rgb_image(p.as_ref()))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let decoded: Vec<Result<RgbImageU8, HogError>> =
        paths.iter().map(|p| load_rgb_image(p.as_ref())).collect();
    decoded.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// Predicts positive when any feature is non-zero.
    struct EdgeBackend;

    impl SvmBackend for EdgeBackend {
        type Model = ();

        fn train(&self, _: &[TrainingExample], _: &SvmParameters) -> Result<(), String> {
            Ok(())
        }

        fn predict(&self, _: &(), features: &SparseFeatureVector) -> Label {
            Label::from_decision(features.len() as f64)
        }
    }

    fn striped(w: usize, h: usize) -> RgbImageU8 {
        let data = (0..w * h)
            .map(|p| if (p % w) % 4 < 2 { [0, 0, 0] } else { [255, 255, 255] })
            .collect();
        RgbImageU8::new(w, h, data)
    }

    #[test]
    fn count_checks() {
        assert_eq!(check_counts(0, 0).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert!(matches!(
            check_counts(2, 1),
            Err(HogError::LabelCountMismatch { files: 2, labels: 1 })
        ));
        assert!(check_counts(3, 3).is_ok());
    }

    #[test]
    fn train_then_classify_in_memory() {
        let flat = RgbImageU8::filled(36, 36, [10, 10, 10]);
        let stripes = striped(36, 36);
        let images = [stripes.as_view(), flat.as_view()];
        let labels = [Label::Positive, Label::Negative];

        let mut clf = HogClassifier::new(EdgeBackend);
        clf.train_images(&images, &labels, &SvmParameters::default())
            .unwrap();
        let trained = clf.trained_model().unwrap();
        assert_eq!(trained.feature_count, 36);
        assert_eq!(trained.parameters.gamma, 1.0 / 36.0);

        let report = clf.classify_images(&images, &labels).unwrap();
        assert_eq!(report.predicted, labels.to_vec());
        assert_eq!(report.percent_correct, 100.0);
    }

    #[test]
    fn overflowing_geometry_is_rejected_before_extraction() {
        let params = HogParams::new((usize::MAX / 2 + 2, 6), (2, 3));
        let mut clf = HogClassifier::with_params(EdgeBackend, params);
        assert_eq!(clf.params(), &params);

        let img = striped(40, 40);
        let err = clf
            .train_images(&[img.as_view()], &[Label::Positive], &SvmParameters::default())
            .unwrap_err();
        assert!(matches!(err, HogError::InvalidGeometry(_)), "{err}");
        assert!(!clf.is_trained());
    }

    #[test]
    fn predict_requires_training() {
        let clf = HogClassifier::new(EdgeBackend);
        let img = RgbImageU8::filled(18, 18, [0, 0, 0]);
        let err = clf.predict(img.as_view()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
    }
}
