mod common;

use common::backends::{NearestNeighbour, Rejecting};
use common::synthetic_image::{checkerboard_rgb, textured, vertical_stripes, write_png};
use hog_detector::image::io::RgbImageU8;
use hog_detector::{ErrorKind, HogClassifier, HogError, HogParams, Label, SvmParameters};
use std::path::PathBuf;

fn trained_in_memory() -> HogClassifier<NearestNeighbour> {
    let stripes = vertical_stripes(36, 36, 6);
    let flat = RgbImageU8::filled(36, 36, [128, 128, 128]);
    let mut clf = HogClassifier::new(NearestNeighbour);
    clf.train_images(
        &[stripes.as_view(), flat.as_view()],
        &[Label::Positive, Label::Negative],
        &SvmParameters::default(),
    )
    .expect("training on synthetic images");
    clf
}

#[test]
fn training_with_no_files_is_invalid_input() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut clf = HogClassifier::new(NearestNeighbour);
    let paths: Vec<PathBuf> = Vec::new();
    let err = clf
        .train(&paths, &[], &SvmParameters::default())
        .unwrap_err();
    assert!(matches!(err, HogError::EmptyInput));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(!clf.is_trained());
}

#[test]
fn training_with_fewer_labels_than_files_is_invalid_input() {
    let mut clf = HogClassifier::new(NearestNeighbour);
    let paths = [PathBuf::from("a.png"), PathBuf::from("b.png")];
    let err = clf
        .train(&paths, &[1], &SvmParameters::default())
        .unwrap_err();
    assert!(matches!(
        err,
        HogError::LabelCountMismatch { files: 2, labels: 1 }
    ));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn training_with_unknown_label_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "a.png", &textured(18, 18, 0));
    let mut clf = HogClassifier::new(NearestNeighbour);
    let err = clf
        .train(&[path], &[0], &SvmParameters::default())
        .unwrap_err();
    assert!(matches!(err, HogError::InvalidLabel(0)));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn undecodable_image_aborts_without_touching_the_model() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_png(dir.path(), "good.png", &textured(36, 36, 2));
    let bad = dir.path().join("missing.png");

    let mut clf = trained_in_memory();
    let err = clf
        .train(&[good, bad], &[1, -1], &SvmParameters::default())
        .unwrap_err();
    assert!(matches!(err, HogError::ImageDecode { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let trained = clf.trained_model().expect("previous model kept");
    assert_eq!(trained.training_size, 2);
}

#[test]
fn classifying_before_training_is_a_precondition_violation() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "img.png", &checkerboard_rgb(36, 36, 6));
    let clf = HogClassifier::new(NearestNeighbour);

    let err = clf.classify(&[path.clone()], &[1]).unwrap_err();
    assert!(matches!(err, HogError::NotTrained));
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);

    let err = clf.predict_path(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PreconditionViolation);
}

#[test]
fn classify_checks_inputs_before_the_model() {
    let clf = HogClassifier::new(NearestNeighbour);
    let paths: Vec<PathBuf> = Vec::new();
    assert_eq!(
        clf.classify(&paths, &[]).unwrap_err().kind(),
        ErrorKind::InvalidInput
    );
}

#[test]
fn rejected_configuration_is_surfaced_verbatim() {
    let img = textured(36, 36, 4);
    let mut clf = HogClassifier::new(Rejecting("nu <= 0 or nu > 1"));
    let err = clf
        .train_images(&[img.as_view()], &[Label::Positive], &SvmParameters::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigurationInvalid);
    match err {
        HogError::ConfigurationInvalid(msg) => assert_eq!(msg, "nu <= 0 or nu > 1"),
        other => panic!("unexpected error {other:?}"),
    }
    assert!(!clf.is_trained());
}

#[test]
fn gamma_is_inverse_of_longest_descriptor() {
    let small = textured(18, 18, 1); // 1 tile
    let large = textured(54, 36, 2); // 3 x 2 tiles
    let mut clf = HogClassifier::new(NearestNeighbour);
    let caller_params = SvmParameters {
        gamma: 7.0,
        ..SvmParameters::default()
    };
    clf.train_images(
        &[small.as_view(), large.as_view()],
        &[Label::Negative, Label::Positive],
        &caller_params,
    )
    .unwrap();

    let trained = clf.trained_model().unwrap();
    assert_eq!(trained.feature_count, 54);
    assert_eq!(trained.parameters.gamma, 1.0 / 54.0);
    assert_eq!(trained.model.parameters.gamma, 1.0 / 54.0);
    assert_eq!(caller_params.gamma, 7.0);
}

#[test]
fn training_examples_keep_label_order() {
    let images: Vec<RgbImageU8> = (0..5).map(|i| textured(36, 18 * (i + 1), i)).collect();
    let views: Vec<_> = images.iter().map(|img| img.as_view()).collect();
    let labels = [
        Label::Positive,
        Label::Negative,
        Label::Negative,
        Label::Positive,
        Label::Negative,
    ];
    let mut clf = HogClassifier::new(NearestNeighbour);
    clf.train_images(&views, &labels, &SvmParameters::default())
        .unwrap();

    let stored = &clf.trained_model().unwrap().model.examples;
    for (i, example) in stored.iter().enumerate() {
        assert_eq!(example.label, labels[i]);
        // i + 1 tile rows of 2 tiles each
        assert_eq!(example.features.dense_len(), 2 * (i + 1) * 9);
    }
}

#[test]
fn all_images_below_one_block_are_rejected() {
    let img = textured(10, 10, 0);
    let mut clf = HogClassifier::new(NearestNeighbour);
    let err = clf
        .train_images(&[img.as_view()], &[Label::Positive], &SvmParameters::default())
        .unwrap_err();
    assert!(matches!(err, HogError::ImagesTooSmall));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn invalid_geometry_is_rejected_before_training() {
    let img = textured(36, 36, 0);
    let mut clf = HogClassifier::with_params(NearestNeighbour, HogParams::new((6, 6), (0, 3)));
    let err = clf
        .train_images(&[img.as_view()], &[Label::Positive], &SvmParameters::default())
        .unwrap_err();
    assert!(matches!(err, HogError::InvalidGeometry(_)));
}

#[test]
fn train_and_classify_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let positives: Vec<PathBuf> = (0..2)
        .map(|i| {
            write_png(
                dir.path(),
                &format!("pos{i}.png"),
                &vertical_stripes(36, 36, 6 + 2 * i),
            )
        })
        .collect();
    let negative = write_png(
        dir.path(),
        "neg.png",
        &RgbImageU8::filled(36, 36, [10, 200, 30]),
    );
    let paths = [positives[0].clone(), positives[1].clone(), negative];
    let labels = [1, 1, -1];

    let mut clf = HogClassifier::new(NearestNeighbour);
    clf.train(&paths, &labels, &SvmParameters::default())
        .unwrap();

    let report = clf.classify(&paths, &labels).unwrap();
    assert_eq!(
        report.predicted,
        vec![Label::Positive, Label::Positive, Label::Negative]
    );
    assert_eq!(report.correct, 3);
    assert_eq!(report.percent_correct, 100.0);
    assert_eq!(clf.predict_path(&paths[2]).unwrap(), Label::Negative);
}

#[test]
fn classify_reports_percentage_of_matches() {
    let clf = trained_in_memory();
    let stripes = vertical_stripes(36, 36, 6);
    let flat = RgbImageU8::filled(36, 36, [128, 128, 128]);
    let report = clf
        .classify_images(
            &[stripes.as_view(), flat.as_view()],
            &[Label::Negative, Label::Negative],
        )
        .unwrap();
    assert_eq!(report.predicted, vec![Label::Positive, Label::Negative]);
    assert_eq!(report.correct, 1);
    assert_eq!(report.percent_correct, 50.0);
}

#[test]
fn reset_drops_the_model() {
    let mut clf = trained_in_memory();
    let img = RgbImageU8::filled(36, 36, [0, 0, 0]);
    assert_eq!(clf.predict(img.as_view()).unwrap(), Label::Negative);

    clf.reset();
    assert_eq!(
        clf.predict(img.as_view()).unwrap_err().kind(),
        ErrorKind::PreconditionViolation
    );
}
