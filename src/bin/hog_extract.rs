use hog_detector::config::load_config;
use hog_detector::diagnostics::{extract_with_report, TimingBreakdown};
use hog_detector::features::{FeatureNode, SparseFeatureVector};
use hog_detector::hog::{Descriptor, HogParams};
use hog_detector::image::io::{load_rgb_image, write_json_file};
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut entries = Vec::with_capacity(config.inputs.len());
    for input in &config.inputs {
        let image = load_rgb_image(input).map_err(|e| e.to_string())?;
        let report = extract_with_report(image.as_view(), &config.hog);
        let sparse = config
            .sparse
            .then(|| SparseFeatureVector::from(&report.descriptor).nodes().to_vec());
        entries.push(DescriptorEntry {
            path: input.clone(),
            width: report.width,
            height: report.height,
            descriptor: report.descriptor,
            sparse,
            timing: config.output.timing.then_some(report.timing),
        });
    }

    let summary = ExtractionSummary {
        params: config.hog,
        image_count: entries.len(),
        images: entries,
    };
    write_json_file(&config.output.descriptors_json, &summary)?;

    for entry in &summary.images {
        println!(
            "{}: {}x{} -> {} tiles, {} values",
            entry.path.display(),
            entry.width,
            entry.height,
            entry.descriptor.tile_count(),
            entry.descriptor.len()
        );
    }
    println!(
        "Saved {} descriptors to {}",
        summary.image_count,
        config.output.descriptors_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: hog_extract <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DescriptorEntry {
    path: PathBuf,
    width: usize,
    height: usize,
    descriptor: Descriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    sparse: Option<Vec<FeatureNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timing: Option<TimingBreakdown>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtractionSummary {
    params: HogParams,
    image_count: usize,
    images: Vec<DescriptorEntry>,
}
