use crate::hog::HogParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ExtractToolConfig {
    /// Images to describe, in output order.
    pub inputs: Vec<PathBuf>,
    #[serde(default)]
    pub hog: HogParams,
    /// Also emit the sparse (index, value) encoding of each descriptor.
    #[serde(default)]
    pub sparse: bool,
    pub output: ExtractOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ExtractOutputConfig {
    pub descriptors_json: PathBuf,
    /// Include per-stage timings in the summary.
    #[serde(default)]
    pub timing: bool,
}

pub fn load_config(path: &Path) -> Result<ExtractToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Invalid config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<ExtractToolConfig, String> {
    let config: ExtractToolConfig = serde_json::from_str(data).map_err(|e| e.to_string())?;
    config.hog.validate().map_err(|e| e.to_string())?;
    Ok(config)
}
