use anyhow::{Context, Result};
use clusterweight::{Dataset, RelevanceConfig};
use std::fs;
use std::path::Path;

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read dataset {:?}", path))?;
    serde_json::from_slice(&bytes).with_context(|| format!("Failed to parse dataset {:?}", path))
}

pub fn load_config(path: &Path) -> Result<RelevanceConfig> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read config {:?}", path))?;
    serde_json::from_slice(&bytes).with_context(|| format!("Failed to parse config {:?}", path))
}

pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    let json = serde_json::to_vec_pretty(dataset)?;
    fs::write(path, json).with_context(|| format!("Failed to write dataset {:?}", path))
}
