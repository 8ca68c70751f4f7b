//! Configuration models and loaders for propellant catalogs and transfer scenarios.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Propellant catalog record parsed from YAML or TOML.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PropellantConfig {
    pub name: String,
    pub isp_seconds: f64,
    pub price_usd_per_kg: f64,
}

/// A complete transfer scenario, usable in place of interactive prompts.
///
/// Radii are measured from the centre of the Earth, in metres.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub initial_radius_m: f64,
    pub target_radius_m: f64,
    pub dry_mass_kg: f64,
    #[serde(default)]
    pub budget_usd: Option<f64>,
    #[serde(default)]
    pub top_ups_usd: Vec<f64>,
    /// Index of the propellant to buy once the budget allows it.
    #[serde(default)]
    pub selection: Option<usize>,
    /// Alternative propellant catalog, relative to the working directory.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load propellant records from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_propellants<P: AsRef<Path>>(path: P) -> Result<Vec<PropellantConfig>, ConfigError> {
    load_records(path)
}

/// Load a transfer scenario from a YAML or TOML file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    // file names carry the catalog order
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
