//! Configuration handling for retab.
//! This module provides functionality for loading the optional tool
//! configuration file placed at the root of the templates tree.

use crate::constants::{CONFIG_FILES, TEMPLATES_DIR, VARIANT_DIR};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Tool configuration. Every field has a default so the tool runs without
/// any configuration file present.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory under the root holding one subdirectory per template
    pub templates_dir: String,

    /// Variant subdirectory inside each template that gets repaired
    pub variant_dir: String,

    /// Extra glob patterns to exclude from processing.
    /// These extend the built-in exclusions, they never replace them.
    pub ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: TEMPLATES_DIR.to_string(),
            variant_dir: VARIANT_DIR.to_string(),
            ignore: Vec::new(),
        }
    }
}

/// Loads configuration from the root directory, trying multiple file formats.
/// Supports: retab.json, retab.yml, retab.yaml
///
/// # Arguments
/// * `root` - Root directory that may contain a configuration file
///
/// # Returns
/// * `Result<Config>` - Parsed configuration, or defaults when no file exists
///
/// # Errors
/// * `Error::ConfigError` if a file exists but cannot be parsed
pub fn get_config<P: AsRef<Path>>(root: P) -> Result<Config> {
    for file in CONFIG_FILES {
        let config_path = root.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            let content =
                std::fs::read_to_string(&config_path).map_err(Error::IoError)?;

            // Try parsing as JSON first, fall back to YAML
            let config = match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(_) => serde_yaml::from_str(&content).map_err(|e| {
                    Error::ConfigError(format!("Invalid configuration format: {}", e))
                })?,
            };
            return Ok(config);
        }
    }

    debug!("No configuration file found (tried: {}), using defaults", CONFIG_FILES.join(", "));
    Ok(Config::default())
}
