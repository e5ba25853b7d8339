//! JSON run configuration for the command line.
//!
//! The generator itself takes explicit parameters; this is a convenience
//! wrapper so a fixed document list can live next to the docs it names.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;

/// Inputs and output of one generation run.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateConfig {
    /// Javadoc pages to scan, in emission order.
    pub inputs: Vec<PathBuf>,
    /// Path of the generated Java file.
    pub output: PathBuf,
}

impl GenerateConfig {
    /// Parse a config from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("failed to parse config: {e}"))
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let text = std::fs::read_to_string(path).map_err(|e| GenerateError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&text).map_err(|message| GenerateError::Config {
            path: path.to_path_buf(),
            message,
        })
    }
}
