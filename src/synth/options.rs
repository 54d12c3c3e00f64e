use std::path::Path;
use anyhow::{Result, Context};
use serde::{Serialize, Deserialize};

use crate::error::SynthError;
use crate::utils::file_utils;

/// Options of the synthesis pass itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassOptions {
    /// Reject getter-only candidates whose name reads like an action
    pub use_heuristics: bool,
}

impl Default for PassOptions {
    fn default() -> Self {
        Self {
            use_heuristics: true,
        }
    }
}

/// Options of a batch run over model files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    /// Maximum number of model files to process
    pub max_files: Option<usize>,
    
    /// Number of parallel threads to use
    pub parallel_threads: Option<usize>,
    
    /// Whether to log every failing file in detail
    pub verbose_errors: bool,
}

/// Full configuration file layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub synthesis: PassOptions,
    pub run: RunOptions,
}

impl Config {
    /// Parse a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self, SynthError> {
        Ok(toml::from_str(content)?)
    }
    
    /// Read and parse a TOML configuration file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = file_utils::read_file_to_string(path)?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load configuration {}", path.display()))
    }
}
