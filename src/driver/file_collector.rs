use std::path::{Path, PathBuf};
use anyhow::Result;
use log::{debug, trace};
use walkdir::WalkDir;

use crate::utils::file_utils;

/// File collector for finding model files
#[derive(Debug, Default)]
pub struct FileCollector {
    /// Valid file extensions to collect
    valid_extensions: Vec<String>,
}

impl FileCollector {
    /// Create a new file collector accepting JSON models
    pub fn new() -> Self {
        Self {
            valid_extensions: vec!["json".to_string()],
        }
    }
    
    /// Create a new file collector with custom file extensions
    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self {
            valid_extensions: extensions,
        }
    }
    
    /// Collect model files from `input`, which may be a single file or a directory
    pub fn collect_files(&self, input: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let input = input.as_ref();
        if input.is_file() {
            return Ok(vec![input.to_path_buf()]);
        }
        debug!("Collecting files from directory: {}", input.display());
        
        let mut files = Vec::new();
        for entry in WalkDir::new(input)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if self.valid_extensions.iter().any(|ext| file_utils::has_extension(entry.path(), ext)) {
                trace!("Found file: {}", entry.path().display());
                files.push(entry.path().to_owned());
            }
        }
        
        debug!("Collected {} files for processing", files.len());
        Ok(files)
    }
    
    /// Get the list of valid file extensions
    pub fn extensions(&self) -> &[String] {
        &self.valid_extensions
    }
}
