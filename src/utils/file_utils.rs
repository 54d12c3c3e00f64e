use std::path::{Path, PathBuf};
use std::fs;
use anyhow::{Result, Context};
use log::trace;

/// Create `dir` along with any missing parents
pub fn ensure_dir_exists(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    trace!("Ensuring directory {}", dir.display());
    fs::create_dir_all(dir).with_context(|| format!("Cannot create directory {}", dir.display()))
}

/// Check if a file has a specific extension
pub fn has_extension(path: impl AsRef<Path>, extension: &str) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Read a model or configuration file
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    trace!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Write a string to a file, creating parent directories as needed
pub fn write_string_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    
    fs::write(path, content)
        .with_context(|| format!("Failed to write file {}", path.display()))
}

/// Path of `file` relocated into `output_dir`, keeping its place below `input_root`.
///
/// Files outside `input_root` keep only their file name.
pub fn output_path_for(file: impl AsRef<Path>, input_root: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> PathBuf {
    let file = file.as_ref();
    match file.strip_prefix(input_root) {
        Ok(relative) if relative.file_name().is_some() => output_dir.as_ref().join(relative),
        _ => {
            let file_name = file.file_name().map(|n| n.to_os_string()).unwrap_or_else(|| "model.json".into());
            output_dir.as_ref().join(file_name)
        }
    }
}
