use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::{info, debug};

use crate::utils::file_utils;
use super::api_model::ApiModel;

/// JSON storage for API models handed over by the parser
#[derive(Debug)]
pub struct ModelStorage {
    /// Path to the model file
    model_path: PathBuf,
}

impl ModelStorage {
    /// Create a new model storage with the given path
    pub fn new(model_path: impl AsRef<Path>) -> Self {
        Self {
            model_path: model_path.as_ref().to_path_buf(),
        }
    }
    
    /// Load and validate the model from disk
    pub fn load(&self) -> Result<ApiModel> {
        let path = &self.model_path;
        debug!("Loading model from {}", path.display());
        
        let content = file_utils::read_file_to_string(path)?;
        
        let mut model: ApiModel = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse model file {}", path.display()))?;
        
        if model.name.is_empty() {
            model.name = path.file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_default();
        }
        
        model.validate()
            .with_context(|| format!("Model file {} is inconsistent", path.display()))?;
        
        info!("Loaded model `{}` with {} classes", model.name, model.classes.len());
        Ok(model)
    }
    
    /// Save the model to disk
    pub fn save(&self, model: &ApiModel) -> Result<()> {
        let path = &self.model_path;
        debug!("Saving model to {}", path.display());
        
        let content = serde_json::to_string_pretty(model)
            .context("Failed to serialize model")?;
        
        file_utils::write_string_to_file(path, &content)?;
        
        info!("Saved model `{}` with {} classes", model.name, model.classes.len());
        Ok(())
    }
    
    /// Check if the model file exists
    pub fn exists(&self) -> bool {
        self.model_path.exists()
    }
    
    /// Get the path to the model file
    pub fn path(&self) -> &Path {
        &self.model_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use crate::model::{Method, QualifiedType, PrimitiveType};
    
    #[test]
    fn save_then_load_keeps_the_graph() -> Result<()> {
        let temp_dir = tempdir()?;
        let storage = ModelStorage::new(temp_dir.path().join("nested").join("widget.json"));
        
        let mut model = ApiModel::new("widget");
        let class = model.add_class("Widget");
        model.add_method(class, Method::new("getWidth", QualifiedType::builtin(PrimitiveType::Int)));
        
        storage.save(&model)?;
        assert!(storage.exists());
        
        let loaded = storage.load()?;
        assert_eq!(loaded, model);
        Ok(())
    }
    
    #[test]
    fn load_names_unnamed_models_after_the_file() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("gadget.json");
        std::fs::write(&path, r#"{ "classes": [ { "id": 0, "name": "Gadget" } ] }"#)?;
        
        let loaded = ModelStorage::new(&path).load()?;
        assert_eq!(loaded.name, "gadget");
        assert_eq!(loaded.classes[0].name, "Gadget");
        Ok(())
    }
    
    #[test]
    fn load_rejects_dangling_base() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, r#"{ "classes": [ { "id": 0, "name": "A", "bases": [ { "class": 4 } ] } ] }"#)?;
        
        assert!(ModelStorage::new(&path).load().is_err());
        Ok(())
    }
}
