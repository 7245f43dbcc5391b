use crate::config::toml_config::{categories_from_toml_table, substitute_env_vars};
use crate::core::{CategoryMap, CategorySource};
use crate::utils::error::{ExtractError, Result};
use crate::utils::validation::validate_file_extension;
use std::path::PathBuf;

/// 呼叫端自行提供的分類表
#[derive(Debug, Clone)]
pub struct StaticSource {
    categories: CategoryMap,
}

impl StaticSource {
    pub fn new(categories: CategoryMap) -> Self {
        Self { categories }
    }
}

impl CategorySource for StaticSource {
    fn load(&self) -> Result<CategoryMap> {
        Ok(self.categories.clone())
    }
}

/// Reads a category document from disk. `.json` files hold the map at the
/// root; `.toml` files hold it under `[categories]`, or at the root when that
/// table is absent.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_json(content: &str) -> Result<CategoryMap> {
        let document: serde_json::Value = serde_json::from_str(content)?;
        CategoryMap::from_json_value(&document)
    }

    fn load_toml(content: &str) -> Result<CategoryMap> {
        let table: toml::Table =
            toml::from_str(&substitute_env_vars(content)).map_err(|e| ExtractError::TomlError {
                message: format!("TOML parsing error: {}", e),
            })?;

        match table.get("categories") {
            Some(toml::Value::Table(categories)) => categories_from_toml_table(categories),
            _ => categories_from_toml_table(&table),
        }
    }
}

impl CategorySource for FileSource {
    fn load(&self) -> Result<CategoryMap> {
        let shown = self.path.display().to_string();
        validate_file_extension("input", &shown, &["json", "toml"])?;

        tracing::debug!("Reading categories from {}", shown);
        let content = std::fs::read_to_string(&self.path)?;

        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::load_toml(&content),
            _ => Self::load_json(&content),
        }
    }
}
