use crate::domain::model::ExportOptions;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based export configuration. Every key is optional; unset keys fall
/// back to whatever the caller already has (CLI flags or defaults).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub export: ExportSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    pub filename: Option<String>,
    pub include_metadata: Option<bool>,
    pub include_analysis: Option<bool>,
    pub add_timestamp: Option<bool>,
    pub pretty_print: Option<bool>,
    pub data_field: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Layers the file's settings over `base`; unset keys keep the base value.
    pub fn apply(&self, base: ExportOptions) -> ExportOptions {
        let section = &self.export;
        ExportOptions {
            filename: section.filename.clone().unwrap_or(base.filename),
            include_metadata: section.include_metadata.unwrap_or(base.include_metadata),
            include_analysis: section.include_analysis.unwrap_or(base.include_analysis),
            add_timestamp: section.add_timestamp.unwrap_or(base.add_timestamp),
            pretty_print: section.pretty_print.unwrap_or(base.pretty_print),
            data_field: section.data_field.clone().unwrap_or(base.data_field),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(filename) = &self.export.filename {
            validation::validate_non_empty_string("export.filename", filename)?;
        }
        if let Some(data_field) = &self.export.data_field {
            validation::validate_non_empty_string("export.data_field", data_field)?;
        }
        Ok(())
    }
}
