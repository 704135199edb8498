//! Configuration structures for the conversion pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConvertError, Result, ShipconvError};

/// Main configuration for shipconv.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipconvConfig {
    /// Conversion configuration.
    pub conversion: ConversionConfig,

    /// Output file configuration.
    pub output: OutputConfig,
}

/// Settings for the page-to-table conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Leading pages that never carry item data (the cover page).
    pub skip_leading_pages: usize,

    /// Token placed in front of every item description.
    pub description_prefix: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            skip_leading_pages: 1,
            description_prefix: "PHOTOMASK".to_string(),
        }
    }
}

impl ConversionConfig {
    pub fn validate(&self) -> std::result::Result<(), ConvertError> {
        if self.description_prefix.trim().is_empty() {
            return Err(ConvertError::InvalidConfig(
                "description_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Settings for the files written by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Worksheet name used for XLSX output.
    pub sheet_name: String,

    /// Default file name for XLSX output.
    pub file_name: String,

    /// Field delimiter for CSV output.
    pub csv_delimiter: char,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
            file_name: "Converted_Invoice.xlsx".to_string(),
            csv_delimiter: ',',
        }
    }
}

impl ShipconvConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ShipconvError::Config(format!("{}: {}", path.display(), e)))?;
        config.conversion.validate()?;
        if !config.output.csv_delimiter.is_ascii() {
            return Err(ShipconvError::Config(
                "csv_delimiter must be an ASCII character".to_string(),
            ));
        }
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShipconvConfig::default();
        assert_eq!(config.conversion.skip_leading_pages, 1);
        assert_eq!(config.conversion.description_prefix, "PHOTOMASK");
        assert_eq!(config.output.file_name, "Converted_Invoice.xlsx");
        assert_eq!(config.output.csv_delimiter, ',');
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output": {"sheet_name": "Items"}}"#).unwrap();

        let config = ShipconvConfig::from_file(&path).unwrap();
        assert_eq!(config.output.sheet_name, "Items");
        assert_eq!(config.output.csv_delimiter, ',');
        assert_eq!(config.conversion, ConversionConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ShipconvConfig::default();
        config.conversion.description_prefix = "RETICLE".to_string();
        config.save(&path).unwrap();

        assert_eq!(ShipconvConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"conversion": {"description_prefix": " "}}"#).unwrap();

        let err = ShipconvConfig::from_file(&path).unwrap_err();
        assert!(matches!(
            err,
            ShipconvError::Convert(ConvertError::InvalidConfig(_))
        ));
    }
}
