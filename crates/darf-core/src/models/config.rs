//! Configuration structures for the DARF pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for the darf pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DarfConfig {
    /// Folder layout.
    pub paths: PathsConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Spreadsheet output configuration.
    pub output: OutputConfig,
}

/// Where input documents live and where the spreadsheet is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Base folder holding both the input folder and the spreadsheet.
    pub base_dir: PathBuf,

    /// Name of the input folder inside `base_dir`.
    pub input_dir: String,

    /// File name of the spreadsheet inside `base_dir`.
    pub output_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            input_dir: "Darf".to_string(),
            output_file: "Dados Darf.xlsx".to_string(),
        }
    }
}

fn default_base_dir() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Info Darf")
    } else {
        PathBuf::from("Info Darf")
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// File extension of input documents, compared case-insensitively.
    pub document_extension: String,

    /// Log the full extracted text of every document at debug level.
    pub log_text: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            document_extension: "pdf".to_string(),
            log_text: true,
        }
    }
}

/// Spreadsheet output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Worksheet name.
    pub sheet_name: String,

    /// Write parseable amounts as numbers and dates as Excel dates
    /// instead of the raw extracted strings.
    pub typed_cells: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sheet_name: "DARF Data".to_string(),
            typed_cells: false,
        }
    }
}

impl DarfConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Full path of the input folder.
    pub fn input_dir(&self) -> PathBuf {
        self.paths.base_dir.join(&self.paths.input_dir)
    }

    /// Full path of the output spreadsheet.
    pub fn output_path(&self) -> PathBuf {
        self.paths.base_dir.join(&self.paths.output_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_paths() {
        let mut config = DarfConfig::default();
        config.paths.base_dir = PathBuf::from("base");

        assert_eq!(config.input_dir(), PathBuf::from("base").join("Darf"));
        assert_eq!(config.output_path(), PathBuf::from("base").join("Dados Darf.xlsx"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: DarfConfig =
            serde_json::from_str(r#"{"output": {"typed_cells": true}}"#).unwrap();

        assert!(config.output.typed_cells);
        assert_eq!(config.output.sheet_name, "DARF Data");
        assert_eq!(config.extraction.document_extension, "pdf");
        assert_eq!(config.paths.input_dir, "Darf");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = DarfConfig::default();
        config.paths.base_dir = dir.path().to_path_buf();
        config.extraction.log_text = false;
        config.save(&path).unwrap();

        let loaded = DarfConfig::from_file(&path).unwrap();
        assert_eq!(loaded.paths.base_dir, dir.path());
        assert!(!loaded.extraction.log_text);
    }
}
