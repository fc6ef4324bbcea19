//! Folder and spreadsheet setup before a batch run.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::config::DarfConfig;
use crate::sheet::{write_table, OutputTable};

/// Resolved locations of a prepared workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePaths {
    /// Folder scanned for documents.
    pub input_dir: PathBuf,
    /// Spreadsheet written by the batch.
    pub output_path: PathBuf,
}

/// Creates the configured folders and seeds the spreadsheet.
pub struct Workspace<'a> {
    config: &'a DarfConfig,
}

impl<'a> Workspace<'a> {
    pub fn new(config: &'a DarfConfig) -> Self {
        Self { config }
    }

    /// Create missing folders and, if the spreadsheet does not exist yet,
    /// write one holding only the setup header.
    ///
    /// An existing spreadsheet is left untouched.
    pub fn prepare(&self) -> Result<WorkspacePaths> {
        let base_dir = &self.config.paths.base_dir;
        let input_dir = self.config.input_dir();
        let output_path = self.config.output_path();

        if !base_dir.exists() {
            fs::create_dir_all(base_dir)?;
            info!("Created folder: {}", base_dir.display());
        }
        if !input_dir.exists() {
            fs::create_dir_all(&input_dir)?;
            debug!("Created folder: {}", input_dir.display());
        }

        if !output_path.exists() {
            write_table(&OutputTable::setup(), &output_path, &self.config.output)?;
            info!("Created spreadsheet: {}", output_path.display());
        }

        Ok(WorkspacePaths {
            input_dir,
            output_path,
        })
    }
}
