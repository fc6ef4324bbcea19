//! Batch aggregation: every document in a folder becomes one spreadsheet row.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, info, warn};

use crate::darf::DarfExtractor;
use crate::error::Result;
use crate::models::config::DarfConfig;
use crate::models::darf::DarfRecord;
use crate::pdf::DocumentSource;
use crate::sheet::{write_table, OutputTable};

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents found in the input folder.
    pub documents: usize,
    /// Rows appended to the table.
    pub rows_written: usize,
    /// Documents that could not be read.
    pub failed: Vec<PathBuf>,
}

/// Builds the report table from a folder of documents and saves it.
pub struct Aggregator<'a, S> {
    extractor: DarfExtractor<S>,
    config: &'a DarfConfig,
}

impl<'a, S: DocumentSource> Aggregator<'a, S> {
    pub fn new(source: S, config: &'a DarfConfig) -> Self {
        Self {
            extractor: DarfExtractor::new(source).with_text_logging(config.extraction.log_text),
            config,
        }
    }

    /// Files in `dir` ending in the document extension, any case, sorted.
    pub fn find_documents(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let pattern = Pattern::new(&format!(
            "*.{}",
            Pattern::escape(&self.config.extraction.document_extension)
        ))?;
        let options = MatchOptions {
            case_sensitive: false,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            let name = entry.file_name();
            match name.to_str() {
                Some(name) if pattern.matches_with(name, options) => files.push(entry.path()),
                Some(_) => {}
                None => warn!("Skipping non UTF-8 file name {}", entry.path().display()),
            }
        }
        files.sort();

        debug!("Found {} documents in {}", files.len(), dir.display());
        Ok(files)
    }

    /// Extract every document in `dir` into a fresh report table.
    ///
    /// `on_document` is called once per document with the record, or
    /// `None` when the document was skipped.
    pub fn build_table_with<F>(&self, dir: &Path, on_document: F) -> Result<(OutputTable, BatchSummary)>
    where
        F: FnMut(&Path, Option<&DarfRecord>),
    {
        let files = self.find_documents(dir)?;
        Ok(self.tabulate(&files, on_document))
    }

    /// Extract the given documents, in order, into a fresh report table.
    pub fn tabulate<F>(&self, files: &[PathBuf], mut on_document: F) -> (OutputTable, BatchSummary)
    where
        F: FnMut(&Path, Option<&DarfRecord>),
    {
        let mut table = OutputTable::report();
        let mut summary = BatchSummary {
            documents: files.len(),
            ..Default::default()
        };

        for path in files {
            info!("Processing: {}", path.display());

            match self.extractor.extract_or_log(path) {
                Some(record) => {
                    let row = table.append_record(&record);
                    debug!("Row {} <- {}", row, path.display());
                    summary.rows_written += 1;
                    on_document(path, Some(&record));
                }
                None => {
                    summary.failed.push(path.clone());
                    on_document(path, None);
                }
            }
        }

        (table, summary)
    }

    /// Extract every document in `dir` into a fresh report table.
    pub fn build_table(&self, dir: &Path) -> Result<(OutputTable, BatchSummary)> {
        self.build_table_with(dir, |_, _| {})
    }

    /// Build the table and write it to `output`, replacing any existing file.
    pub fn run(&self, dir: &Path, output: &Path) -> Result<BatchSummary> {
        let (table, summary) = self.build_table(dir)?;
        self.save(&table, output)?;
        Ok(summary)
    }

    /// Write a built table with the configured output options.
    pub fn save(&self, table: &OutputTable, output: &Path) -> Result<()> {
        write_table(table, output, &self.config.output)?;
        info!("Exported {} rows to {}", table.len(), output.display());
        Ok(())
    }
}
