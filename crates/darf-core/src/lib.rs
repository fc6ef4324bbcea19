//! Core library for DARF tax slip processing.
//!
//! This crate provides:
//! - PDF text extraction
//! - DARF field extraction (amounts, CNPJ, revenue code, dates)
//! - A tabular output model with per-row formula cells, written as `.xlsx`
//! - Workspace setup and the batch aggregator that ties it together

pub mod error;
pub mod models;
pub mod pdf;
pub mod darf;
pub mod sheet;
pub mod workspace;
pub mod batch;

pub use error::{DarfError, Result};
pub use models::config::DarfConfig;
pub use models::darf::{DarfAmounts, DarfLayout, DarfRecord};
pub use pdf::{DocumentSource, PdfExtractor, PdfProcessor, PdfSource};
pub use darf::{DarfExtractor, DarfParser, ExtractionResult};
pub use sheet::{CellValue, OutputTable, SumFormula};
pub use workspace::{Workspace, WorkspacePaths};
pub use batch::{Aggregator, BatchSummary};
