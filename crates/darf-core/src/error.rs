//! Error types for the darf-core library.

use thiserror::Error;

/// Main error type for the darf library.
#[derive(Error, Debug)]
pub enum DarfError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Spreadsheet write error.
    #[error("spreadsheet error: {0}")]
    Sheet(#[from] rust_xlsxwriter::XlsxError),

    /// Directory scan error.
    #[error("invalid scan pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the darf library.
pub type Result<T> = std::result::Result<T, DarfError>;
