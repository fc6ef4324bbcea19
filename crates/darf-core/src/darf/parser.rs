//! DARF parser and the document-level extractor built on it.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::darf::DarfRecord;
use crate::pdf::DocumentSource;

use super::rules::{extract_amounts, extract_cnpj, extract_dates, extract_revenue_code, validate_cnpj};

/// Result of DARF extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted fields.
    pub record: DarfRecord,
    /// Extraction warnings.
    pub warnings: Vec<String>,
}

/// Rule-based DARF parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct DarfParser;

impl DarfParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse DARF fields from plain text.
    ///
    /// Never fails: fields that do not match are left absent.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        let mut warnings = Vec::new();

        let amounts = extract_amounts(text);
        if amounts.layout.is_none() {
            warnings.push("No known amount layout matched".to_string());
        }

        let dates = extract_dates(text);
        let cnpj = extract_cnpj(text);
        let revenue_code = extract_revenue_code(text);

        if let Some(cnpj) = &cnpj {
            if !validate_cnpj(cnpj) {
                warnings.push(format!("CNPJ {} has invalid check digits", cnpj));
            }
        }

        let record = DarfRecord {
            period: dates.period,
            cnpj,
            revenue_code,
            due_date: dates.due_date,
            amounts: amounts.amounts,
            layout: amounts.layout,
        };

        for field in record.missing_fields() {
            warnings.push(format!("Could not extract {}", field));
        }

        debug!(
            "Extracted DARF: layout={:?}, cnpj={:?}, period={:?}, {} warnings",
            record.layout,
            record.cnpj,
            record.period,
            warnings.len()
        );

        ExtractionResult {
            record,
            warnings,
        }
    }
}

/// Reads documents through a [`DocumentSource`] and parses them.
pub struct DarfExtractor<S> {
    source: S,
    parser: DarfParser,
    log_text: bool,
}

impl<S: DocumentSource> DarfExtractor<S> {
    /// Create an extractor over a document source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            parser: DarfParser::new(),
            log_text: true,
        }
    }

    /// Set whether the extracted text is logged at debug level.
    pub fn with_text_logging(mut self, log_text: bool) -> Self {
        self.log_text = log_text;
        self
    }

    /// Read and parse one document.
    pub fn extract_file(&self, path: &Path) -> Result<ExtractionResult> {
        let text = self.source.read_text(path)?;

        if self.log_text {
            let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            debug!("Text extracted from {}:\n{}", name, text);
        }

        Ok(self.parser.parse(&text))
    }

    /// Read and parse one document, logging and swallowing any failure.
    pub fn extract_or_log(&self, path: &Path) -> Option<DarfRecord> {
        match self.extract_file(path) {
            Ok(result) => Some(result.record),
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;
    use crate::models::darf::DarfLayout;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "MINISTÉRIO DA FAZENDA\n\
        Documento de Arrecadação de Receitas Federais\n\
        10/01/2024\n\
        12.345.678/0001-99\n\
        1234\n\
        AUTENTICAÇÃO BANCÁRIA\n\
        1.000,00\n\
        50,00\n\
        10,00\n\
        Pagamento em qualquer agência\n\
        ATENÇÃO\n\
        Valor total\n\
        2.000,00\n\
        20/01/2024\n";

    struct StaticSource(&'static str);

    impl DocumentSource for StaticSource {
        fn read_text(&self, _path: &Path) -> crate::pdf::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSource;

    impl DocumentSource for FailingSource {
        fn read_text(&self, _path: &Path) -> crate::pdf::Result<String> {
            Err(PdfError::NoPages)
        }
    }

    #[test]
    fn test_parse_sample() {
        let result = DarfParser::new().parse(SAMPLE);
        let record = result.record;

        assert_eq!(record.period.as_deref(), Some("20/01/2024"));
        assert_eq!(record.cnpj.as_deref(), Some("12.345.678/0001-99"));
        assert_eq!(record.revenue_code.as_deref(), Some("1234"));
        assert_eq!(record.due_date.as_deref(), Some("10/01/2024"));
        assert_eq!(record.amounts.principal.as_deref(), Some("1.000,00"));
        assert_eq!(record.amounts.fine.as_deref(), Some("50,00"));
        assert_eq!(record.amounts.interest.as_deref(), Some("10,00"));
        assert_eq!(record.amounts.total.as_deref(), Some("2.000,00"));
        assert_eq!(record.layout, Some(DarfLayout::Primary));
    }

    #[test]
    fn test_parse_warns_on_check_digits() {
        let result = DarfParser::new().parse(SAMPLE);
        assert_eq!(
            result.warnings,
            vec!["CNPJ 12.345.678/0001-99 has invalid check digits".to_string()]
        );
    }

    #[test]
    fn test_parse_empty_text() {
        let result = DarfParser::new().parse("");

        assert_eq!(result.record, DarfRecord::default());
        assert!(result.warnings.contains(&"No known amount layout matched".to_string()));
        assert!(result.warnings.contains(&"Could not extract cnpj".to_string()));
    }

    #[test]
    fn test_extract_or_log() {
        let extractor = DarfExtractor::new(StaticSource(SAMPLE)).with_text_logging(false);
        let record = extractor.extract_or_log(Path::new("a.pdf")).unwrap();
        assert_eq!(record.revenue_code.as_deref(), Some("1234"));

        let extractor = DarfExtractor::new(FailingSource);
        assert!(extractor.extract_or_log(Path::new("b.pdf")).is_none());
        assert!(extractor.extract_file(Path::new("b.pdf")).is_err());
    }
}
