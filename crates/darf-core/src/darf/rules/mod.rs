//! Rule-based field extractors for DARF slips.
//!
//! Selection is positional over the whole text: "last date", "last CNPJ".
//! Nothing here is scoped to a section of the slip, so extra date-like or
//! CNPJ-like strings elsewhere on the page shift the selection.

pub mod amounts;
pub mod cnpj;
pub mod dates;
pub mod patterns;

pub use amounts::{extract_amounts, format_br_amount, parse_br_amount, AmountMatch};
pub use cnpj::{extract_cnpj, extract_revenue_code, validate_cnpj, CnpjExtractor, RevenueCodeExtractor};
pub use dates::{extract_dates, parse_br_date, DarfDates, DateExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract all occurrences of the field, in text order.
    fn extract_all(&self, text: &str) -> Vec<ExtractionMatch<Self::Output>>;

    /// The last occurrence of the field.
    fn extract_last(&self, text: &str) -> Option<ExtractionMatch<Self::Output>> {
        self.extract_all(text).pop()
    }
}

/// A matched field value with its position in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in source text.
    pub position: (usize, usize),
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, start: usize, end: usize) -> Self {
        Self {
            value,
            position: (start, end),
        }
    }
}
