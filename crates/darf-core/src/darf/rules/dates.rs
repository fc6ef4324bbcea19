//! Date extraction for DARF slips.

use chrono::NaiveDate;

use super::patterns::DATE_TOKEN;
use super::{ExtractionMatch, FieldExtractor};

/// Date token extractor (`DD/MM/YYYY`).
///
/// Tokens are returned as written, without calendar validation.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = String;

    fn extract_all(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        DATE_TOKEN
            .find_iter(text)
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end()))
            .collect()
    }
}

/// Dates selected from a DARF.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DarfDates {
    /// Last date token in the text.
    pub period: Option<String>,
    /// Second-to-last date token in the text.
    pub due_date: Option<String>,
}

/// Select the assessment period and due date from DARF text.
pub fn extract_dates(text: &str) -> DarfDates {
    let mut dates = DateExtractor::new().extract_all(text);

    let period = dates.pop().map(|m| m.value);
    let due_date = dates.pop().map(|m| m.value);

    DarfDates { period, due_date }
}

/// Parse a `DD/MM/YYYY` date.
pub fn parse_br_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_dates() {
        assert_eq!(extract_dates("sem datas aqui"), DarfDates::default());
    }

    #[test]
    fn test_single_date() {
        let dates = extract_dates("Período de Apuração 31/12/2023");

        assert_eq!(dates.period, Some("31/12/2023".to_string()));
        assert_eq!(dates.due_date, None);
    }

    #[test]
    fn test_last_and_second_to_last() {
        let text = "Emitido em 05/01/2024\nVencimento 10/01/2024\nApuração 20/01/2024";
        let dates = extract_dates(text);

        assert_eq!(dates.period, Some("20/01/2024".to_string()));
        assert_eq!(dates.due_date, Some("10/01/2024".to_string()));
    }

    #[test]
    fn test_tokens_are_not_validated() {
        let extractor = DateExtractor::new();
        let found = extractor.extract_all("99/99/2024 e 01/02/2024");

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].value, "99/99/2024");
        assert_eq!(found[0].position, (0, 10));
    }

    #[test]
    fn test_parse_br_date() {
        assert_eq!(parse_br_date("20/01/2024"), NaiveDate::from_ymd_opt(2024, 1, 20));
        assert_eq!(parse_br_date("31/02/2024"), None);
        assert_eq!(parse_br_date("2024-01-20"), None);
    }
}
