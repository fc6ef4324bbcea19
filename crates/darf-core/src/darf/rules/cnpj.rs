//! CNPJ (Brazilian company registration number) and revenue code extraction.

use super::patterns::{CNPJ_TOKEN, REVENUE_CODE};
use super::{ExtractionMatch, FieldExtractor};

/// CNPJ field extractor.
pub struct CnpjExtractor;

impl CnpjExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CnpjExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CnpjExtractor {
    type Output = String;

    fn extract_all(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        CNPJ_TOKEN
            .find_iter(text)
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end()))
            .collect()
    }
}

/// Revenue code extractor: the four digits right after a CNPJ.
pub struct RevenueCodeExtractor;

impl RevenueCodeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RevenueCodeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for RevenueCodeExtractor {
    type Output = String;

    fn extract_all(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        REVENUE_CODE
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end()))
            .collect()
    }
}

/// Last CNPJ in the text.
pub fn extract_cnpj(text: &str) -> Option<String> {
    CnpjExtractor::new().extract_last(text).map(|m| m.value)
}

/// Revenue code following the last CNPJ that has one.
pub fn extract_revenue_code(text: &str) -> Option<String> {
    RevenueCodeExtractor::new().extract_last(text).map(|m| m.value)
}

/// Validate a CNPJ using its two check digits.
///
/// Accepts formatted (`11.222.333/0001-81`) or bare digits.
pub fn validate_cnpj(cnpj: &str) -> bool {
    let digits: Vec<u32> = cnpj.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 14 {
        return false;
    }

    // All-same-digit numbers pass the checksum but are not issued
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    let first = check_digit(&digits[..12], &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);
    let second = check_digit(&digits[..13], &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);

    first == digits[12] && second == digits[13]
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let rest = sum % 11;
    if rest < 2 { 0 } else { 11 - rest }
}
