//! Monetary field extraction for DARF slips.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::trace;

use super::patterns::{AMOUNT, PRIMARY_LAYOUT, SECONDARY_LAYOUT};
use crate::models::darf::{DarfAmounts, DarfLayout};

/// Amounts found in a document and the layout they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountMatch {
    pub amounts: DarfAmounts,
    /// `None` when neither layout matched.
    pub layout: Option<DarfLayout>,
}

/// Extract the monetary fields from DARF text.
///
/// The primary layout is tried first; the secondary layout is only tried
/// when the primary one does not match. When neither matches every amount
/// is absent.
pub fn extract_amounts(text: &str) -> AmountMatch {
    if let Some(caps) = PRIMARY_LAYOUT.captures(text) {
        trace!("Primary layout matched at {:?}", caps.get(0).map(|m| m.range()));
        return AmountMatch {
            amounts: DarfAmounts {
                principal: Some(caps[1].to_string()),
                fine: Some(caps[2].to_string()),
                interest: Some(caps[3].to_string()),
                total: Some(caps[4].to_string()),
                other: None,
            },
            layout: Some(DarfLayout::Primary),
        };
    }

    if let Some(caps) = SECONDARY_LAYOUT.captures(text) {
        trace!("Secondary layout matched at {:?}", caps.get(0).map(|m| m.range()));
        return AmountMatch {
            amounts: DarfAmounts {
                principal: Some(caps[1].to_string()),
                fine: Some(caps[2].to_string()),
                interest: Some(caps[3].to_string()),
                total: Some(caps[4].to_string()),
                other: Some(caps[5].to_string()),
            },
            layout: Some(DarfLayout::Secondary),
        };
    }

    AmountMatch::default()
}

/// Parse a Brazilian-formatted amount (e.g., "1.234,56").
pub fn parse_br_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if !AMOUNT.is_match(s) {
        return None;
    }

    let normalized = s.replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Format amount in Brazilian style (1.234,56).
pub fn format_br_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount.round_dp(2).abs());
    let Some((integer_part, decimal_part)) = s.split_once('.') else {
        return s;
    };

    // Add thousand separators
    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{}{},{}", sign, formatted, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_primary_layout() {
        let text = "AUTENTICAÇÃO BANCÁRIA\n1.000,00\n50,00\n10,00\nOutros dados\nATENÇÃO\nPague até o vencimento\n2.000,00\n";

        let result = extract_amounts(text);

        assert_eq!(result.layout, Some(DarfLayout::Primary));
        assert_eq!(result.amounts.principal, some("1.000,00"));
        assert_eq!(result.amounts.fine, some("50,00"));
        assert_eq!(result.amounts.interest, some("10,00"));
        assert_eq!(result.amounts.total, some("2.000,00"));
        assert_eq!(result.amounts.other, None);
    }

    #[test]
    fn test_secondary_layout() {
        let text = "Receita Federal\nATENÇÃO\n500,00\n0,00\n0,00\n500,00\n1,23\nfim";

        let result = extract_amounts(text);

        assert_eq!(result.layout, Some(DarfLayout::Secondary));
        assert_eq!(result.amounts.principal, some("500,00"));
        assert_eq!(result.amounts.fine, some("0,00"));
        assert_eq!(result.amounts.interest, some("0,00"));
        assert_eq!(result.amounts.total, some("500,00"));
        assert_eq!(result.amounts.other, some("1,23"));
    }

    #[test]
    fn test_primary_wins_over_secondary() {
        let text = "AUTENTICAÇÃO BANCÁRIA\n1,00\n2,00\n3,00\nATENÇÃO\n4,00\n5,00\n6,00\n7,00\n8,00\n";

        let result = extract_amounts(text);

        assert_eq!(result.layout, Some(DarfLayout::Primary));
        assert_eq!(result.amounts.total, some("4,00"));
        assert_eq!(result.amounts.other, None);
    }

    #[test]
    fn test_no_layout() {
        let result = extract_amounts("Documento sem valores\n12,00\n");

        assert_eq!(result.layout, None);
        assert!(result.amounts.is_empty());
    }

    #[test]
    fn test_primary_requires_amounts_on_own_lines() {
        // Amounts run together on one line: primary fails, secondary too.
        let text = "AUTENTICAÇÃO BANCÁRIA\n1.000,00 50,00 10,00\nATENÇÃO 2.000,00";
        assert_eq!(extract_amounts(text).layout, None);
    }

    #[test]
    fn test_parse_br_amount() {
        assert_eq!(parse_br_amount("1.234,56"), Some(Decimal::from_str("1234.56").unwrap()));
        assert_eq!(parse_br_amount("0,99"), Some(Decimal::from_str("0.99").unwrap()));
        assert_eq!(
            parse_br_amount("12.345.678,90"),
            Some(Decimal::from_str("12345678.90").unwrap())
        );
        assert_eq!(parse_br_amount("1234.56"), None);
        assert_eq!(parse_br_amount("1,2,3"), None);
    }

    #[test]
    fn test_format_br_amount() {
        let amount = Decimal::from_str("1234.56").unwrap();
        assert_eq!(format_br_amount(amount), "1.234,56");

        let amount = Decimal::from_str("12345678.9").unwrap();
        assert_eq!(format_br_amount(amount), "12.345.678,90");

        let amount = Decimal::from_str("-50").unwrap();
        assert_eq!(format_br_amount(amount), "-50,00");
    }
}
