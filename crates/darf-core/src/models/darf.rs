//! DARF record model.

use serde::{Deserialize, Serialize};

/// Fields extracted from a single DARF document.
///
/// Every field is independently optional; a field that could not be
/// matched is `None`. Values are kept exactly as they appear in the text
/// (`"1.000,00"`, `"20/01/2024"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DarfRecord {
    /// Assessment period (Período de Apuração).
    pub period: Option<String>,

    /// Taxpayer registration number (CNPJ), `NN.NNN.NNN/NNNN-NN`.
    pub cnpj: Option<String>,

    /// Four-digit revenue code (Código da Receita).
    pub revenue_code: Option<String>,

    /// Due date (Data de Vencimento).
    pub due_date: Option<String>,

    /// Monetary fields.
    pub amounts: DarfAmounts,

    /// Which slip layout the amounts were read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<DarfLayout>,
}

/// Monetary fields of a DARF.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DarfAmounts {
    /// Valor do Principal.
    pub principal: Option<String>,

    /// Valor da Multa.
    pub fine: Option<String>,

    /// Valor dos Juros.
    pub interest: Option<String>,

    /// Valor Total.
    pub total: Option<String>,

    /// Fifth amount, only present on the secondary layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

/// Known DARF text layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DarfLayout {
    /// Amounts follow the bank authentication marker, total after the
    /// warning marker.
    Primary,
    /// Five amounts on consecutive lines after the warning marker.
    Secondary,
}

impl DarfRecord {
    /// Names of the fields that could not be extracted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("period", &self.period),
            ("cnpj", &self.cnpj),
            ("revenue_code", &self.revenue_code),
            ("due_date", &self.due_date),
            ("principal", &self.amounts.principal),
            ("fine", &self.amounts.fine),
            ("interest", &self.amounts.interest),
            ("total", &self.amounts.total),
        ];

        fields
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name)
            .collect()
    }
}

impl DarfAmounts {
    /// Check if no amount was extracted.
    pub fn is_empty(&self) -> bool {
        self.principal.is_none()
            && self.fine.is_none()
            && self.interest.is_none()
            && self.total.is_none()
            && self.other.is_none()
    }
}
