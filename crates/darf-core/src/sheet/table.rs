//! Row-oriented output table with formula cells.

use std::fmt;

use crate::models::darf::DarfRecord;

/// Header written when the spreadsheet is first created.
pub const SETUP_HEADER: [&str; 8] = [
    "Período de Apuração",
    "CNPJ",
    "Código da Receita",
    "Data de Vencimento",
    "Valor do Principal",
    "Valor Da Multa",
    "Valor dos Juros",
    "Valor Total",
];

/// Header written by the batch report.
///
/// Differs from [`SETUP_HEADER`] in the position of the two date columns;
/// data rows are always laid out period-first regardless.
pub const REPORT_HEADER: [&str; 8] = [
    "Data de Vencimento",
    "CNPJ",
    "Código da Receita",
    "Período de Apuração",
    "Valor do Principal",
    "Valor Da Multa",
    "Valor dos Juros",
    "Valor Total",
];

/// Sheet row number (1-based) of the first data row.
pub const FIRST_DATA_ROW: u32 = 2;

pub const PRINCIPAL_COLUMN: usize = 4;
pub const FINE_COLUMN: usize = 5;
pub const INTEREST_COLUMN: usize = 6;
pub const TOTAL_COLUMN: usize = 7;

/// Spreadsheet column name for a 0-based column index: A..Z, AA, AB, ...
pub fn column_name(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// A single output cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Plain value; `None` is a blank cell.
    Literal(Option<String>),
    /// Formula evaluated by the spreadsheet application.
    Formula(SumFormula),
}

/// Sum of three columns of one sheet row, e.g. `=E2+G2+F2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumFormula {
    /// 0-based column indexes, in the order they appear in the formula.
    pub columns: [usize; 3],
    /// 1-based sheet row number.
    pub row: u32,
}

impl SumFormula {
    /// Total of principal, interest and fine for a sheet row.
    pub fn total(row: u32) -> Self {
        Self {
            columns: [PRINCIPAL_COLUMN, INTEREST_COLUMN, FINE_COLUMN],
            row,
        }
    }
}

impl fmt::Display for SumFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.columns.map(column_name);
        let row = self.row;
        write!(f, "={a}{row}+{b}{row}+{c}{row}")
    }
}

/// Header plus data rows, positionally aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTable {
    header: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl OutputTable {
    /// Create an empty table with the given header.
    pub fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Empty table with the report header.
    pub fn report() -> Self {
        Self::new(&REPORT_HEADER)
    }

    /// Empty table with the setup header.
    pub fn setup() -> Self {
        Self::new(&SETUP_HEADER)
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sheet row number the next appended row will occupy.
    pub fn next_row_number(&self) -> u32 {
        FIRST_DATA_ROW + self.rows.len() as u32
    }

    /// Append a row for a record and return its sheet row number.
    ///
    /// Cells are period, CNPJ, revenue code, due date, principal, fine,
    /// interest, followed by the total formula for this row.
    pub fn append_record(&mut self, record: &DarfRecord) -> u32 {
        let row_number = self.next_row_number();

        let mut row: Vec<CellValue> = [
            &record.period,
            &record.cnpj,
            &record.revenue_code,
            &record.due_date,
            &record.amounts.principal,
            &record.amounts.fine,
            &record.amounts.interest,
        ]
        .into_iter()
        .map(|value| CellValue::Literal(value.clone()))
        .collect();

        row.push(CellValue::Formula(SumFormula::total(row_number)));
        self.rows.push(row);

        row_number
    }

    /// Cell at a 1-based sheet row and 0-based column.
    pub fn cell(&self, row_number: u32, column: usize) -> Option<&CellValue> {
        let index = row_number.checked_sub(FIRST_DATA_ROW)? as usize;
        self.rows.get(index)?.get(column)
    }
}
