//! Tabular output: the in-memory table and its `.xlsx` writer.

mod table;
mod writer;

pub use table::{
    column_name, CellValue, OutputTable, SumFormula, FINE_COLUMN, FIRST_DATA_ROW,
    INTEREST_COLUMN, PRINCIPAL_COLUMN, REPORT_HEADER, SETUP_HEADER, TOTAL_COLUMN,
};
pub use writer::write_table;
