//! `.xlsx` output using rust_xlsxwriter.

use std::path::Path;

use chrono::Datelike;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{ExcelDateTime, Format, Formula, Workbook, Worksheet};
use tracing::{debug, trace};

use super::table::{CellValue, OutputTable};
use crate::darf::rules::{parse_br_amount, parse_br_date};
use crate::error::Result;
use crate::models::config::OutputConfig;

/// Write a table to a single-sheet workbook, replacing any existing file.
///
/// Header goes in the first row; blank literals leave the cell empty.
pub fn write_table(table: &OutputTable, path: &Path, config: &OutputConfig) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&config.sheet_name)?;

    for (col, header) in table.header().iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }

    let date_format = Format::new().set_num_format("dd/mm/yyyy");

    for (index, row) in table.rows().iter().enumerate() {
        let sheet_row = (index + 1) as u32;

        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                CellValue::Literal(None) => {}
                CellValue::Literal(Some(value)) if config.typed_cells => {
                    write_typed(worksheet, sheet_row, col, value, &date_format)?;
                }
                CellValue::Literal(Some(value)) => {
                    worksheet.write_string(sheet_row, col, value)?;
                }
                CellValue::Formula(formula) => {
                    worksheet.write_formula(sheet_row, col, Formula::new(formula.to_string()))?;
                }
            }
        }
    }

    workbook.save(path)?;
    debug!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Write an amount as a number, a date as an Excel date, anything else as text.
fn write_typed(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    date_format: &Format,
) -> Result<()> {
    if let Some(number) = parse_br_amount(value).and_then(|d| d.to_f64()) {
        worksheet.write_number(row, col, number)?;
        return Ok(());
    }

    if let Some(date) = parse_br_date(value) {
        if let Ok(year) = u16::try_from(date.year()) {
            let datetime = ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8)?;
            worksheet.write_datetime_with_format(row, col, &datetime, date_format)?;
            return Ok(());
        }
    }

    trace!("Cell {}:{} kept as text: {}", row, col, value);
    worksheet.write_string(row, col, value)?;
    Ok(())
}
