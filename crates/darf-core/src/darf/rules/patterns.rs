//! Common regex patterns for DARF extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Brazilian amount: 1.234.567,89
    pub static ref AMOUNT: Regex = Regex::new(
        r"^\d{1,3}(?:\.\d{3})*,\d{2}$"
    ).unwrap();

    // Primary layout: principal, fine and interest on the lines right after
    // the bank authentication marker, total somewhere after the warning marker.
    pub static ref PRIMARY_LAYOUT: Regex = Regex::new(
        r"(?s)AUTENTICAÇÃO BANCÁRIA.*?\n(\d{1,3}(?:\.\d{3})*,\d{2})\n(\d{1,3}(?:\.\d{3})*,\d{2})\n(\d{1,3}(?:\.\d{3})*,\d{2}).*?ATENÇÃO.*?(\d{1,3}(?:\.\d{3})*,\d{2})"
    ).unwrap();

    // Secondary layout: five values on consecutive lines after the warning marker.
    pub static ref SECONDARY_LAYOUT: Regex = Regex::new(
        r"ATENÇÃO\n([\d.,]+)\n([\d.,]+)\n([\d.,]+)\n([\d.,]+)\n([\d.,]+)"
    ).unwrap();

    // DD/MM/YYYY, not validated as a calendar date
    pub static ref DATE_TOKEN: Regex = Regex::new(
        r"(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // CNPJ: NN.NNN.NNN/NNNN-NN
    pub static ref CNPJ_TOKEN: Regex = Regex::new(
        r"(\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2})"
    ).unwrap();

    // Revenue code: four digits after a CNPJ
    pub static ref REVENUE_CODE: Regex = Regex::new(
        r"\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}\s*(\d{4})"
    ).unwrap();
}
