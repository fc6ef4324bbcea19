//! Process command - extract data from a single DARF file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use darf_core::darf::rules::{format_br_amount, parse_br_amount};
use darf_core::{DarfExtractor, DarfRecord, ExtractionResult, PdfSource};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction warnings
    #[arg(long)]
    warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let extractor = DarfExtractor::new(PdfSource).with_text_logging(config.extraction.log_text);
    let result = extractor.extract_file(&args.input)?;

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    Ok(())
}

fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.record)?),
        OutputFormat::Text => Ok(format_text(&result.record)),
    }
}

fn format_text(record: &DarfRecord) -> String {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    let amounts = &record.amounts;

    let mut output = String::new();
    output.push_str(&format!("Período de Apuração: {}\n", field(&record.period)));
    output.push_str(&format!("CNPJ:                {}\n", field(&record.cnpj)));
    output.push_str(&format!("Código da Receita:   {}\n", field(&record.revenue_code)));
    output.push_str(&format!("Data de Vencimento:  {}\n", field(&record.due_date)));
    output.push('\n');
    output.push_str(&format!("Principal: {}\n", field(&amounts.principal)));
    output.push_str(&format!("Multa:     {}\n", field(&amounts.fine)));
    output.push_str(&format!("Juros:     {}\n", field(&amounts.interest)));
    output.push_str(&format!("Total:     {}\n", field(&amounts.total)));
    if let Some(other) = &amounts.other {
        output.push_str(&format!("Outro:     {}\n", other));
    }

    // Same sum the spreadsheet formula computes
    let parts = [&amounts.principal, &amounts.interest, &amounts.fine]
        .map(|value| value.as_deref().and_then(parse_br_amount));
    if let [Some(principal), Some(interest), Some(fine)] = parts {
        output.push_str(&format!(
            "\nPrincipal + Juros + Multa: {}\n",
            format_br_amount(principal + interest + fine)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use darf_core::DarfAmounts;

    #[test]
    fn test_format_text_with_sum() {
        let record = DarfRecord {
            cnpj: Some("12.345.678/0001-99".to_string()),
            amounts: DarfAmounts {
                principal: Some("1.000,00".to_string()),
                fine: Some("50,00".to_string()),
                interest: Some("10,00".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let text = format_text(&record);
        assert!(text.contains("CNPJ:                12.345.678/0001-99"));
        assert!(text.contains("Período de Apuração: -"));
        assert!(text.contains("Principal + Juros + Multa: 1.060,00"));
        assert!(!text.contains("Outro"));
    }

    #[test]
    fn test_format_text_without_amounts() {
        let text = format_text(&DarfRecord::default());
        assert!(!text.contains("Principal + Juros + Multa"));
    }
}
