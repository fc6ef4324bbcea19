//! Run command - extract every DARF in the input folder into the spreadsheet.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use darf_core::{Aggregator, PdfSource, Workspace};

use super::load_config;

/// Arguments for the run command.
#[derive(Args, Default)]
pub struct RunArgs {
    /// Base folder holding the input folder and the spreadsheet
    #[arg(short, long)]
    base_dir: Option<PathBuf>,

    /// Name of the input folder inside the base folder
    #[arg(short, long)]
    input_dir: Option<String>,

    /// File name of the spreadsheet inside the base folder
    #[arg(short, long)]
    output: Option<String>,

    /// Write amounts as numbers and dates as dates
    #[arg(long)]
    typed_cells: bool,
}

pub fn run(args: RunArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(base_dir) = args.base_dir {
        config.paths.base_dir = base_dir;
    }
    if let Some(input_dir) = args.input_dir {
        config.paths.input_dir = input_dir;
    }
    if let Some(output) = args.output {
        config.paths.output_file = output;
    }
    if args.typed_cells {
        config.output.typed_cells = true;
    }

    let paths = Workspace::new(&config).prepare()?;
    let aggregator = Aggregator::new(PdfSource, &config);
    let files = aggregator.find_documents(&paths.input_dir)?;

    println!(
        "{} Found {} files in {}",
        style("ℹ").blue(),
        files.len(),
        paths.input_dir.display()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let (table, summary) = aggregator.tabulate(&files, |path, _| {
        debug!("Done with {}", path.display());
        pb.inc(1);
    });
    pb.finish_and_clear();

    aggregator.save(&table, &paths.output_path)?;

    println!(
        "{} Exported {} rows to {} in {:?}",
        style("✓").green(),
        summary.rows_written,
        paths.output_path.display(),
        start.elapsed()
    );

    if !summary.failed.is_empty() {
        println!();
        println!("{}", style("Skipped files:").red());
        for path in &summary.failed {
            println!("  - {}", path.display());
        }
    }

    Ok(())
}
