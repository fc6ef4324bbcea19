//! CLI application for DARF tax slip extraction.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, process, run};

/// DARF extraction - Collect tax slip data from PDFs into a spreadsheet
#[derive(Parser)]
#[command(name = "darf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Defaults to `run` with no overrides
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every DARF in the input folder into the spreadsheet
    Run(run::RunArgs),

    /// Extract a single DARF and print its fields
    Process(process::ProcessArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Some(Commands::Run(args)) => run::run(args, cli.config.as_deref()),
        Some(Commands::Process(args)) => process::run(args, cli.config.as_deref()),
        Some(Commands::Config(args)) => config::run(args),
        None => run::run(run::RunArgs::default(), cli.config.as_deref()),
    }
}
