use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::{Config, OutputFormat, load_config};
use data_handler::{load_price_table, write_report};
use optimizer::Optimizer;
use std::path::PathBuf;
use tracing::info;

mod logging;
mod output;

/// The main entry point for the frontier analysis tool.
fn main() -> Result<()> {
    // Load environment variables from .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    // The subscriber lives only for this invocation.
    let (dispatch, _guard) = logging::build_dispatch(&config.logging)?;
    tracing::dispatcher::with_default(&dispatch, || match cli.command {
        Commands::Analyze(args) => handle_analyze(args, &config),
        Commands::Grid => handle_grid(&config),
    })
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Mean-variance frontier analysis of two assets.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute returns, moments, the weight frontier and the Capital Allocation Line.
    Analyze(AnalyzeArgs),
    /// Print the configured weight grid.
    Grid,
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// CSV file with a label column and one price column per asset, newest first.
    #[arg(long)]
    input: PathBuf,

    /// Directory to write the report tables to (overrides `report.output_dir`).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// How to print the report (overrides `report.format`).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_analyze(args: AnalyzeArgs, config: &Config) -> Result<()> {
    let prices = load_price_table(&args.input, &config.input)
        .with_context(|| format!("Failed to load prices from '{}'", args.input.display()))?;

    let optimizer = Optimizer::new(config);
    let report = optimizer.run(&prices).context("Frontier analysis failed")?;

    match args.format.unwrap_or(config.report.format) {
        OutputFormat::Table => println!("{}", output::render_report(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(dir) = args.output_dir.or_else(|| config.report.output_dir.clone()) {
        let written = write_report(&dir, &report)
            .with_context(|| format!("Failed to write report to '{}'", dir.display()))?;
        info!(run_id = %optimizer.run_id(), files = written.len(), "Report saved.");
    }

    Ok(())
}

fn handle_grid(config: &Config) -> Result<()> {
    let optimizer = Optimizer::new(config);
    println!(
        "{}",
        output::grid_table(
            optimizer.grid(),
            &config.input.asset_a_column,
            &config.input.asset_b_column
        )
    );
    Ok(())
}
