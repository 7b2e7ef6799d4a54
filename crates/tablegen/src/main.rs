//! Builds percentile table files for the scoring service.
//!
//! The service loads bucket rows from the file named by `STANDARDS_FILE`.
//! This tool produces such files, either derived from raw historical
//! performances or dumped from the table shipped with the scoring crate.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use scoring::{HistoricalPerformance, PercentileTable};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tablegen")]
#[command(about = "Percentile table builder for the scoring service", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a table from raw historical performances
    Build {
        /// JSON file holding an array of historical performances
        input: PathBuf,

        #[arg(long, default_value = "./standards.json")]
        output: PathBuf,

        #[arg(long)]
        pretty: bool,
    },
    /// Dump the table shipped with the scoring crate
    Dump {
        #[arg(long, default_value = "./standards.json")]
        output: PathBuf,

        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("tablegen={log_level},scoring={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Build {
            input,
            output,
            pretty,
        } => build_table(&input, &output, pretty),
        Commands::Dump { output, pretty } => dump_builtin(&output, pretty),
    }
}

fn build_table(input: &Path, output: &Path, pretty: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let samples: Vec<HistoricalPerformance> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", input.display()))?;
    tracing::info!(samples = samples.len(), "Loaded historical performances");

    let table = PercentileTable::from_performances(&samples);
    if table.is_empty() {
        tracing::warn!("No demographic group reached the sample threshold");
    }

    write_rows(&table, output, pretty)
}

fn dump_builtin(output: &Path, pretty: bool) -> anyhow::Result<()> {
    write_rows(&PercentileTable::builtin(), output, pretty)
}

fn write_rows(table: &PercentileTable, output: &Path, pretty: bool) -> anyhow::Result<()> {
    let rows = table.to_rows();
    let json = if pretty {
        serde_json::to_string_pretty(&rows)?
    } else {
        serde_json::to_string(&rows)?
    };
    std::fs::write(output, json)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(buckets = rows.len(), "Wrote table to {}", output.display());

    Ok(())
}
