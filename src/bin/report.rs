//! emograph-report - emotion timeline report generator
//!
//! Fetches a conversation document from a public object-storage URL,
//! aggregates one person's emotion counts by date, and writes a
//! chart-ready JSON document for the report page.
//!
//! Exit codes:
//!   0 - Success (including "nothing to chart")
//!   1 - Fetch, decode, or write failure

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use emograph::aggregate::{aggregate_by_date, EmotionRow};
use emograph::chart::{self, ChartData};
use emograph::client;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "emograph-report",
    about = "Aggregate per-date emotion counts for one person and emit chart data"
)]
struct Args {
    /// URL of the conversation records JSON document
    url: String,

    /// Person whose utterances are counted; all other speakers are ignored
    #[arg(short, long, default_value = "Winter")]
    person: String,

    /// Output file, or `-` for stdout
    #[arg(short, long, default_value = "emotion_report.json")]
    output: PathBuf,

    /// Output document shape
    #[arg(short, long, value_enum, default_value = "chart")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Labels plus one dataset per emotion category
    Chart,
    /// One row per date with raw counts
    Rows,
}

/// Chart-shaped report document.
#[derive(Debug, Serialize)]
struct ChartReport<'a> {
    person: &'a str,
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    chart: ChartData,
}

/// Row-shaped report document.
#[derive(Debug, Serialize)]
struct RowsReport<'a> {
    person: &'a str,
    generated_at: DateTime<Utc>,
    rows: &'a [EmotionRow],
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    println!("Fetching conversation records from: {}", args.url);

    let records = client::fetch_records(&args.url)
        .await
        .context("failed to load conversation data")?;
    println!("Fetched {} records", records.len());

    let rows = aggregate_by_date(&records, &args.person);
    println!(
        "Aggregated {} dates for {}",
        rows.len(),
        args.person
    );

    let document = match args.format {
        OutputFormat::Chart => {
            let Some(chart) = chart::build_chart_data(&rows, &args.person) else {
                // Nothing to render; skipping is the contract, not an error.
                println!("No data to chart for {}; no report written", args.person);
                return Ok(());
            };
            serde_json::to_string_pretty(&ChartReport {
                person: &args.person,
                generated_at: Utc::now(),
                chart,
            })?
        }
        OutputFormat::Rows => serde_json::to_string_pretty(&RowsReport {
            person: &args.person,
            generated_at: Utc::now(),
            rows: &rows,
        })?,
    };

    write_output(&args.output, &document)?;
    Ok(())
}

fn write_output(output: &Path, document: &str) -> Result<()> {
    if output.as_os_str() == "-" {
        println!("{document}");
    } else {
        std::fs::write(output, document)
            .with_context(|| format!("failed to write report to {}", output.display()))?;
        println!("Report saved to: {}", output.display());
    }
    Ok(())
}
