//! Date and time extraction CLI.
//!
//! Scans each input string for dates, clock times and weekday names and
//! prints one labelled block per input.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use datefinder::{build_input, read_input_file, render_report, PatternCategory, PatternFinder};

/// Date, Time and Weekday Finder
///
/// Extracts dates, clock times and weekday names from text.
/// With no inputs, runs over a built-in set of example sentences.
#[derive(Parser)]
#[command(name = "datefinder")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Text to scan (each argument is one input)
    #[arg(value_name = "TEXT")]
    inputs: Vec<String>,

    /// Read additional inputs from a file, one per line
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Only show these categories (can be specified multiple times)
    #[arg(short, long, value_enum, value_name = "CATEGORY")]
    category: Vec<CategoryArg>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CategoryArg {
    Date,
    Time,
    Day,
}

impl From<CategoryArg> for PatternCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Date => Self::Date,
            CategoryArg::Time => Self::Time,
            CategoryArg::Day => Self::Day,
        }
    }
}

/// Resolves the requested categories, keeping presentation order and
/// dropping duplicates. An empty request means all categories.
fn selected_categories(requested: &[CategoryArg]) -> Vec<PatternCategory> {
    if requested.is_empty() {
        return PatternCategory::ALL.to_vec();
    }
    let requested: Vec<PatternCategory> = requested.iter().map(|&c| c.into()).collect();
    PatternCategory::ALL
        .into_iter()
        .filter(|c| requested.contains(c))
        .collect()
}

/// Gathers positional inputs followed by file lines, falling back to the
/// demo set when both are empty.
fn collect_inputs(cli: &Cli) -> Result<Vec<String>> {
    let mut inputs = cli.inputs.clone();
    if let Some(path) = &cli.file {
        let lines = read_input_file(path)
            .with_context(|| format!("Failed to read inputs from {}", path.display()))?;
        inputs.extend(lines);
    }
    Ok(build_input(inputs))
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let categories = selected_categories(&cli.category);
    let inputs = collect_inputs(&cli)?;
    debug!(count = inputs.len(), "processing inputs");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for input in &inputs {
        let finder = PatternFinder::new(input);
        out.write_all(render_report(input, &finder, &categories).as_bytes())
            .context("Failed to write output")?;
    }
    out.flush().context("Failed to write output")?;

    Ok(())
}
