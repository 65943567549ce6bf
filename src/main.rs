//! gendiff command-line interface.
//!
//! Wires the library modules together: parse both files, diff them, render
//! the result in the requested format.

use anyhow::{Context, Result};
use clap::Parser;
use gendiff::{
    compute_diff, format_diff, parse_file, shared_format, DiffConfig, OutputFormat, OutputOptions,
};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};
use tracing::level_filters::LevelFilter;

/// Compares two configuration files and shows a difference.
#[derive(Parser)]
#[command(name = "gendiff")]
#[command(version)]
#[command(about = "Compares two configuration files and shows a difference", long_about = None)]
struct Cli {
    /// First file to compare
    #[arg(value_name = "FILE1")]
    file1: PathBuf,

    /// Second file to compare
    #[arg(value_name = "FILE2")]
    file2: PathBuf,

    /// Output format: stylish, plain or json
    #[arg(short = 'f', long, default_value = "stylish")]
    format: String,

    /// Color added and removed lines (stylish format, terminals only)
    #[arg(long)]
    color: bool,

    /// Maximum nesting depth to compare
    #[arg(long, default_value_t = gendiff::diff::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Verbose output (log parsing and diff progress to stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    let format: OutputFormat = cli.format.parse()?;

    shared_format(&cli.file1, &cli.file2)?;

    info!(file = %cli.file1.display(), "parsing");
    let old = parse_file(&cli.file1)
        .with_context(|| format!("Failed to parse first file: {}", cli.file1.display()))?;

    info!(file = %cli.file2.display(), "parsing");
    let new = parse_file(&cli.file2)
        .with_context(|| format!("Failed to parse second file: {}", cli.file2.display()))?;

    let diff_config = DiffConfig {
        max_depth: cli.max_depth,
        ..Default::default()
    };
    let diff = compute_diff(&old, &new, &diff_config).context("Failed to compare documents")?;

    debug!(%format, "formatting output");
    let output_options = OutputOptions {
        colored: cli.color && std::io::stdout().is_terminal(),
        ..Default::default()
    };
    let output =
        format_diff(&diff, &format, &output_options).context("Failed to format diff output")?;

    println!("{}", output);

    if diff.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}
