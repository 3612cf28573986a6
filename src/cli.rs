//! CLI argument parsing for rabbitbench

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for evaluation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rabbitbench")]
#[command(version)]
#[command(about = "Check benchmark reports against regression thresholds", long_about = None)]
pub struct Cli {
    /// Threshold rules file
    #[arg(short, long, value_name = "FILE", default_value = "rabbitbench.toml")]
    pub thresholds: PathBuf,

    /// Benchmark report to evaluate (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub report: PathBuf,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Exit with status 1 when any threshold alert is raised
    #[arg(long = "fail-on-alert")]
    pub fail_on_alert: bool,

    /// Enable debug tracing output to stderr
    #[arg(long)]
    pub debug: bool,
}
