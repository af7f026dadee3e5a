use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use u_study::validation::parse_deadline;

/// Top-level CLI parser for the `u-study` binary.
#[derive(Debug, Parser)]
#[command(
    name = "u-study",
    version,
    about = "Split study topics across the days before a deadline"
)]
pub struct Cli {
    /// Comma-separated topics (prompted for when omitted)
    #[arg(short, long)]
    pub topics: Option<String>,

    /// Deadline as YYYY-MM-DD (prompted for when omitted)
    #[arg(short, long)]
    pub deadline: Option<String>,

    /// Planning date as YYYY-MM-DD (defaults to the local date)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Report path (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    parse_deadline(value).map_err(|error| error.to_string())
}
