use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;

use u_study::assistant::StudyAssistant;
use u_study::config::StudyConfig;
use u_study::report::ReportWriter;
use u_study::validation::ValidationErrorKind;
use u_study::StudyError;

mod cli;

const TOPICS_PROMPT: &str = "Enter your topics separated by commas: ";
const DEADLINE_PROMPT: &str = "Enter your study deadline (YYYY-MM-DD): ";

fn main() {
    if let Err(error) = run() {
        eprintln!("u-study error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = StudyConfig::load()
        .context("failed to load configuration")?
        .with_output_override(cli.output.clone());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let topics = match cli.topics {
        Some(topics) => topics,
        None => prompt(&mut input, TOPICS_PROMPT)?,
    };
    let deadline = match cli.deadline {
        Some(deadline) => deadline,
        None => prompt(&mut input, DEADLINE_PROMPT)?,
    };
    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let outcome = match StudyAssistant::new().run(&topics, &deadline, today) {
        Ok(outcome) => outcome,
        Err(StudyError::Validation(error)) => {
            if error.kind == ValidationErrorKind::EmptyTopics {
                println!("{error}");
            } else {
                println!("Error: {error}");
            }
            std::process::exit(1);
        }
        Err(error) => return Err(error.into()),
    };

    for report in &outcome.reports {
        println!("\n🔍 Researching: {}", report.topic);
        println!("\n📄 Summary for {}:\n{}", report.topic, report.summary);
    }

    if !outcome.kpi.fits_deadline() {
        tracing::warn!(
            overrun_days = outcome.kpi.overrun_days,
            "plan runs past the deadline"
        );
    }

    let writer = ReportWriter::new(&config.output_path);
    writer.write(&outcome.reports)?;

    println!(
        "\n✅ Study plan and summaries saved in '{}'.",
        writer.path().display()
    );
    Ok(())
}

fn prompt(input: &mut impl BufRead, message: &str) -> anyhow::Result<String> {
    print!("{message}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("USTUDY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
