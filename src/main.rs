mod calendar;
mod engine;
mod models;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::calendar::Calendar;
use crate::engine::{Pipeline, PipelineOptions};
use crate::models::DEFAULT_DATE_FORMAT;

/// Builds a nightly price calendar from a short-term-rental earnings export.
#[derive(Debug, Parser)]
#[command(name = "stay-calendar", version)]
struct Cli {
    /// Earnings report CSV to read
    input: PathBuf,

    /// Log level written to stderr: error, warn, info, debug, trace
    #[arg(long, default_value = "error", value_parser = parse_log_level)]
    log_level: LevelFilter,

    /// chrono format of every date column in the export
    #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
    date_format: String,

    /// Date (YYYY-MM-DD) an empty calendar opens on, current date if omitted
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Shape of the calendar written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level);

    let mut pipeline = Pipeline::new(PipelineOptions { date_format: cli.date_format });

    if let Some(today) = cli.today {
        pipeline = pipeline.with_today(today);
    }

    let timer = Instant::now();
    let result = pipeline.run(&cli.input);
    let duration = timer.elapsed();

    info!("Processed export in: {duration:?}");

    let calendar = match result {
        Ok(calendar) => calendar,
        Err(error) => {
            error!("{error}");
            eprintln!("{}", error.alert());
            exit(1);
        }
    };

    match cli.format {
        OutputFormat::Json => write_json_to_stdout(&calendar)?,
        OutputFormat::Csv => write_csv_to_stdout(&calendar)?
    }

    Ok(())
}

fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    Ok(match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    })
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the calendar, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_json_to_stdout(calendar: &Calendar) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer(&mut output, calendar)?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}

fn write_csv_to_stdout(calendar: &Calendar) -> Result<()> {
    info!("Default calendar date: {}", calendar.default_date);

    let mut output = csv::Writer::from_writer(stdout().lock());

    //NOTE: serialize only emits the header alongside the first record
    if calendar.events.is_empty() {
        output.write_record(["title", "start", "end", "all_day"])?;
    }

    for event in &calendar.events {
        output.serialize(event)?;
    }

    output.flush()?;

    Ok(())
}
