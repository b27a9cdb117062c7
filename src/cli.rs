use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use crate::solver::PuzzleSolver;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Centum - witness every integer from 1 to 100 with the digits of a year
#[derive(Parser, Debug)]
#[command(name = "centum")]
#[command(
    about = "Find an arithmetic expression for every integer in [1, 100] using each input digit exactly once"
)]
#[command(version)]
pub struct CliArgs {
    /// Digits to build expressions from, e.g. a year
    #[arg(default_value = "2021")]
    pub digits: String,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    let solver = PuzzleSolver::new(&args.digits).context("Invalid digit string")?;

    info!("Searching expressions over digits '{}'", args.digits);
    let started = Instant::now();
    let results = solver.solve();
    info!("Search finished in {} ms", started.elapsed().as_millis());

    for witness in &results {
        println!("{}: {}", witness.value.round() as i64, witness.expression);
    }
    println!("Total found: {}", results.len());

    Ok(())
}
