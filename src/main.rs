// src/main.rs

use clap::Parser;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

pub mod config;
pub mod error;
pub mod model;
pub mod physics;
pub mod utils;

use config::Config;
use error::AnalysisError;
use model::builtin_samples;
use physics::evaluate_all;
use utils::report;

/// Octahedral distortion analysis for layered crystal structures
#[derive(Parser, Debug)]
#[command(name = "odist", version, about)]
struct Cli {
    /// Output file for the report (defaults to the configured path)
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load();

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.default_output));

    match run(&output, &config) {
        Ok(path) => {
            println!("Report saved to: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Evaluates the built-in samples, writes the report, returns the resolved
/// output path. Any core failure aborts the run with no partial report.
fn run(output: &Path, config: &Config) -> Result<PathBuf, AnalysisError> {
    let samples = builtin_samples()?;
    info!("Evaluating {} samples", samples.len());

    let results = evaluate_all(&samples)?;
    let text = report::full_report(&results);

    std::fs::write(output, &text)?;

    if config.echo_report {
        print!("{}", text);
    }

    Ok(output.canonicalize()?)
}
