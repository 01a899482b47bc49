//! CLI entry point for the tile extractor

use clap::Parser;
use std::process::ExitCode;
use tileex::io::cli::{Cli, FileProcessor, report_lines};
use tileex::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

// The report goes to stdout and fatal errors to stderr
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let processor = FileProcessor::new(cli);

    match processor.process() {
        Ok(extraction) => {
            for line in report_lines(&extraction) {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
