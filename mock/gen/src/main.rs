//! Mock Generator
//!
//! Reads struct definitions from `generators/*.rs` and writes accessor and
//! stub companions to `generators/mocks/`.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use mock_gen::config::GeneratorConfig;
use mock_gen::errors::GeneratorError;
use mock_gen::pipeline::{RunSummary, run, run_with};

/// Mock generator - adds accessors and stubs to struct definitions
#[derive(Parser, Debug)]
#[command(name = "mock-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn execute(cli: &Cli) -> Result<RunSummary, GeneratorError> {
    let config = GeneratorConfig::default();

    if cli.dry_run {
        run_with(&config, |unit| {
            println!("// --- {} ({}) ---", unit.path.display(), unit.type_name);
            println!("{}", unit.code);
            Ok(())
        })
    } else {
        run(&config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // -v flags win; otherwise honour RUST_LOG, defaulting to warnings only
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match execute(&cli) {
        Ok(summary) => {
            if cli.verbose > 0 {
                eprintln!(
                    "Processed {} definition file(s), generated {} mock file(s)",
                    summary.files_processed,
                    summary.outputs.len()
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
