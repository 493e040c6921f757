/*
 * codemigrate CLI
 *
 * Thin wiring over the migration pipeline: read a Java file, write the
 * generated Python module, print the validation report.
 *
 * Usage:
 *   codemigrate-cli Calculator.java -o calculator.py
 *   codemigrate-cli Calculator.java --report
 */

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use codemigrate_core::{migrate_source, MigrationConfig, OverallStatus};

#[derive(Parser)]
#[command(name = "codemigrate-cli", about = "Structural Java to Python migration")]
struct Cli {
    /// Java source file to migrate
    input: PathBuf,

    /// Output path for the generated Python module (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the validation report as JSON
    #[arg(long)]
    report: bool,

    /// Run the execution smoke test (off by default)
    #[arg(long)]
    exec_check: bool,

    /// Skip the external linter pass
    #[arg(long)]
    no_lint: bool,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 4)]
    indent: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let java_source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read {}: {}", cli.input.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let config = MigrationConfig {
        indent_size: cli.indent,
        run_static_analysis: !cli.no_lint,
        run_execution_check: cli.exec_check,
        ..MigrationConfig::default()
    };

    let outcome = match migrate_source(&java_source, &config) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(err) = fs::write(path, &outcome.code) {
                eprintln!("error: cannot write {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        }
        None => print!("{}", outcome.code),
    }

    if cli.report {
        match serde_json::to_string_pretty(&outcome.report) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("error: cannot serialize report: {}", err),
        }
    }

    match outcome.report.overall_status {
        OverallStatus::Failed => ExitCode::FAILURE,
        OverallStatus::Warning | OverallStatus::Success => ExitCode::SUCCESS,
    }
}
