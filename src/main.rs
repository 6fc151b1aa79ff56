//! semfora-testgen CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use semfora_testgen::{Cli, Generator, OutputFormat, RunSummary, TestgenError, WalkConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> semfora_testgen::Result<String> {
    let config = WalkConfig::load(&cli.path, cli.config.as_deref())?;
    tracing::debug!("Walk config: {:?}", config);

    let summary = Generator::new(&config)
        .dry_run(cli.dry_run)
        .run(&cli.path)?;

    format_summary(&summary, cli.format)
}

fn format_summary(summary: &RunSummary, format: OutputFormat) -> semfora_testgen::Result<String> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(summary).map_err(|e| TestgenError::Render {
                message: format!("JSON serialization failed: {}", e),
            })?;
            Ok(format!("{}\n", json))
        }
        OutputFormat::Text => {
            let prefix = if summary.dry_run { "mode: dry-run\n" } else { "" };
            Ok(format!(
                "{}files_scanned: {}\ncreated: {}\nextended: {}\nunchanged: {}\nstubs: {}\n",
                prefix,
                summary.files_scanned,
                summary.artifacts_created,
                summary.artifacts_extended,
                summary.artifacts_unchanged,
                summary.stubs_written
            ))
        }
    }
}
