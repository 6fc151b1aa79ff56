//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Generate table-driven Go test stubs for every function in a source tree
#[derive(Parser, Debug)]
#[command(name = "semfora-testgen")]
#[command(about = "Incrementally generates empty table-driven test stubs for Go source files")]
#[command(version)]
pub struct Cli {
    /// Root directory to scan
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Exclusion config file (defaults to <PATH>/.testgen.toml when present)
    #[arg(short, long, value_name = "FILE", env = "TESTGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Report what would be generated without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Summary output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON object
    Json,
}

impl Cli {
    /// Default log filter for this invocation
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "semfora_testgen=debug"
        } else {
            "semfora_testgen=info"
        }
    }
}
