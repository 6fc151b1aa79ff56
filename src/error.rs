//! Error types and exit codes for semfora-testgen

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Main error type for test generation runs
///
/// Every variant is fatal: the run stops at the first failure rather than
/// leaving a partially generated set of test files behind.
#[derive(Error, Debug)]
pub enum TestgenError {
    #[error("Failed to read directory {}: {message}", path.display())]
    Traversal { path: PathBuf, message: String },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },

    #[error("Template rendering failed: {message}")]
    Render { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TestgenError {
    /// Numeric exit status for this error:
    /// - 0: Success
    /// - 1: Traversal / IO error
    /// - 2: Configuration error
    /// - 3: Parse failure
    /// - 4: Write or render failure
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Traversal { .. } | Self::Io(_) => 1,
            Self::Config { .. } => 2,
            Self::Parse { .. } => 3,
            Self::Write { .. } | Self::Render { .. } => 4,
        }
    }

    /// Convert error to the process exit code
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Result type alias for semfora-testgen operations
pub type Result<T> = std::result::Result<T, TestgenError>;
