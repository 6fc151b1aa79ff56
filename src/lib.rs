//! semfora-testgen: incremental test scaffold generation for Go source trees
//!
//! Walks a tree, extracts the top-level function signatures of every Go file
//! with tree-sitter, and writes one empty table-driven test stub per function
//! into the file's `_test.go` companion. Re-running only appends stubs for
//! functions that do not have one yet.
//!
//! # Example
//!
//! ```no_run
//! use semfora_testgen::{generate, WalkConfig};
//! use std::path::Path;
//!
//! let config = WalkConfig::default();
//! let summary = generate(Path::new("."), &config)?;
//! println!("{} stub(s) written", summary.stubs_written);
//! # Ok::<(), semfora_testgen::TestgenError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod generator;
pub mod parsing;
pub mod reconcile;
pub mod render;
pub mod schema;
pub mod walker;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use config::WalkConfig;
pub use error::{Result, TestgenError};
pub use extract::{extract_file, extract_source};
pub use generator::{generate, FileOutcome, Generator};
pub use reconcile::{reconcile, Reconciliation};
pub use render::{StubPayload, StubRenderer, TemplateRenderer};
pub use schema::{
    artifact_path_for, stub_name, FunctionSignature, RenderMode, RunSummary, SourceUnit,
};
pub use walker::{walk, TreeWalker};
