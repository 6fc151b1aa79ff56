//! Data structures shared by the extractor, reconciler, renderer and driver

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Suffix inserted between a source file's stem and its extension to name
/// the companion test file (`math.go` -> `math_test.go`)
pub const TEST_FILE_SUFFIX: &str = "_test";

/// Lexical signature of one top-level function or method
///
/// Types are kept as written in source (on one line, comments dropped),
/// never resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    /// Declared function or method name
    pub name: String,

    /// One entry per declared parameter, in order
    pub inputs: Vec<String>,

    /// One entry per declared result, in order
    pub outputs: Vec<String>,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Input types as struct field types: a variadic `...T` becomes `[]T`
    pub fn input_field_types(&self) -> Vec<String> {
        self.inputs
            .iter()
            .map(|ty| match ty.strip_prefix("...") {
                Some(elem) => format!("[]{}", elem),
                None => ty.clone(),
            })
            .collect()
    }
}

/// Everything extracted from a single source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceUnit {
    /// Directory containing the file
    pub directory: PathBuf,

    /// File name including extension
    pub file_name: String,

    /// Name from the `package` clause
    pub package_name: String,

    /// Functions and methods in declaration order
    pub signatures: Vec<FunctionSignature>,
}

impl SourceUnit {
    /// Full path of the source file
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Path of the companion test artifact: `<stem>_test.<ext>` in the same directory
    pub fn artifact_path(&self) -> PathBuf {
        artifact_path_for(&self.path())
    }
}

/// Derive the test artifact path for a source file
///
/// The extension is stripped, the test suffix appended, and the extension
/// re-added. Files without an extension just get the suffix.
pub fn artifact_path_for(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match source.extension() {
        Some(ext) => format!("{}{}.{}", stem, TEST_FILE_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, TEST_FILE_SUFFIX),
    };

    source.with_file_name(file_name)
}

/// Deterministic stub name for a function: `Test_{package}_{function}`
pub fn stub_name(package_name: &str, function_name: &str) -> String {
    format!("Test_{}_{}", package_name, function_name)
}

/// How the renderer should shape its output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Artifact does not exist yet: package header plus every stub
    Fresh,
    /// Artifact exists: only the missing stubs
    Append,
}

impl RenderMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Append => "append",
        }
    }
}

/// Counters accumulated over one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Eligible source files visited
    pub files_scanned: usize,

    /// Test files created from scratch
    pub artifacts_created: usize,

    /// Existing test files that received new stubs
    pub artifacts_extended: usize,

    /// Existing test files left untouched
    pub artifacts_unchanged: usize,

    /// Total stubs written across all files
    pub stubs_written: usize,

    /// True when nothing was written to disk
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub dry_run: bool,
}
