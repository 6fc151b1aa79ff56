//! Rendering of test stubs and appending them to test files
//!
//! Two askama templates share one stub body (`templates/stub.txt`):
//! - `test_file.txt` for a new test file: package clause, `testing` import, stubs
//! - `test_stubs.txt` for an existing test file: stubs only
//!
//! Each stub declares an empty table of cases with one `inputN` field per
//! parameter and one `expectedN` field per result, numbered from zero.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use askama::Template;

use crate::error::{Result, TestgenError};
use crate::reconcile::Reconciliation;
use crate::schema::{FunctionSignature, RenderMode};

/// Data handed to a renderer
#[derive(Debug, Clone, Copy)]
pub struct StubPayload<'a> {
    pub package_name: &'a str,
    pub signatures: &'a [&'a FunctionSignature],
}

impl<'a> From<&'a Reconciliation<'a>> for StubPayload<'a> {
    fn from(reconciliation: &'a Reconciliation<'a>) -> Self {
        Self {
            package_name: reconciliation.package_name,
            signatures: &reconciliation.pending,
        }
    }
}

/// Turns a payload into source text for the given mode
pub trait StubRenderer {
    fn render(&self, payload: &StubPayload<'_>, mode: RenderMode) -> Result<String>;
}

#[derive(Template)]
#[template(path = "test_file.txt", escape = "none")]
struct TestFileTemplate<'a> {
    package_name: &'a str,
    signatures: &'a [&'a FunctionSignature],
}

#[derive(Template)]
#[template(path = "test_stubs.txt", escape = "none")]
struct TestStubsTemplate<'a> {
    package_name: &'a str,
    signatures: &'a [&'a FunctionSignature],
}

/// Renderer backed by the built-in templates
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRenderer;

impl StubRenderer for TemplateRenderer {
    fn render(&self, payload: &StubPayload<'_>, mode: RenderMode) -> Result<String> {
        let rendered = match mode {
            RenderMode::Fresh => TestFileTemplate {
                package_name: payload.package_name,
                signatures: payload.signatures,
            }
            .render(),
            RenderMode::Append => TestStubsTemplate {
                package_name: payload.package_name,
                signatures: payload.signatures,
            }
            .render(),
        };

        rendered.map_err(|e| TestgenError::Render {
            message: format!("{} template: {}", mode.name(), e),
        })
    }
}

/// Append rendered text to a test file, creating it when absent
///
/// Returns the number of bytes written. An empty render still opens (and so
/// creates) the file but writes nothing.
pub fn append_to_artifact(path: &Path, rendered: &str) -> Result<usize> {
    let write_error = |e: std::io::Error| TestgenError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_error)?;

    if rendered.is_empty() {
        return Ok(0);
    }

    file.write_all(rendered.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;

    Ok(rendered.len())
}

/// Render the pending stubs of a reconciliation and write them out
pub fn emit(renderer: &dyn StubRenderer, reconciliation: &Reconciliation<'_>) -> Result<usize> {
    let payload = StubPayload::from(reconciliation);
    let rendered = renderer.render(&payload, reconciliation.mode)?;
    append_to_artifact(&reconciliation.artifact, &rendered)
}
