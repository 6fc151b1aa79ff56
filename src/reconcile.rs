//! Reconciliation of freshly extracted signatures against an existing test file
//!
//! There is no manifest: the names already generated are re-derived by
//! parsing the existing test file itself. A stub whose name was edited by hand
//! is therefore no longer recognised and gets generated again.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::extract::extract_file;
use crate::schema::{stub_name, FunctionSignature, RenderMode, SourceUnit};

/// Outcome of reconciling one source file with its test artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation<'a> {
    /// Test file to create or append to
    pub artifact: PathBuf,

    /// Fresh when the artifact does not exist yet
    pub mode: RenderMode,

    /// Package name used for stub names and the file header
    pub package_name: &'a str,

    /// Signatures still lacking a stub, in declaration order
    pub pending: Vec<&'a FunctionSignature>,
}

impl Reconciliation<'_> {
    /// True when rendering would not add any stub
    pub fn is_noop(&self) -> bool {
        self.mode == RenderMode::Append && self.pending.is_empty()
    }
}

/// Compute which signatures of `unit` still need a stub
///
/// The existing artifact, if any, is parsed to completion here, before the
/// renderer opens it for appending.
pub fn reconcile(unit: &SourceUnit) -> Result<Reconciliation<'_>> {
    let artifact = unit.artifact_path();

    let (mode, existing) = if artifact.exists() {
        let generated = existing_function_names(&artifact)?;
        tracing::debug!(
            "{} already defines {} function(s)",
            artifact.display(),
            generated.len()
        );
        (RenderMode::Append, generated)
    } else {
        (RenderMode::Fresh, HashSet::new())
    };

    let mut pending: Vec<&FunctionSignature> = Vec::new();
    for signature in &unit.signatures {
        let name = stub_name(&unit.package_name, &signature.name);
        if existing.contains(&name) {
            continue;
        }
        if pending.iter().any(|p| p.name == signature.name) {
            tracing::warn!(
                "{}: {} is declared more than once, generating a single stub",
                unit.path().display(),
                name
            );
            continue;
        }
        pending.push(signature);
    }

    Ok(Reconciliation {
        artifact,
        mode,
        package_name: &unit.package_name,
        pending,
    })
}

/// Names of every top-level function in an existing test file
fn existing_function_names(artifact: &Path) -> Result<HashSet<String>> {
    let unit = extract_file(artifact)?;
    Ok(unit.signatures.into_iter().map(|s| s.name).collect())
}
