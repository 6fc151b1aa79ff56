//! Per-file generation pipeline: extract, reconcile, render
//!
//! Each eligible file moves through `Discovered -> Extracted -> Reconciled ->
//! Rendered`. Files are independent; the only state carried between them is
//! the run summary. The first error of any kind ends the run.

use std::path::Path;

use crate::config::WalkConfig;
use crate::error::Result;
use crate::extract::extract_file;
use crate::reconcile::reconcile;
use crate::render::{emit, StubRenderer, TemplateRenderer};
use crate::schema::{RenderMode, RunSummary};
use crate::walker::walk;

/// What happened to a single source file's test artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Test file created with this many stubs
    Created { stubs: usize },
    /// Existing test file received this many new stubs
    Extended { stubs: usize },
    /// Existing test file already covered every function
    Unchanged,
}

/// Drives generation over a whole tree
pub struct Generator<'a> {
    config: &'a WalkConfig,
    renderer: Box<dyn StubRenderer + 'a>,
    dry_run: bool,
}

impl<'a> Generator<'a> {
    /// Generator using the built-in templates
    pub fn new(config: &'a WalkConfig) -> Self {
        Self::with_renderer(config, TemplateRenderer)
    }

    pub fn with_renderer(config: &'a WalkConfig, renderer: impl StubRenderer + 'a) -> Self {
        Self {
            config,
            renderer: Box::new(renderer),
            dry_run: false,
        }
    }

    /// Reconcile every file but write nothing
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Generate test stubs for every eligible file under `root`
    pub fn run(&self, root: &Path) -> Result<RunSummary> {
        let mut summary = RunSummary {
            dry_run: self.dry_run,
            ..Default::default()
        };

        for path in walk(root, self.config) {
            let path = path?;
            let outcome = self.process_file(&path)?;

            summary.files_scanned += 1;
            match outcome {
                FileOutcome::Created { stubs } => {
                    summary.artifacts_created += 1;
                    summary.stubs_written += stubs;
                }
                FileOutcome::Extended { stubs } => {
                    summary.artifacts_extended += 1;
                    summary.stubs_written += stubs;
                }
                FileOutcome::Unchanged => summary.artifacts_unchanged += 1,
            }
        }

        Ok(summary)
    }

    /// Run the pipeline for one source file
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome> {
        let unit = extract_file(path)?;
        let reconciliation = reconcile(&unit)?;
        let stubs = reconciliation.pending.len();

        if reconciliation.is_noop() {
            tracing::debug!("{} is up to date", reconciliation.artifact.display());
            return Ok(FileOutcome::Unchanged);
        }

        if self.dry_run {
            tracing::info!(
                "Would {} {} with {} stub(s)",
                match reconciliation.mode {
                    RenderMode::Fresh => "create",
                    RenderMode::Append => "extend",
                },
                reconciliation.artifact.display(),
                stubs
            );
        } else {
            let bytes = emit(self.renderer.as_ref(), &reconciliation)?;
            tracing::info!(
                "{} {} ({} stub(s), {} bytes)",
                match reconciliation.mode {
                    RenderMode::Fresh => "Created",
                    RenderMode::Append => "Extended",
                },
                reconciliation.artifact.display(),
                stubs,
                bytes
            );
        }

        Ok(match reconciliation.mode {
            RenderMode::Fresh => FileOutcome::Created { stubs },
            RenderMode::Append => FileOutcome::Extended { stubs },
        })
    }
}

/// Generate stubs under `root` with the built-in templates
pub fn generate(root: &Path, config: &WalkConfig) -> Result<RunSummary> {
    Generator::new(config).run(root)
}
