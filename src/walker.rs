//! Lazy depth-first walk over the eligible source files of a tree
//!
//! Directories are descended into as soon as they are encountered, so the
//! order follows filesystem enumeration order within each directory. Any
//! directory that cannot be read ends the walk with a traversal error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::WalkConfig;
use crate::error::{Result, TestgenError};

/// Iterator over eligible source files under a root directory
pub struct TreeWalker<'a> {
    config: &'a WalkConfig,
    root: Option<PathBuf>,
    stack: Vec<(PathBuf, fs::ReadDir)>,
}

impl<'a> TreeWalker<'a> {
    pub fn new(root: &Path, config: &'a WalkConfig) -> Self {
        Self {
            config,
            root: Some(root.to_path_buf()),
            stack: Vec::new(),
        }
    }

    /// Record a traversal failure and stop yielding further entries
    fn fail(&mut self, path: PathBuf, err: std::io::Error) -> Option<Result<PathBuf>> {
        self.stack.clear();
        Some(Err(TestgenError::Traversal {
            path,
            message: err.to_string(),
        }))
    }

    fn open_dir(&mut self, path: PathBuf) -> Option<Result<PathBuf>> {
        match fs::read_dir(&path) {
            Ok(entries) => {
                tracing::debug!("Entering {}", path.display());
                self.stack.push((path, entries));
                None
            }
            Err(e) => self.fail(path, e),
        }
    }
}

impl Iterator for TreeWalker<'_> {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            if let Some(err) = self.open_dir(root) {
                return Some(err);
            }
        }

        loop {
            let (dir, entries) = self.stack.last_mut()?;

            let entry = match entries.next() {
                None => {
                    self.stack.pop();
                    continue;
                }
                Some(Err(e)) => {
                    let dir = dir.clone();
                    return self.fail(dir, e);
                }
                Some(Ok(entry)) => entry,
            };

            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();

            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(e) => return self.fail(path, e),
            };

            if file_type.is_dir() {
                if self.config.is_excluded_dir(&name) {
                    tracing::debug!("Skipping excluded directory {}", path.display());
                    continue;
                }
                if let Some(err) = self.open_dir(path) {
                    return Some(err);
                }
                continue;
            }

            if !self.config.is_eligible_file(&name) {
                tracing::trace!("Skipping ineligible file {}", path.display());
                continue;
            }

            return Some(Ok(path));
        }
    }
}

/// Walk `root` and yield every eligible source file
pub fn walk<'a>(root: &Path, config: &'a WalkConfig) -> TreeWalker<'a> {
    TreeWalker::new(root, config)
}
