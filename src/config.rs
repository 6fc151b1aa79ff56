//! Exclusion configuration for the tree walk.
//!
//! Loaded from `.testgen.toml` at the scanned root when present, or from an
//! explicit `--config` path. Every key is optional and falls back to the
//! defaults below.

use crate::error::TestgenError;
use crate::schema::TEST_FILE_SUFFIX;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Config file looked up at the root of the scanned tree
pub const CONFIG_FILE_NAME: &str = ".testgen.toml";

/// Which files and directories the walker visits
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WalkConfig {
    /// Directory names never descended into (exact match)
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// File name fragments that exclude a file (substring match)
    #[serde(default = "default_excluded_files")]
    pub excluded_files: Vec<String>,

    /// Extensions that exclude a file, without the leading dot
    #[serde(default)]
    pub excluded_extensions: Vec<String>,

    /// Extensions treated as source files, without the leading dot
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
}

fn default_excluded_dirs() -> Vec<String> {
    vec![".git".to_string()]
}

fn default_excluded_files() -> Vec<String> {
    ["go.mod", "go.sum", "go.work"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_source_extensions() -> Vec<String> {
    vec!["go".to_string()]
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: default_excluded_dirs(),
            excluded_files: default_excluded_files(),
            excluded_extensions: Vec::new(),
            source_extensions: default_source_extensions(),
        }
    }
}

impl WalkConfig {
    /// Load configuration for a scan rooted at `root`
    ///
    /// An explicit path must exist; the implicit `.testgen.toml` is optional.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, TestgenError> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(TestgenError::Config {
                        message: format!("Config file not found: {}", path.display()),
                    });
                }
                Self::load_from(path)
            }
            None => Self::load_from(&root.join(CONFIG_FILE_NAME)),
        }
    }

    /// Load configuration from a specific path, defaulting when it is absent
    pub fn load_from(path: &Path) -> Result<Self, TestgenError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| TestgenError::Config {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        Self::from_toml(&content).map_err(|e| TestgenError::Config {
            message: format!("Failed to parse {}: {}", path.display(), e),
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Whether a directory with this name is skipped entirely
    pub fn is_excluded_dir(&self, dir_name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == dir_name)
    }

    /// Eligibility predicate for a regular file
    ///
    /// Test artifacts (`<stem>_test.<ext>`) are never eligible, whatever the
    /// configured lists contain.
    pub fn is_eligible_file(&self, file_name: &str) -> bool {
        let path = Path::new(file_name);
        if path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(TEST_FILE_SUFFIX))
        {
            return false;
        }

        if self
            .excluded_files
            .iter()
            .any(|pattern| file_name.contains(pattern.as_str()))
        {
            return false;
        }

        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext,
            None => return false,
        };

        if self.excluded_extensions.iter().any(|e| e == ext) {
            return false;
        }

        self.source_extensions.iter().any(|e| e == ext)
    }
}
