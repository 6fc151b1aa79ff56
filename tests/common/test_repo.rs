//! TestRepo builder for generation tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use semfora_testgen::{generate, RunSummary, TestgenError, WalkConfig};

/// Builder for creating temporary Go source trees
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new empty test repository
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the path to the test repository root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file inside the repo
    pub fn file(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Add a file with the given content, creating parent directories
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let full_path = self.file(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Add a Go file declaring `package pkg` followed by `body`
    pub fn add_go_file(&self, relative_path: &str, pkg: &str, body: &str) -> &Self {
        self.add_file(relative_path, &format!("package {}\n\n{}", pkg, body))
    }

    /// Read a file inside the repo
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.file(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    /// Whether a file exists inside the repo
    pub fn exists(&self, relative_path: &str) -> bool {
        self.file(relative_path).exists()
    }

    /// Run generation with the default configuration
    pub fn generate(&self) -> Result<RunSummary, TestgenError> {
        generate(self.path(), &WalkConfig::default())
    }

    /// Run generation with a custom configuration
    pub fn generate_with(&self, config: &WalkConfig) -> Result<RunSummary, TestgenError> {
        generate(self.path(), config)
    }

    /// Run generation and expect success
    pub fn generate_ok(&self) -> RunSummary {
        self.generate()
            .unwrap_or_else(|e| panic!("Generation failed: {}", e))
    }

    /// Run the semfora-testgen binary inside the repo
    pub fn run_cli(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_semfora-testgen"))
            .current_dir(self.path())
            .env_remove("TESTGEN_CONFIG")
            .env_remove("RUST_LOG")
            .args(args)
            .output()
    }

    /// Run CLI and expect success, return stdout
    pub fn run_cli_success(&self, args: &[&str]) -> String {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            output.status.success(),
            "CLI command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run CLI and expect failure, return (exit code, stderr)
    pub fn run_cli_failure(&self, args: &[&str]) -> (Option<i32>, String) {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            !output.status.success(),
            "CLI command {:?} should have failed",
            args
        );
        (
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }

    // ========================================================================
    // PRE-BUILT TREES
    // ========================================================================

    /// `math.go` with a single `Add(x int, y int) int`
    pub fn with_math_add(&self) -> &Self {
        self.add_go_file(
            "math.go",
            "calc",
            "func Add(x int, y int) int {\n\treturn x + y\n}\n",
        )
    }

    /// A small module layout with nested packages and non-source files
    pub fn with_module_layout(&self) -> &Self {
        self.add_file("go.mod", "module example.com/demo\n\ngo 1.22\n")
            .add_file("go.sum", "")
            .add_file("README.md", "# demo\n")
            .add_go_file(
                "main.go",
                "main",
                "func main() {}\n\nfunc run(args []string) error {\n\treturn nil\n}\n",
            )
            .add_go_file(
                "internal/store/store.go",
                "store",
                "type Store struct{}\n\nfunc New() *Store {\n\treturn &Store{}\n}\n\nfunc (s *Store) Get(key string) (string, bool) {\n\treturn \"\", false\n}\n",
            )
    }

    /// Signatures whose types span lines, carry comments or are variadic
    pub fn with_composite_signatures(&self) -> &Self {
        self.add_go_file(
            "shapes/struct.go",
            "shapes",
            "func Make() struct {\n\tA int\n\tB string\n} {\n\tpanic(\"unimplemented\")\n}\n",
        )
        .add_go_file(
            "shapes/iface.go",
            "shapes",
            "func Wrap(rc interface {\n\tRead(p []byte) (int, error)\n\tClose() error\n}) error {\n\treturn nil\n}\n",
        )
        .add_go_file(
            "shapes/commented.go",
            "shapes",
            "func Load(cfg struct {\n\tA int // first\n\t/* second */ B string\n}) {}\n",
        )
        .add_go_file(
            "shapes/variadic.go",
            "shapes",
            "func Sum(label string, xs ...int) int {\n\treturn 0\n}\n",
        )
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
