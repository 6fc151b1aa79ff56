//! CLI integration tests
//!
//! Run the compiled binary against temporary trees, checking flags, output
//! formats and exit codes.
