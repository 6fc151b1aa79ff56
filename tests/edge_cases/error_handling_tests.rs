//! Error Handling and Edge Case Tests
//!
//! Fatal conditions abort the whole run; files without functions still get a
//! header-only test file.

use semfora_testgen::TestgenError;

use crate::common::{assert_stubs, TestRepo};

// ============================================================================
// FILES WITHOUT FUNCTIONS
// ============================================================================

#[test]
fn test_file_without_functions_gets_header_only() {
    let repo = TestRepo::new();
    repo.add_go_file("consts.go", "calc", "const Pi = 3.14\n\ntype Number float64\n");

    let summary = repo.generate_ok();
    assert_eq!(summary.artifacts_created, 1);
    assert_eq!(summary.stubs_written, 0);

    let content = repo.read("consts_test.go");
    assert!(content.starts_with("package calc"));
    assert!(!content.contains("func "));

    let second = repo.generate_ok();
    assert_eq!(second.artifacts_unchanged, 1);
    assert_eq!(repo.read("consts_test.go"), content);
}

#[test]
fn test_empty_directory() {
    let repo = TestRepo::new();
    std::fs::create_dir_all(repo.file("empty/nested")).unwrap();

    let summary = repo.generate_ok();
    assert_eq!(summary.files_scanned, 0);
}

#[test]
fn test_comments_only_file_with_package() {
    let repo = TestRepo::new();
    repo.add_file("doc.go", "// Package calc does arithmetic.\npackage calc\n");

    repo.generate_ok();
    assert_stubs(&repo.file("doc_test.go"), &[]);
}

// ============================================================================
// FATAL ERRORS
// ============================================================================

#[test]
fn test_syntax_error_is_fatal() {
    let repo = TestRepo::new();
    repo.add_file("bad.go", "package calc\n\nfunc Broken(x int {\n");

    let err = repo.generate().unwrap_err();
    match err {
        TestgenError::Parse { path, .. } => assert!(path.ends_with("bad.go")),
        other => panic!("expected parse error, got {:?}", other),
    }
    assert!(!repo.exists("bad_test.go"));
}

#[test]
fn test_missing_package_clause_is_fatal() {
    let repo = TestRepo::new();
    repo.add_file("nopkg.go", "func Lonely() {}\n");

    let err = repo.generate().unwrap_err();
    assert!(matches!(err, TestgenError::Parse { .. }), "{:?}", err);
}

#[test]
fn test_corrupt_existing_test_file_is_fatal() {
    let repo = TestRepo::new();
    repo.with_math_add();
    repo.add_file("math_test.go", "package calc\n\nfunc Test_calc_Add( {\n");

    let err = repo.generate().unwrap_err();
    match err {
        TestgenError::Parse { path, .. } => assert!(path.ends_with("math_test.go")),
        other => panic!("expected parse error, got {:?}", other),
    }
    assert_eq!(
        repo.read("math_test.go"),
        "package calc\n\nfunc Test_calc_Add( {\n"
    );
}

#[test]
fn test_missing_root_is_traversal_error() {
    let repo = TestRepo::new();
    let config = semfora_testgen::WalkConfig::default();

    let err = semfora_testgen::generate(&repo.file("missing"), &config).unwrap_err();
    assert!(matches!(err, TestgenError::Traversal { .. }), "{:?}", err);
}

#[cfg(unix)]
#[test]
fn test_read_only_directory_is_write_error() {
    use std::os::unix::fs::PermissionsExt;

    let repo = TestRepo::new();
    repo.add_go_file("locked/lock.go", "lock", "func Lock() {}\n");

    let locked = repo.file("locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores permission bits, nothing to assert there
    if std::fs::write(locked.join("write_check"), "").is_ok() {
        let _ = std::fs::remove_file(locked.join("write_check"));
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let err = repo.generate().unwrap_err();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
    assert!(matches!(err, TestgenError::Write { .. }), "{:?}", err);
}
