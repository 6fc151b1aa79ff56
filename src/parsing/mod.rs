//! Tree-sitter parsing for Go source files.
//!
//! Tree-sitter recovers from syntax errors instead of failing, so a tree that
//! contains error or missing nodes is turned into a parse failure here. The
//! generator never works from a partially understood file.
//!
//! # Example
//!
//! ```ignore
//! use semfora_testgen::parsing::parse_go;
//! use std::path::Path;
//!
//! let tree = parse_go(Path::new("math.go"), "package calc\n")?;
//! assert_eq!(tree.root_node().kind(), "source_file");
//! ```

use std::path::Path;

use tree_sitter::{Language, Node, Tree};

use crate::error::{Result, TestgenError};

/// Parse Go source into a syntax tree, rejecting trees with syntax errors.
///
/// # Errors
///
/// Returns `TestgenError::Parse` if:
/// - The grammar cannot be loaded into the parser
/// - Tree-sitter gives up on the input
/// - The resulting tree contains an error or missing node
pub fn parse_go(file_path: &Path, source: &str) -> Result<Tree> {
    let language: Language = tree_sitter_go::LANGUAGE.into();
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| TestgenError::Parse {
            path: file_path.to_path_buf(),
            message: format!("failed to load Go grammar: {:?}", e),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| TestgenError::Parse {
            path: file_path.to_path_buf(),
            message: "parser returned no tree".to_string(),
        })?;

    let root = tree.root_node();
    if root.has_error() {
        let message = match first_error_node(root) {
            Some(node) => describe_error(&node),
            None => "syntax error".to_string(),
        };
        return Err(TestgenError::Parse {
            path: file_path.to_path_buf(),
            message,
        });
    }

    Ok(tree)
}

/// Find the first error or missing node in document order
fn first_error_node(root: Node<'_>) -> Option<Node<'_>> {
    let mut node = root;

    'descend: loop {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.is_error() || child.is_missing() || child.has_error() {
                node = child;
                continue 'descend;
            }
        }

        // has_error() was set but no child carries it
        return if node.has_error() { Some(node) } else { None };
    }
}

fn describe_error(node: &Node) -> String {
    let pos = node.start_position();
    if node.is_missing() {
        format!(
            "missing `{}` at line {}, column {}",
            node.kind(),
            pos.row + 1,
            pos.column + 1
        )
    } else {
        format!("syntax error at line {}, column {}", pos.row + 1, pos.column + 1)
    }
}
