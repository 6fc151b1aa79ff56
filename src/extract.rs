//! Signature extraction from Go source files
//!
//! Only the top level of the file is inspected: the `package` clause and
//! function/method declarations. Types are recorded as written, never
//! resolved, and method receivers are dropped so a method is treated exactly
//! like a free function with the same name.

use std::fs;
use std::path::Path;

use tree_sitter::Node;

use crate::error::{Result, TestgenError};
use crate::parsing::parse_go;
use crate::schema::{FunctionSignature, SourceUnit};

/// Top-level declarations the extractor cares about
enum TopLevelDecl<'tree> {
    Package(Node<'tree>),
    Function(Node<'tree>),
    Other,
}

impl<'tree> TopLevelDecl<'tree> {
    fn classify(node: Node<'tree>) -> Self {
        match node.kind() {
            "package_clause" => Self::Package(node),
            "function_declaration" | "method_declaration" => Self::Function(node),
            _ => Self::Other,
        }
    }
}

/// Read and extract a source file from disk
pub fn extract_file(path: &Path) -> Result<SourceUnit> {
    let source = fs::read_to_string(path).map_err(|e| TestgenError::Parse {
        path: path.to_path_buf(),
        message: format!("unable to read file: {}", e),
    })?;

    extract_source(path, &source)
}

/// Extract the package name and function signatures from Go source text
///
/// `path` only fills in the directory and file name of the result and
/// labels errors; nothing is read from disk.
pub fn extract_source(path: &Path, source: &str) -> Result<SourceUnit> {
    let tree = parse_go(path, source)?;
    let root = tree.root_node();

    let mut package_name = None;
    let mut signatures = Vec::new();

    let mut cursor = root.walk();
    for node in root.named_children(&mut cursor) {
        match TopLevelDecl::classify(node) {
            TopLevelDecl::Package(clause) => {
                package_name = package_identifier(&clause, source);
            }
            TopLevelDecl::Function(decl) => {
                signatures.push(function_signature(path, &decl, source)?);
            }
            TopLevelDecl::Other => {}
        }
    }

    let package_name = package_name.ok_or_else(|| TestgenError::Parse {
        path: path.to_path_buf(),
        message: "missing package clause".to_string(),
    })?;

    tracing::debug!(
        "Extracted {} function(s) from {} (package {})",
        signatures.len(),
        path.display(),
        package_name
    );

    Ok(SourceUnit {
        directory: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        package_name,
        signatures,
    })
}

fn package_identifier(clause: &Node, source: &str) -> Option<String> {
    let mut cursor = clause.walk();
    for child in clause.named_children(&mut cursor) {
        if child.kind() == "package_identifier" {
            return Some(node_text(&child, source));
        }
    }
    None
}

fn function_signature(path: &Path, decl: &Node, source: &str) -> Result<FunctionSignature> {
    let name_node = decl
        .child_by_field_name("name")
        .ok_or_else(|| TestgenError::Parse {
            path: path.to_path_buf(),
            message: format!(
                "function declaration without a name at line {}",
                decl.start_position().row + 1
            ),
        })?;

    let mut signature = FunctionSignature::new(node_text(&name_node, source));

    if let Some(params) = decl.child_by_field_name("parameters") {
        signature.inputs = parameter_types(&params, source);
    }

    if let Some(result) = decl.child_by_field_name("result") {
        signature.outputs = if result.kind() == "parameter_list" {
            parameter_types(&result, source)
        } else {
            vec![type_text(&result, source)]
        };
    }

    Ok(signature)
}

/// Expand a parameter list into one type entry per declared parameter
///
/// `a, b int` contributes two entries; an unnamed parameter contributes one.
fn parameter_types(list: &Node, source: &str) -> Vec<String> {
    let mut types = Vec::new();
    let mut cursor = list.walk();

    for param in list.named_children(&mut cursor) {
        let Some(type_node) = param.child_by_field_name("type") else {
            continue;
        };

        match param.kind() {
            "parameter_declaration" => {
                let ty = type_text(&type_node, source);
                let mut name_cursor = param.walk();
                let names = param
                    .children_by_field_name("name", &mut name_cursor)
                    .count()
                    .max(1);
                types.extend(std::iter::repeat(ty).take(names));
            }
            "variadic_parameter_declaration" => {
                types.push(format!("...{}", type_text(&type_node, source)));
            }
            _ => {}
        }
    }

    types
}

fn node_text(node: &Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

/// Single-line text of a type expression, rebuilt from its syntax nodes
///
/// Comments are dropped and the members of a braced list (struct fields,
/// interface methods) are joined with `; `, so the result stays valid Go
/// when written on one line: `struct {\n\tA int\n}` becomes `struct{A int}`.
fn type_text(node: &Node, source: &str) -> String {
    match node.kind() {
        "comment" => return String::new(),
        "raw_string_literal" | "interpreted_string_literal" => return node_text(node, source),
        _ => {}
    }
    if node.child_count() == 0 {
        return node_text(node, source);
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node
        .children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();

    match children.iter().position(|child| child.kind() == "{") {
        Some(open) => {
            let members: Vec<String> = children[open + 1..]
                .iter()
                .filter(|child| child.is_named())
                .map(|child| type_text(child, source))
                .filter(|member| !member.is_empty())
                .collect();
            format!("{}{{{}}}", join_spaced(&children[..open], source), members.join("; "))
        }
        None => join_spaced(&children, source),
    }
}

/// Concatenate rendered nodes, keeping one space wherever the source had a gap
fn join_spaced(nodes: &[Node], source: &str) -> String {
    let mut text = String::new();
    let mut prev_end = None;

    for node in nodes {
        let piece = type_text(node, source);
        if piece.is_empty() {
            continue;
        }
        if let Some(end) = prev_end {
            if node.start_byte() > end && !piece.starts_with('{') {
                text.push(' ');
            }
        }
        text.push_str(&piece);
        prev_end = Some(node.end_byte());
    }

    text
}
