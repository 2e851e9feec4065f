//! Python top-level declaration extractor using tree-sitter.

use tree_sitter::{Node, Parser};

use super::helpers::{node_span, slice_span};
use crate::error::{DiffError, Result};
use crate::signature::signature;
use crate::types::{NodeInfo, NodeKind};

/// Parse Python source and return one `NodeInfo` per top-level
/// declaration, in source order.
///
/// A tree containing ERROR or MISSING nodes is treated as a syntax
/// error: without a clean parse there is nothing meaningful to align,
/// so the whole comparison fails.
pub fn parse(source: &str) -> Result<Vec<NodeInfo>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| DiffError::Parser {
            message: format!("failed to set Python language: {}", e),
        })?;

    let tree = parser.parse(source, None).ok_or_else(|| DiffError::Parser {
        message: "failed to parse Python source".to_string(),
    })?;
    let root = tree.root_node();

    if root.has_error() {
        let (line, column) = first_error_position(&root);
        return Err(DiffError::Syntax { line, column });
    }

    let lines: Vec<&str> = source.lines().collect();

    let mut nodes = Vec::new();
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        if child.kind() == "comment" {
            continue;
        }
        nodes.push(build_node_info(&child, source, &lines));
    }

    Ok(nodes)
}

/// Build the descriptor for one top-level node: signature, span,
/// recovered source text, and kind tag.
///
/// Position data is optional by contract; a node without it gets a
/// `None` span, and a span pointing past the end of the file gets a
/// `None` snippet. Neither aborts the run.
pub fn build_node_info(node: &Node, source: &str, lines: &[&str]) -> NodeInfo {
    let span = Some(node_span(node));
    let source_text = span.as_ref().and_then(|s| slice_span(lines, s));
    NodeInfo::new(signature(node, source), span, source_text, classify_kind(node))
}

/// Tag a top-level node with its syntactic category.
///
/// An `expression_statement` that wraps a bare assignment is tagged as
/// an assignment, matching how Python's own AST categorizes `x = 1` at
/// module scope.
fn classify_kind(node: &Node) -> NodeKind {
    if node.kind() == "expression_statement" {
        if let Some(inner) = node.named_child(0) {
            if matches!(inner.kind(), "assignment" | "augmented_assignment") {
                return NodeKind::Assignment;
            }
        }
    }
    NodeKind::from_grammar(node.kind())
}

/// Position of the first ERROR or MISSING node, 1-based line.
fn first_error_position(root: &Node) -> (u32, u32) {
    fn walk(node: &Node) -> Option<(u32, u32)> {
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            return Some((pos.row as u32 + 1, pos.column as u32));
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if let Some(found) = walk(&child) {
                return Some(found);
            }
        }
        None
    }

    walk(root).unwrap_or((1, 0))
}
