//! Helper functions for tree-sitter AST navigation.

use tree_sitter::Node;

use crate::types::SourceSpan;

/// Get the text content of a node.
pub fn get_node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    let start = node.start_byte();
    let end = node.end_byte();
    if start < source.len() && end <= source.len() && start < end {
        &source[start..end]
    } else {
        ""
    }
}

/// Source span of a node, with 1-based, end-inclusive line numbers.
///
/// Grammar end positions that land at column 0 of the line after the
/// construct are pulled back so `end_line` names the last line that
/// actually contains it.
pub fn node_span(node: &Node) -> SourceSpan {
    let start = node.start_position();
    let end = node.end_position();

    let (end_row, end_col) = if end.column == 0 && end.row > start.row {
        (end.row - 1, end.column)
    } else {
        (end.row, end.column)
    };

    SourceSpan::new(
        start.row as u32 + 1,
        start.column as u32,
        end_row as u32 + 1,
        end_col as u32,
    )
}

/// Recover the literal text of a span by slicing the file's lines.
///
/// Single-line spans return that line verbatim; multi-line spans join
/// with a newline. Returns `None` when the span's start line falls past
/// the end of the file, so stale position data degrades to a missing
/// snippet instead of aborting the comparison.
pub fn slice_span(lines: &[&str], span: &SourceSpan) -> Option<String> {
    let start = span.start_line.checked_sub(1)? as usize;
    let end = span.end_line.checked_sub(1)? as usize;

    if start >= lines.len() {
        return None;
    }

    let end = end.min(lines.len() - 1);
    if start == end {
        Some(lines[start].to_string())
    } else {
        Some(lines[start..=end].join("\n"))
    }
}
