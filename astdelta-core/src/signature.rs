//! Canonical structural signatures for grammar subtrees.
//!
//! A signature is a deterministic serialization of a node's syntactic
//! content: its kind, its children (recursively signed the same way), and
//! the literal text of leaf tokens. Positions, whitespace, and comments
//! never enter the signature, so two constructs that differ only in
//! formatting sign identically, while renaming an identifier or changing
//! a literal produces a different signature.
//!
//! Signatures are the sole equality notion used by the sequence aligner;
//! they are never displayed.

use tree_sitter::Node;

use crate::parser::helpers::get_node_text;

/// Compute the canonical signature of a subtree.
pub fn signature(node: &Node, source: &str) -> String {
    sign(node, source).unwrap_or_default()
}

fn sign(node: &Node, source: &str) -> Option<String> {
    // Comments live in the concrete tree but carry no structure.
    if node.kind() == "comment" {
        return None;
    }

    if node.child_count() == 0 {
        let text = get_node_text(node, source);
        if node.is_named() {
            // Identifiers, numbers, string contents: the text is the value.
            return Some(format!("{}={:?}", node.kind(), text));
        }
        // Anonymous tokens (keywords, operators, punctuation): the kind
        // is the token itself.
        return Some(format!("{:?}", text));
    }

    let mut cursor = node.walk();
    let parts: Vec<String> = node
        .children(&mut cursor)
        .filter_map(|child| sign(&child, source))
        .collect();

    Some(format!("{}({})", node.kind(), parts.join(",")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse(source: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    fn first_statement_signature(source: &str) -> String {
        let tree = parse(source);
        let root = tree.root_node();
        let node = root.named_child(0).unwrap();
        signature(&node, source)
    }

    #[test]
    fn test_formatting_insensitive() {
        let compact = first_statement_signature("def f(a, b):\n    return a + b\n");
        let airy = first_statement_signature("def f(a,  b):\n        return a + b\n\n\n");
        assert_eq!(compact, airy);
    }

    #[test]
    fn test_identifier_rename_changes_signature() {
        let original = first_statement_signature("def f():\n    x = 1\n    return x\n");
        let renamed = first_statement_signature("def f():\n    y = 1\n    return y\n");
        assert_ne!(original, renamed);
    }

    #[test]
    fn test_literal_change_changes_signature() {
        let one = first_statement_signature("x = 1\n");
        let two = first_statement_signature("x = 2\n");
        assert_ne!(one, two);
    }

    #[test]
    fn test_operator_change_changes_signature() {
        let add = first_statement_signature("x = a + b\n");
        let sub = first_statement_signature("x = a - b\n");
        assert_ne!(add, sub);
    }

    #[test]
    fn test_comments_do_not_change_signature() {
        let plain = first_statement_signature("def f():\n    return 1\n");
        let commented = first_statement_signature("def f():\n    # note\n    return 1\n");
        assert_eq!(plain, commented);
    }
}
