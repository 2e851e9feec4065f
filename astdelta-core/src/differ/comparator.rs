//! Comparator logic: the one-call pipeline over two source texts.

use crate::align::align;
use crate::differ::changes::StructuralDiff;
use crate::differ::classifier::classify;
use crate::error::Result;
use crate::parser::parse_source;
use crate::types::NodeInfo;

/// Compare two versions of a source file structurally.
///
/// Parses both texts, aligns their top-level declarations by canonical
/// signature, and classifies the edit script into change records. The
/// whole pipeline is a single stateless pass: two immutable inputs in,
/// one immutable result out. A parse failure on either side aborts the
/// comparison with no partial result.
pub fn compare_sources(original: &str, modified: &str, language: &str) -> Result<StructuralDiff> {
    let original_nodes = parse_source(original, language)?;
    let modified_nodes = parse_source(modified, language)?;
    Ok(compare_nodes(&original_nodes, &modified_nodes))
}

/// Align and classify two already-built declaration lists.
pub fn compare_nodes(
    original_nodes: &[NodeInfo],
    modified_nodes: &[NodeInfo],
) -> StructuralDiff {
    let original_sigs: Vec<&str> = original_nodes
        .iter()
        .map(|n| n.signature.as_str())
        .collect();
    let modified_sigs: Vec<&str> = modified_nodes
        .iter()
        .map(|n| n.signature.as_str())
        .collect();

    let opcodes = align(&original_sigs, &modified_sigs);

    let mut diff = StructuralDiff::new();
    for change in classify(&opcodes, original_nodes, modified_nodes) {
        diff.add_change(change);
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differ::changes::Change;
    use crate::error::DiffError;
    use crate::types::NodeKind;

    #[test]
    fn test_identity_law() {
        let source = "import os\n\ndef f(a):\n    return a + 1\n\nclass A:\n    pass\n";
        let diff = compare_sources(source, source, "python").unwrap();
        assert!(diff.is_identical());
        assert_eq!(diff.summary.text(), "no changes");
    }

    #[test]
    fn test_formatting_only_difference_is_identical() {
        let original = "def f(a, b):\n    return a + b\n";
        let modified = "def f(a,  b):\n        return a + b\n\n\n";
        let diff = compare_sources(original, modified, "python").unwrap();
        assert!(diff.is_identical());
    }

    #[test]
    fn test_identifier_rename_is_modified() {
        let original = "def f():\n    x = 1\n    return x\n";
        let modified = "def f():\n    y = 1\n    return y\n";
        let diff = compare_sources(original, modified, "python").unwrap();

        assert_eq!(diff.change_count(), 1);
        assert_eq!(diff.changes[0].change_type(), "modified");
    }

    #[test]
    fn test_end_to_end_renamed_function() {
        let original = "def f():\n    return 1\n\ndef g():\n    return 2\n";
        let modified = "def f():\n    return 1\n\ndef h():\n    return 2\n";
        let diff = compare_sources(original, modified, "python").unwrap();

        assert_eq!(diff.summary.added, 0);
        assert_eq!(diff.summary.deleted, 0);
        assert_eq!(diff.summary.modified, 1);
        match &diff.changes[0] {
            Change::Modified {
                original_index,
                modified_index,
                kind_transition,
                ..
            } => {
                assert_eq!(*original_index, 1);
                assert_eq!(*modified_index, 1);
                assert_eq!(kind_transition.from, NodeKind::FunctionDefinition);
                assert_eq!(kind_transition.to, NodeKind::FunctionDefinition);
            }
            other => panic!("expected Modified, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_transition_between_declaration_kinds() {
        let original = "def f():\n    return 1\n\ndef old():\n    return 0\n";
        let modified = "def f():\n    return 1\n\nNEW = 3\n";
        let diff = compare_sources(original, modified, "python").unwrap();

        assert_eq!(diff.summary.modified, 1);
        // A function replaced by an assignment is one Modified with a
        // kind transition, reported at matching positions.
        match &diff.changes[0] {
            Change::Modified { kind_transition, .. } => {
                assert_eq!(kind_transition.from, NodeKind::FunctionDefinition);
                assert_eq!(kind_transition.to, NodeKind::Assignment);
            }
            other => panic!("expected Modified, got {:?}", other),
        }
    }

    #[test]
    fn test_pure_deletion_reports_span_and_text() {
        let original = "def f():\n    return 1\n\ndef g():\n    return 2\n";
        let modified = "def f():\n    return 1\n";
        let diff = compare_sources(original, modified, "python").unwrap();

        assert_eq!(diff.summary.deleted, 1);
        match &diff.changes[0] {
            Change::Deleted {
                original_index,
                original_span,
                original_text,
                kind,
            } => {
                assert_eq!(*original_index, 1);
                assert_eq!(original_span.unwrap().start_line, 4);
                assert_eq!(original_text.as_deref(), Some("def g():\n    return 2"));
                assert_eq!(*kind, NodeKind::FunctionDefinition);
            }
            other => panic!("expected Deleted, got {:?}", other),
        }
    }

    #[test]
    fn test_completeness_of_index_coverage() {
        let original = "a = 1\nb = 2\nc = 3\nd = 4\n";
        let modified = "a = 1\nx = 9\nd = 4\ne = 5\n";
        let original_nodes = parse_source(original, "python").unwrap();
        let modified_nodes = parse_source(modified, "python").unwrap();
        let diff = compare_nodes(&original_nodes, &modified_nodes);

        // Every original index is either covered by a change or aligned
        // as equal; the same holds on the modified side.
        let mut covered_original: Vec<usize> =
            diff.changes.iter().filter_map(|c| c.original_index()).collect();
        let mut covered_modified: Vec<usize> =
            diff.changes.iter().filter_map(|c| c.modified_index()).collect();
        covered_original.sort_unstable();
        covered_modified.sort_unstable();
        covered_original.dedup();
        covered_modified.dedup();

        // a and d survive unchanged; b and c collapse against x, e is new.
        assert_eq!(covered_original, vec![1, 2]);
        assert_eq!(covered_modified, vec![1, 3]);
    }

    #[test]
    fn test_order_preservation() {
        let original = "a = 1\nb = 2\nc = 3\nd = 4\ne = 5\n";
        let modified = "a = 1\nc = 3\nz = 9\ne = 5\nf = 6\n";
        let diff = compare_sources(original, modified, "python").unwrap();

        // Changes never appear out of source order: sort key is the
        // original position, with pure additions slotted by modified
        // position.
        let keys: Vec<(usize, usize)> = diff
            .changes
            .iter()
            .map(|c| {
                (
                    c.original_index().unwrap_or(usize::MAX),
                    c.modified_index().unwrap_or(usize::MAX),
                )
            })
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_syntax_error_propagates() {
        let err = compare_sources("def f(:\n", "x = 1\n", "python").unwrap_err();
        assert!(matches!(err, DiffError::Syntax { .. }));

        let err = compare_sources("x = 1\n", "def f(:\n", "python").unwrap_err();
        assert!(matches!(err, DiffError::Syntax { .. }));
    }

    #[test]
    fn test_empty_files_are_identical() {
        let diff = compare_sources("", "", "python").unwrap();
        assert!(diff.is_identical());
    }
}
