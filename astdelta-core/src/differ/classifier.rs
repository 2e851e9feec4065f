//! Turns an opcode stream into typed change records.
//!
//! A pure re-interpretation of the aligner's output: it never inspects
//! node content beyond what `NodeInfo` already carries, and the emitted
//! changes preserve opcode order (and ascending index order within one
//! opcode).

use crate::align::{OpTag, Opcode};
use crate::differ::changes::{Change, KindTransition};
use crate::types::NodeInfo;

/// Classify an edit script into one change per affected declaration.
pub fn classify(
    opcodes: &[Opcode],
    original_nodes: &[NodeInfo],
    modified_nodes: &[NodeInfo],
) -> Vec<Change> {
    let mut changes = Vec::new();

    for op in opcodes {
        match op.tag {
            OpTag::Equal => {}
            OpTag::Delete => {
                for idx in op.i1..op.i2 {
                    changes.push(deleted(idx, &original_nodes[idx]));
                }
            }
            OpTag::Insert => {
                for idx in op.j1..op.j2 {
                    changes.push(added(idx, &modified_nodes[idx]));
                }
            }
            OpTag::Replace => {
                // Pair matched positions in lock-step, then emit the
                // longer side's leftover as pure deletes or adds. The
                // residual start is derived from the pair count, so an
                // empty overlap degenerates cleanly and already-paired
                // nodes are never re-emitted.
                let paired = (op.i2 - op.i1).min(op.j2 - op.j1);
                for offset in 0..paired {
                    let orig_idx = op.i1 + offset;
                    let mod_idx = op.j1 + offset;
                    changes.push(modified(
                        orig_idx,
                        mod_idx,
                        &original_nodes[orig_idx],
                        &modified_nodes[mod_idx],
                    ));
                }
                for idx in (op.i1 + paired)..op.i2 {
                    changes.push(deleted(idx, &original_nodes[idx]));
                }
                for idx in (op.j1 + paired)..op.j2 {
                    changes.push(added(idx, &modified_nodes[idx]));
                }
            }
        }
    }

    changes
}

fn deleted(idx: usize, node: &NodeInfo) -> Change {
    Change::Deleted {
        original_index: idx,
        original_span: node.span,
        original_text: node.source_text.clone(),
        kind: node.kind.clone(),
    }
}

fn added(idx: usize, node: &NodeInfo) -> Change {
    Change::Added {
        modified_index: idx,
        modified_span: node.span,
        modified_text: node.source_text.clone(),
        kind: node.kind.clone(),
    }
}

fn modified(orig_idx: usize, mod_idx: usize, orig: &NodeInfo, modif: &NodeInfo) -> Change {
    Change::Modified {
        original_index: orig_idx,
        modified_index: mod_idx,
        original_span: orig.span,
        modified_span: modif.span,
        original_text: orig.source_text.clone(),
        modified_text: modif.source_text.clone(),
        kind_transition: KindTransition {
            from: orig.kind.clone(),
            to: modif.kind.clone(),
        },
    }
}
