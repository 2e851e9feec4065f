//! Change types and result structures for structural diff.

use serde::{Deserialize, Serialize};

use crate::types::{NodeKind, SourceSpan};

/// Kind of the original and new construct for a modified declaration.
///
/// The two sides may differ, e.g. a function rewritten as a class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KindTransition {
    pub from: NodeKind,
    pub to: NodeKind,
}

/// One reported difference between the two files.
///
/// Every variant references a real index into the corresponding
/// `NodeInfo` list; `Deleted` and `Added` never carry the opposing
/// side's fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "change_type", rename_all = "snake_case")]
pub enum Change {
    /// Declaration present in the original file only.
    Deleted {
        original_index: usize,
        original_span: Option<SourceSpan>,
        original_text: Option<String>,
        kind: NodeKind,
    },
    /// Declaration present in the modified file only.
    Added {
        modified_index: usize,
        modified_span: Option<SourceSpan>,
        modified_text: Option<String>,
        kind: NodeKind,
    },
    /// Declaration present on both sides with different structure.
    Modified {
        original_index: usize,
        modified_index: usize,
        original_span: Option<SourceSpan>,
        modified_span: Option<SourceSpan>,
        original_text: Option<String>,
        modified_text: Option<String>,
        kind_transition: KindTransition,
    },
}

impl Change {
    pub fn change_type(&self) -> &'static str {
        match self {
            Change::Deleted { .. } => "deleted",
            Change::Added { .. } => "added",
            Change::Modified { .. } => "modified",
        }
    }

    /// Index into the original file's declaration list, if any.
    pub fn original_index(&self) -> Option<usize> {
        match self {
            Change::Deleted { original_index, .. } => Some(*original_index),
            Change::Added { .. } => None,
            Change::Modified { original_index, .. } => Some(*original_index),
        }
    }

    /// Index into the modified file's declaration list, if any.
    pub fn modified_index(&self) -> Option<usize> {
        match self {
            Change::Deleted { .. } => None,
            Change::Added { modified_index, .. } => Some(*modified_index),
            Change::Modified { modified_index, .. } => Some(*modified_index),
        }
    }
}

/// Summary statistics for a diff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub deleted: u32,
    pub added: u32,
    pub modified: u32,
}

impl DiffSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter for one change.
    pub fn record(&mut self, change: &Change) {
        match change {
            Change::Deleted { .. } => self.deleted += 1,
            Change::Added { .. } => self.added += 1,
            Change::Modified { .. } => self.modified += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.deleted + self.added + self.modified
    }

    /// Generate human-readable summary string.
    pub fn text(&self) -> String {
        if self.total() == 0 {
            "no changes".to_string()
        } else {
            format!(
                "{} deleted, {} added, {} modified",
                self.deleted, self.added, self.modified
            )
        }
    }
}

/// Complete result of one comparison: the ordered change list plus
/// summary counts. Built once, immutable to consumers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuralDiff {
    pub changes: Vec<Change>,
    pub summary: DiffSummary,
}

impl StructuralDiff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a change and update the summary.
    pub fn add_change(&mut self, change: Change) {
        self.summary.record(&change);
        self.changes.push(change);
    }

    /// An empty change list means the files are logically identical.
    pub fn is_identical(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn change_count(&self) -> usize {
        self.changes.len()
    }
}
