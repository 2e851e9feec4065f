//! Data models for structural comparison.
//!
//! These types describe one top-level declaration of a source file in a
//! form suitable for alignment and reporting: a canonical signature, an
//! optional source span, the recovered source text, and a kind tag.

use serde::{Deserialize, Serialize};

/// Location of a construct in its source file.
///
/// Lines are 1-based; the end line is inclusive of the last line that
/// contains the construct. Columns are 0-based byte offsets within the
/// line, matching the underlying grammar's positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl SourceSpan {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }
}

/// Syntactic category of a top-level declaration.
///
/// Mirrors the Python grammar's statement kinds. Unrecognized kinds are
/// preserved verbatim in `Other` rather than dropped, so new grammar
/// versions degrade gracefully.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum NodeKind {
    FunctionDefinition,
    ClassDefinition,
    DecoratedDefinition,
    Assignment,
    ExpressionStatement,
    Import,
    ImportFrom,
    If,
    For,
    While,
    Try,
    With,
    Match,
    Assert,
    Raise,
    Global,
    TypeAlias,
    Other(String),
}

impl NodeKind {
    /// Map a grammar node kind to a category tag.
    pub fn from_grammar(kind: &str) -> Self {
        match kind {
            "function_definition" => NodeKind::FunctionDefinition,
            "class_definition" => NodeKind::ClassDefinition,
            "decorated_definition" => NodeKind::DecoratedDefinition,
            "assignment" | "augmented_assignment" => NodeKind::Assignment,
            "expression_statement" => NodeKind::ExpressionStatement,
            "import_statement" => NodeKind::Import,
            "import_from_statement" | "future_import_statement" => NodeKind::ImportFrom,
            "if_statement" => NodeKind::If,
            "for_statement" => NodeKind::For,
            "while_statement" => NodeKind::While,
            "try_statement" => NodeKind::Try,
            "with_statement" => NodeKind::With,
            "match_statement" => NodeKind::Match,
            "assert_statement" => NodeKind::Assert,
            "raise_statement" => NodeKind::Raise,
            "global_statement" => NodeKind::Global,
            "type_alias_statement" => NodeKind::TypeAlias,
            other => NodeKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::FunctionDefinition => "function_definition",
            NodeKind::ClassDefinition => "class_definition",
            NodeKind::DecoratedDefinition => "decorated_definition",
            NodeKind::Assignment => "assignment",
            NodeKind::ExpressionStatement => "expression_statement",
            NodeKind::Import => "import",
            NodeKind::ImportFrom => "import_from",
            NodeKind::If => "if_statement",
            NodeKind::For => "for_statement",
            NodeKind::While => "while_statement",
            NodeKind::Try => "try_statement",
            NodeKind::With => "with_statement",
            NodeKind::Match => "match_statement",
            NodeKind::Assert => "assert_statement",
            NodeKind::Raise => "raise_statement",
            NodeKind::Global => "global_statement",
            NodeKind::TypeAlias => "type_alias_statement",
            NodeKind::Other(kind) => kind,
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> String {
        kind.as_str().to_string()
    }
}

impl From<String> for NodeKind {
    fn from(kind: String) -> NodeKind {
        // Round-trips through the serialized names as well as raw grammar kinds.
        match kind.as_str() {
            "import" => NodeKind::Import,
            "import_from" => NodeKind::ImportFrom,
            other => NodeKind::from_grammar(other),
        }
    }
}

/// One top-level declaration of one file, ready for alignment.
///
/// Built once per comparison and immutable thereafter. The list of
/// `NodeInfo` for a file preserves source order; it is never reordered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Canonical structural signature; used only for equality during
    /// alignment, never displayed.
    pub signature: String,

    /// Source location, absent when the node carries no position data.
    pub span: Option<SourceSpan>,

    /// Literal source text recovered by slicing the file's lines by
    /// `span`; absent when the span is absent or stale.
    pub source_text: Option<String>,

    /// Syntactic category of the declaration.
    pub kind: NodeKind,
}

impl NodeInfo {
    pub fn new(
        signature: String,
        span: Option<SourceSpan>,
        source_text: Option<String>,
        kind: NodeKind,
    ) -> Self {
        Self {
            signature,
            span,
            source_text,
            kind,
        }
    }
}
