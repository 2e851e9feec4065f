//! astdelta core - structural comparison of source file versions.
//!
//! Compares two versions of a source file at the AST level and reports,
//! per top-level declaration, whether it was deleted, added, or modified,
//! instead of a textual line diff.
//!
//! # Pipeline
//!
//! - **Parse**: tree-sitter turns each text into a tree; the extractor
//!   builds one [`NodeInfo`] per top-level declaration, with a canonical
//!   signature and a source span.
//! - **Align**: an LCS-based matcher aligns the two signature sequences
//!   into an edit script of opcodes.
//! - **Classify**: the edit script becomes an ordered list of [`Change`]
//!   records, ready for rendering.
//!
//! Every stage is a pure function over immutable inputs; independent
//! comparisons can run in parallel with no coordination.
//!
//! # Example
//!
//! ```
//! use astdelta_core::compare_sources;
//!
//! let original = "def f():\n    return 1\n";
//! let modified = "def f():\n    return 2\n";
//! let diff = compare_sources(original, modified, "python").unwrap();
//! assert_eq!(diff.summary.modified, 1);
//! ```

pub mod align;
pub mod differ;
pub mod error;
pub mod parser;
pub mod signature;
pub mod types;

pub use differ::{compare_nodes, compare_sources, Change, DiffSummary, KindTransition, StructuralDiff};
pub use error::{DiffError, Result};
pub use types::{NodeInfo, NodeKind, SourceSpan};
