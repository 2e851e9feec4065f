//! Structural diff engine for top-level declarations.
//!
//! Walks the aligner's edit script and produces typed change records,
//! one per deleted, added, or modified declaration, each carrying the
//! source span and recovered text needed for rendering.

pub mod changes;
pub mod classifier;
pub mod comparator;

pub use changes::{Change, DiffSummary, KindTransition, StructuralDiff};
pub use classifier::classify;
pub use comparator::{compare_nodes, compare_sources};
