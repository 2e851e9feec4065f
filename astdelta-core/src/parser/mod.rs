//! Language parser integration.
//!
//! The parser is a collaborator, not part of the comparison engine: it
//! turns source text into an ordered list of top-level `NodeInfo`
//! descriptors using a tree-sitter grammar. Each language has its own
//! extractor module.

use std::path::Path;

use crate::error::{DiffError, Result};
use crate::types::NodeInfo;

pub mod python;

pub(crate) mod helpers;

/// Parse source code for a specific language into top-level descriptors.
pub fn parse_source(source: &str, language: &str) -> Result<Vec<NodeInfo>> {
    match language.to_lowercase().as_str() {
        "python" | "py" => python::parse(source),
        other => Err(DiffError::UnsupportedLanguage {
            language: other.to_string(),
        }),
    }
}

/// Detect language from file extension.
pub fn detect_language(file_path: &str) -> Option<&'static str> {
    let ext = Path::new(file_path).extension()?.to_str()?;
    match ext {
        "py" => Some("python"),
        _ => None,
    }
}

/// Get supported languages.
pub fn supported_languages() -> &'static [&'static str] {
    &["python", "py"]
}
