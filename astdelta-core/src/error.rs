//! Error types for astdelta-core.

use thiserror::Error;

/// Result type alias for comparison operations.
pub type Result<T> = std::result::Result<T, DiffError>;

/// Errors that abort a comparison.
///
/// Only parse-level failures are errors: without a tree there is nothing
/// to align. Anomalies below that (a node without position data, a span
/// that points past the end of the file) are absorbed into the data model
/// as `None` fields so the comparison can still report best-effort
/// differences.
#[derive(Error, Debug)]
pub enum DiffError {
    /// Input text failed to parse. Fatal for the comparison; surfaced to
    /// the caller unchanged, no partial result.
    #[error("syntax error at line {line}, column {column}")]
    Syntax {
        /// 1-based line of the first unparsable construct.
        line: u32,
        /// 0-based column of the first unparsable construct.
        column: u32,
    },

    /// The grammar could not be loaded or the parser could not run.
    #[error("parser error: {message}")]
    Parser {
        /// Description of the parser failure.
        message: String,
    },

    /// The requested language has no registered grammar.
    #[error("unsupported language: {language}")]
    UnsupportedLanguage {
        /// Language identifier that was requested.
        language: String,
    },

    /// IO error reading source files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DiffError::Syntax { line: 3, column: 7 };
        assert!(err.to_string().contains("line 3"));
        assert!(err.to_string().contains("column 7"));

        let err = DiffError::UnsupportedLanguage {
            language: "cobol".to_string(),
        };
        assert!(err.to_string().contains("cobol"));
    }
}
