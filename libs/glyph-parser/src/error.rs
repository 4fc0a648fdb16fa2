//! # Parse Errors
//!
//! Errors for path data, transform lists and glyph documents.

use thiserror::Error;

/// Result alias for the parser crate.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised while reading glyph input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Path data the SVG path grammar rejects.
    #[error("invalid path data: {message}")]
    PathSyntax { message: String },

    /// A malformed transform list.
    #[error("invalid transform at byte {offset}: {message}")]
    TransformSyntax { offset: usize, message: String },

    /// A transform function with the wrong number of arguments.
    #[error("{name}() takes {expected} arguments, got {found}")]
    TransformArity {
        name: String,
        expected: &'static str,
        found: usize,
    },

    /// Zero or several transform specifications where exactly one is required.
    #[error("expected exactly one transform specification, found {found}")]
    TransformSpecViolation { found: usize },

    /// A document line starting with an unknown keyword.
    #[error("unknown directive `{directive}`")]
    UnknownDirective { directive: String },

    /// Curve flattening tolerance that is zero, negative or not finite.
    #[error("flatten tolerance must be positive and finite: {0}")]
    InvalidTolerance(f64),

    /// An error on a specific document line (1-based).
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub(crate) fn at_line(self, line: usize) -> Self {
        Self::AtLine {
            line,
            source: Box::new(self),
        }
    }

    pub(crate) fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::TransformSyntax {
            offset,
            message: message.into(),
        }
    }
}
