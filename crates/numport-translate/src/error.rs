//! Error types for dialect construction and translation.

use crate::classify::ClassifierState;

/// Fatal conditions detected while translating one input file.
///
/// Line numbers are 1-based. Translation never recovers from either variant:
/// the caller gets no partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("line {line}: unrecognized top-level line: {text:?}")]
    MalformedInput { line: usize, text: String },

    #[error("line {line}: {state} opened here is never closed: {text:?}")]
    UnterminatedRegion {
        state: ClassifierState,
        line: usize,
        text: String,
    },
}

impl TranslateError {
    /// The 1-based line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedInput { line, .. } | Self::UnterminatedRegion { line, .. } => *line,
        }
    }
}

/// Error compiling a [`DialectSpec`](crate::dialect::DialectSpec) into a dialect.
#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    #[error("dialect `{dialect}`: invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        dialect: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("dialect `{dialect}`: {what} must not be empty")]
    Empty { dialect: String, what: &'static str },
}
