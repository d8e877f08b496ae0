//! Error and diagnostic types for grid specifications
//!
//! The permissive parser never fails. It records what it skipped as
//! [`Diagnostic`]s, which strict parsing turns into a [`GridSpecError`].

use thiserror::Error;

/// Something the parser skipped while reading a specification
///
/// `index` is the 0-based position of the comma-separated entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("entry {index}: empty entry")]
    EmptyEntry { index: usize },

    #[error("entry {index}: unrecognized size `{text}`")]
    UnrecognizedSize { index: usize, text: String },

    #[error("entry {index}: negative size `{text}`")]
    NegativeSize { index: usize, text: String },

    #[error("entry {index}: unmatched parenthesis in `{text}`")]
    UnmatchedParenthesis { index: usize, text: String },

    #[error("entry {index}: ignored text `{text}` after option block")]
    TrailingText { index: usize, text: String },

    #[error("entry {index}: malformed option `{option}` (expected key=value)")]
    MalformedOption { index: usize, option: String },

    #[error("entry {index}: unknown option `{key}`")]
    UnknownOption { index: usize, key: String },

    #[error("entry {index}: invalid value `{value}` for option `{key}`")]
    InvalidOptionValue {
        index: usize,
        key: String,
        value: String,
    },
}

impl Diagnostic {
    /// Position of the entry this diagnostic refers to
    pub fn index(&self) -> usize {
        match self {
            Diagnostic::EmptyEntry { index }
            | Diagnostic::UnrecognizedSize { index, .. }
            | Diagnostic::NegativeSize { index, .. }
            | Diagnostic::UnmatchedParenthesis { index, .. }
            | Diagnostic::TrailingText { index, .. }
            | Diagnostic::MalformedOption { index, .. }
            | Diagnostic::UnknownOption { index, .. }
            | Diagnostic::InvalidOptionValue { index, .. } => *index,
        }
    }

    /// Returns true if the whole entry was dropped, false if only part of it
    pub fn drops_entry(&self) -> bool {
        matches!(
            self,
            Diagnostic::EmptyEntry { .. }
                | Diagnostic::UnrecognizedSize { .. }
                | Diagnostic::NegativeSize { .. }
                | Diagnostic::UnmatchedParenthesis { .. }
        )
    }
}

/// Errors raised by the opt-in strict APIs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridSpecError {
    #[error(
        "grid spec rejected with {} problem(s), first: {}",
        .diagnostics.len(),
        first_message(.diagnostics)
    )]
    Rejected { diagnostics: Vec<Diagnostic> },

    #[error("Unknown grid axis: {name} (expected rows or columns)")]
    UnknownAxis { name: String },
}

impl GridSpecError {
    /// Create a new rejection error
    pub fn rejected(diagnostics: Vec<Diagnostic>) -> Self {
        Self::Rejected { diagnostics }
    }

    /// Create a new unknown axis error
    pub fn unknown_axis(name: impl Into<String>) -> Self {
        Self::UnknownAxis { name: name.into() }
    }

    /// Diagnostics carried by a rejection, empty for other errors
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            GridSpecError::Rejected { diagnostics } => diagnostics,
            GridSpecError::UnknownAxis { .. } => &[],
        }
    }
}

fn first_message(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "none".to_string())
}
