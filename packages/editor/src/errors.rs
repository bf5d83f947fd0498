//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    #[error("Session is not file-backed")]
    NotFileBacked,
}

/// Raised when an edit is replayed against a document whose state no longer
/// matches what the edit captured. The document is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Row {row} out of range (document has {line_count} lines)")]
    RowOutOfRange { row: usize, line_count: usize },

    #[error("Column {col} out of range on row {row} (line length {len})")]
    ColumnOutOfRange { row: usize, col: usize, len: usize },

    #[error("Expected {expected:?} at {row}:{col}, found {found:?}")]
    CharMismatch {
        row: usize,
        col: usize,
        expected: char,
        found: Option<char>,
    },

    #[error("No line below row {row} to join")]
    NothingToJoin { row: usize },
}
