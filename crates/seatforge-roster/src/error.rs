//! Error types for roster ingestion

use thiserror::Error;

/// Failure to turn a roster file into students.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    /// No header row with a name column in the rows searched
    #[error("No name column found in the first {searched} non-empty rows")]
    MissingNameColumn { searched: usize },

    #[error("Malformed roster at line {line}: {message}")]
    Malformed { line: usize, message: String },
}

/// Result type alias for roster ingestion
pub type Result<T> = std::result::Result<T, RosterError>;
