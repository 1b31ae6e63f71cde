//! Error types for the seating engine

use seatforge_core::{LayoutReport, SeatError, StudentId};
use thiserror::Error;

use crate::phase::Phase;

/// Main error type for engine operations.
///
/// Every operation that fails with one of these leaves the session state as
/// it was, apart from the generation status for collaborator failures.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Structural violation from the seat model
    #[error(transparent)]
    Seat(#[from] SeatError),

    /// Operation not allowed in the current phase
    #[error("{operation} is not allowed during {phase}")]
    PhaseMismatch {
        operation: &'static str,
        phase: Phase,
    },

    /// Uploaded roster breaks identity or naming rules
    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    /// Student id not on the roster
    #[error("Student {0} is not on the roster")]
    UnknownStudent(StudentId),

    /// Roster source failed to produce students
    #[error("Roster ingestion failed: {0}")]
    RosterIngestionFailed(String),

    /// Layout-generation collaborator failed
    #[error("Layout generation failed: {0}")]
    GenerationRequestFailed(String),

    /// Export collaborator failed
    #[error("Export failed: {0}")]
    ExportRequestFailed(String),

    /// Strict policy refused a layout with diagnostics
    #[error("Layout rejected with {} finding(s)", .0.diagnostics.len())]
    LayoutRejected(LayoutReport),

    /// Completion for a request that is not outstanding
    #[error("No outstanding layout request with ticket {0}")]
    UnknownTicket(u64),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
