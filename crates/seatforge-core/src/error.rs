//! Error types for SeatForge core state

use thiserror::Error;

use crate::domain::{GridSize, SeatPosition, StudentId};

/// Structural violations raised by the seat state model.
///
/// Every operation that returns one of these leaves its state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Fewer seats than students
    #[error("Insufficient seats: {seats} selected for {students} students")]
    InsufficientSeats { seats: usize, students: usize },

    /// Swap source is not on the seat map
    #[error("Student {0} is not seated")]
    StudentNotSeated(StudentId),

    /// Position is not one of the known seats
    #[error("Position {0} is not a seat")]
    UnknownSeat(SeatPosition),

    /// Seat already holds a student
    #[error("Seat {position} is already taken by student {occupant}")]
    SeatTaken {
        position: SeatPosition,
        occupant: StudentId,
    },

    /// Position lies outside the selectable grid
    #[error("Position {position} is outside the {size} grid")]
    OutOfGrid {
        position: SeatPosition,
        size: GridSize,
    },

    /// The same student id appears twice where identities must be unique
    #[error("Student {0} appears more than once")]
    DuplicateStudent(StudentId),

    /// Seat key string is not of the form `row-col`
    #[error("Invalid seat key: {0:?}")]
    InvalidSeatKey(String),
}

/// Result type alias for seat state operations
pub type Result<T> = std::result::Result<T, SeatError>;
