//! Core domain types: seat positions, students and the grid extent.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SeatError;

/// A `(row, col)` grid coordinate designated as a seat.
///
/// Positions order row-major, so sorted collections read like the grid.
///
/// # Example
///
/// ```
/// use seatforge_core::SeatPosition;
///
/// let pos: SeatPosition = "2-7".parse().unwrap();
/// assert_eq!(pos, SeatPosition::new(2, 7));
/// assert_eq!(pos.key(), "2-7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeatPosition {
    pub row: u32,
    pub col: u32,
}

impl SeatPosition {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Returns the `"row-col"` seat key used on the wire.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for SeatPosition {
    type Err = SeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SeatError::InvalidSeatKey(s.to_string());
        let (row, col) = s.trim().split_once('-').ok_or_else(invalid)?;
        let row = row.parse().map_err(|_| invalid())?;
        let col = col.parse().map_err(|_| invalid())?;
        Ok(Self { row, col })
    }
}

impl From<(u32, u32)> for SeatPosition {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

/// Extent of the selectable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

impl GridSize {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Returns true if `pos` lies inside the grid.
    pub fn contains(&self, pos: SeatPosition) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Stable student identifier assigned by roster ingestion.
///
/// Rosters parsed from files use sequential numbers; identifiers coming
/// back from external services may also be text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StudentId {
    Number(u64),
    Text(String),
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentId::Number(n) => write!(f, "{}", n),
            StudentId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for StudentId {
    fn from(n: u64) -> Self {
        StudentId::Number(n)
    }
}

impl From<u32> for StudentId {
    fn from(n: u32) -> Self {
        StudentId::Number(n.into())
    }
}

impl From<i32> for StudentId {
    fn from(n: i32) -> Self {
        match u64::try_from(n) {
            Ok(n) => StudentId::Number(n),
            Err(_) => StudentId::Text(n.to_string()),
        }
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        StudentId::Text(s.to_string())
    }
}

impl From<String> for StudentId {
    fn from(s: String) -> Self {
        StudentId::Text(s)
    }
}

/// A student on the roster.
///
/// Identity is the `id`; two records with the same id are the same student
/// regardless of name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Student {
    pub id: StudentId,
    pub name: String,
}

impl Student {
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
