//! Validation of externally generated layouts.
//!
//! A layout arrives as an ordered list of `{student, position}` entries.
//! Entries are checked one by one in input order; a rejected entry is
//! recorded as a [`Diagnostic`] and processing continues with the next one.
//! Accepted entries go into a fresh [`SeatMap`], never into the live one.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{SeatPosition, Student, StudentId};
use crate::error::SeatError;
use crate::seat_map::SeatMap;

/// One placement proposed by the layout-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutEntry {
    pub student: Student,
    pub position: SeatPosition,
}

impl LayoutEntry {
    pub fn new(student: Student, position: SeatPosition) -> Self {
        Self { student, position }
    }
}

/// A non-fatal finding produced while validating a layout.
///
/// `index` is the entry's position in the incoming layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The entry names a position outside the seat set.
    InvalidSeat {
        index: usize,
        student: StudentId,
        position: SeatPosition,
    },

    /// The entry names a student missing from the roster.
    UnknownStudent {
        index: usize,
        student: StudentId,
        position: SeatPosition,
    },

    /// The student was already placed by an earlier accepted entry.
    DuplicateAssignment {
        index: usize,
        student: StudentId,
        position: SeatPosition,
    },

    /// The seat was already taken by an earlier accepted entry.
    SeatConflict {
        index: usize,
        student: StudentId,
        position: SeatPosition,
        occupant: StudentId,
    },

    /// A roster student received no seat.
    UnassignedStudent { student: StudentId },
}

impl Diagnostic {
    /// The student the finding is about.
    pub fn student(&self) -> &StudentId {
        match self {
            Diagnostic::InvalidSeat { student, .. }
            | Diagnostic::UnknownStudent { student, .. }
            | Diagnostic::DuplicateAssignment { student, .. }
            | Diagnostic::SeatConflict { student, .. }
            | Diagnostic::UnassignedStudent { student } => student,
        }
    }

    /// Finding for an entry the fresh map refused to place.
    fn rejected_placement(
        err: SeatError,
        index: usize,
        student: StudentId,
        position: SeatPosition,
    ) -> Self {
        match err {
            SeatError::DuplicateStudent(_) => Diagnostic::DuplicateAssignment {
                index,
                student,
                position,
            },
            SeatError::SeatTaken { occupant, .. } => Diagnostic::SeatConflict {
                index,
                student,
                position,
                occupant,
            },
            _ => Diagnostic::InvalidSeat {
                index,
                student,
                position,
            },
        }
    }

    /// Returns true for findings that dropped an incoming entry.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Diagnostic::UnassignedStudent { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidSeat {
                index,
                student,
                position,
            } => write!(
                f,
                "entry {}: seat {} for student {} is not a selected seat",
                index, position, student
            ),
            Diagnostic::UnknownStudent {
                index,
                student,
                position,
            } => write!(
                f,
                "entry {}: student {} at {} is not on the roster",
                index, student, position
            ),
            Diagnostic::DuplicateAssignment {
                index,
                student,
                position,
            } => write!(
                f,
                "entry {}: student {} already assigned, ignoring seat {}",
                index, student, position
            ),
            Diagnostic::SeatConflict {
                index,
                student,
                position,
                occupant,
            } => write!(
                f,
                "entry {}: seat {} already holds student {}, ignoring student {}",
                index, position, occupant, student
            ),
            Diagnostic::UnassignedStudent { student } => {
                write!(f, "student {} was not assigned a seat", student)
            }
        }
    }
}

/// All findings from one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutReport {
    /// Number of entries received.
    pub received: usize,

    /// Number of entries placed on the new map.
    pub accepted: usize,

    /// Findings, entry findings in input order followed by unassigned
    /// students in roster order.
    pub diagnostics: Vec<Diagnostic>,
}

impl LayoutReport {
    /// Returns true if the layout produced no findings.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of entries that were dropped.
    pub fn rejected(&self) -> usize {
        self.received - self.accepted
    }

    /// Students left without a seat, in roster order.
    pub fn unassigned(&self) -> impl Iterator<Item = &StudentId> + '_ {
        self.diagnostics.iter().filter_map(|d| match d {
            Diagnostic::UnassignedStudent { student } => Some(student),
            _ => None,
        })
    }
}

/// A validated layout: the freshly built map plus its report.
#[derive(Debug, Clone)]
pub struct ValidatedLayout {
    pub seat_map: SeatMap,
    pub report: LayoutReport,
}

/// Checks a generated layout against the known seats and roster.
///
/// # Example
///
/// ```
/// use seatforge_core::{Diagnostic, LayoutEntry, LayoutValidator, SeatPosition, Student};
///
/// let seats = [SeatPosition::new(0, 0), SeatPosition::new(0, 1)];
/// let roster = vec![Student::new(1u64, "Ada"), Student::new(2u64, "Brian")];
///
/// let validated = LayoutValidator::new(seats, &roster).validate(vec![
///     LayoutEntry::new(roster[0].clone(), SeatPosition::new(0, 1)),
/// ]);
///
/// assert_eq!(validated.report.accepted, 1);
/// assert!(matches!(
///     validated.report.diagnostics[0],
///     Diagnostic::UnassignedStudent { .. }
/// ));
/// ```
#[derive(Debug)]
pub struct LayoutValidator<'a> {
    seats: Vec<SeatPosition>,
    roster: &'a [Student],
}

impl<'a> LayoutValidator<'a> {
    pub fn new<I>(seats: I, roster: &'a [Student]) -> Self
    where
        I: IntoIterator<Item = SeatPosition>,
    {
        Self {
            seats: seats.into_iter().collect(),
            roster,
        }
    }

    /// Validates `entries` in order and builds the replacement map.
    ///
    /// Placed students are taken from the roster, so names in the response
    /// never override roster names.
    pub fn validate<I>(&self, entries: I) -> ValidatedLayout
    where
        I: IntoIterator<Item = LayoutEntry>,
    {
        let mut seat_map = SeatMap::vacant(self.seats.iter().copied());
        let mut report = LayoutReport::default();

        for (index, entry) in entries.into_iter().enumerate() {
            report.received += 1;
            let LayoutEntry { student, position } = entry;
            let student = student.id;

            let diagnostic = if !seat_map.contains_seat(position) {
                Some(Diagnostic::InvalidSeat {
                    index,
                    student,
                    position,
                })
            } else if let Some(known) = self.roster_entry(&student) {
                match seat_map.place(position, known.clone()) {
                    Ok(()) => {
                        report.accepted += 1;
                        None
                    }
                    Err(err) => Some(Diagnostic::rejected_placement(err, index, student, position)),
                }
            } else {
                Some(Diagnostic::UnknownStudent {
                    index,
                    student,
                    position,
                })
            };

            if let Some(diagnostic) = diagnostic {
                warn!(event = "layout_entry_rejected", %diagnostic);
                report.diagnostics.push(diagnostic);
            }
        }

        for student in self.roster {
            if !seat_map.is_seated(&student.id) {
                warn!(event = "student_unassigned", student = %student.id);
                report.diagnostics.push(Diagnostic::UnassignedStudent {
                    student: student.id.clone(),
                });
            }
        }

        ValidatedLayout { seat_map, report }
    }

    fn roster_entry(&self, id: &StudentId) -> Option<&'a Student> {
        self.roster.iter().find(|s| &s.id == id)
    }
}

#[cfg(test)]
mod tests;
