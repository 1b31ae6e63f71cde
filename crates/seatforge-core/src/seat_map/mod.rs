//! The authoritative seat position to student assignment.
//!
//! The map always holds one slot per known seat. A vacant seat is a slot
//! holding `None`; there is no second representation of vacancy. A reverse
//! index keeps `position_of` constant time and is updated in the same step as
//! the forward map.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};

use crate::domain::{SeatPosition, Student, StudentId};
use crate::error::{Result, SeatError};

/// Result of a successful [`SeatMap::swap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The student moved onto a vacant seat; `from` is now vacant.
    Moved { from: SeatPosition, to: SeatPosition },

    /// The student traded seats with `displaced`, who now sits at `from`.
    Swapped {
        from: SeatPosition,
        to: SeatPosition,
        displaced: StudentId,
    },

    /// The target was the student's own seat.
    Unchanged(SeatPosition),
}

/// Position to student assignment over a fixed seat set.
///
/// Invariants:
/// - every slot is a seat of the set the map was built from;
/// - a student id occupies at most one slot.
///
/// # Example
///
/// ```
/// use indexmap::IndexSet;
/// use seatforge_core::{SeatMap, SeatPosition, Student, StudentId};
///
/// let seats: IndexSet<_> = [SeatPosition::new(0, 0), SeatPosition::new(1, 1)]
///     .into_iter()
///     .collect();
/// let roster = vec![Student::new(1u64, "Ada"), Student::new(2u64, "Brian")];
///
/// let mut map = SeatMap::seed(&seats, &roster).unwrap();
/// map.swap(&StudentId::from(1u64), SeatPosition::new(1, 1)).unwrap();
///
/// assert_eq!(map.occupant_at(SeatPosition::new(1, 1)).unwrap().name, "Ada");
/// assert_eq!(map.occupant_at(SeatPosition::new(0, 0)).unwrap().name, "Brian");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatMap {
    slots: IndexMap<SeatPosition, Option<Student>>,
    index: HashMap<StudentId, SeatPosition>,
}

impl SeatMap {
    /// Creates a map with every seat vacant.
    pub fn vacant<I>(seats: I) -> Self
    where
        I: IntoIterator<Item = SeatPosition>,
    {
        Self {
            slots: seats.into_iter().map(|pos| (pos, None)).collect(),
            index: HashMap::new(),
        }
    }

    /// Pairs the i-th student with the i-th seat in seat-set order.
    ///
    /// Seats beyond the roster length stay vacant.
    ///
    /// # Errors
    ///
    /// [`SeatError::InsufficientSeats`] when there are fewer seats than
    /// students, [`SeatError::DuplicateStudent`] when two roster entries
    /// share an id.
    pub fn seed(seats: &IndexSet<SeatPosition>, students: &[Student]) -> Result<Self> {
        if seats.len() < students.len() {
            return Err(SeatError::InsufficientSeats {
                seats: seats.len(),
                students: students.len(),
            });
        }

        let mut map = Self::vacant(seats.iter().copied());
        for (pos, student) in seats.iter().zip(students) {
            map.place(*pos, student.clone())?;
        }
        Ok(map)
    }

    /// Moves `student_id` to `target`, trading places with any occupant.
    ///
    /// All checks run before any slot is written, so a failed swap leaves
    /// the map exactly as it was.
    ///
    /// # Errors
    ///
    /// [`SeatError::StudentNotSeated`] when the student has no seat,
    /// [`SeatError::UnknownSeat`] when `target` is not a seat of this map.
    pub fn swap(&mut self, student_id: &StudentId, target: SeatPosition) -> Result<SwapOutcome> {
        let source = self
            .position_of(student_id)
            .ok_or_else(|| SeatError::StudentNotSeated(student_id.clone()))?;
        if !self.slots.contains_key(&target) {
            return Err(SeatError::UnknownSeat(target));
        }
        if source == target {
            return Ok(SwapOutcome::Unchanged(source));
        }

        let moving = self.take(source);
        let displaced = self.take(target);

        let outcome = match &displaced {
            Some(occupant) => SwapOutcome::Swapped {
                from: source,
                to: target,
                displaced: occupant.id.clone(),
            },
            None => SwapOutcome::Moved {
                from: source,
                to: target,
            },
        };

        if let Some(occupant) = displaced {
            self.put(source, occupant);
        }
        if let Some(student) = moving {
            self.put(target, student);
        }
        Ok(outcome)
    }

    /// Replaces the whole assignment with `other`.
    pub fn replace(&mut self, other: SeatMap) {
        *self = other;
    }

    /// Returns the student seated at `pos`, if any.
    pub fn occupant_at(&self, pos: SeatPosition) -> Option<&Student> {
        self.slots.get(&pos).and_then(Option::as_ref)
    }

    /// Returns the seat of `student_id`, if seated.
    pub fn position_of(&self, student_id: &StudentId) -> Option<SeatPosition> {
        self.index.get(student_id).copied()
    }

    pub fn is_seated(&self, student_id: &StudentId) -> bool {
        self.index.contains_key(student_id)
    }

    pub fn contains_seat(&self, pos: SeatPosition) -> bool {
        self.slots.contains_key(&pos)
    }

    /// All seats in seat-set order.
    pub fn seats(&self) -> impl Iterator<Item = SeatPosition> + '_ {
        self.slots.keys().copied()
    }

    pub fn seat_count(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.index.len()
    }

    pub fn vacant_seats(&self) -> impl Iterator<Item = SeatPosition> + '_ {
        self.slots
            .iter()
            .filter(|(_, occupant)| occupant.is_none())
            .map(|(pos, _)| *pos)
    }

    /// Every slot in seat-set order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatPosition, Option<&Student>)> + '_ {
        self.slots.iter().map(|(pos, occupant)| (*pos, occupant.as_ref()))
    }

    /// Occupied slots only, in seat-set order.
    pub fn occupants(&self) -> impl Iterator<Item = (SeatPosition, &Student)> + '_ {
        self.slots
            .iter()
            .filter_map(|(pos, occupant)| occupant.as_ref().map(|s| (*pos, s)))
    }

    /// Seats `student` at a vacant `pos`.
    ///
    /// Used while building a map from scratch. A student already on the map
    /// is reported before the seat is looked at.
    pub(crate) fn place(&mut self, pos: SeatPosition, student: Student) -> Result<()> {
        if self.index.contains_key(&student.id) {
            return Err(SeatError::DuplicateStudent(student.id));
        }
        match self.slots.get(&pos) {
            None => Err(SeatError::UnknownSeat(pos)),
            Some(Some(occupant)) => Err(SeatError::SeatTaken {
                position: pos,
                occupant: occupant.id.clone(),
            }),
            Some(None) => {
                self.put(pos, student);
                Ok(())
            }
        }
    }

    fn take(&mut self, pos: SeatPosition) -> Option<Student> {
        let student = self.slots.get_mut(&pos).and_then(Option::take)?;
        self.index.remove(&student.id);
        Some(student)
    }

    fn put(&mut self, pos: SeatPosition, student: Student) {
        self.index.insert(student.id.clone(), pos);
        if let Some(slot) = self.slots.get_mut(&pos) {
            *slot = Some(student);
        }
    }
}

#[cfg(test)]
mod tests;
