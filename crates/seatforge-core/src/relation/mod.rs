//! Pairwise relation constraints collected from student picks.
//!
//! While a relation mode is active, every two picks form one relation of that
//! mode. Relations are append-only; the same pair may be recorded more than
//! once and every record counts.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::domain::{SeatPosition, StudentId};
use crate::seat_map::SeatMap;

/// Kind of pairwise constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelationKind {
    /// The two students should not sit together.
    Avoid,

    /// The two students should sit together.
    Prefer,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKind::Avoid => f.write_str("avoid"),
            RelationKind::Prefer => f.write_str("prefer"),
        }
    }
}

/// Pick mode of a [`RelationTracker`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelationMode {
    /// Picks are ignored.
    #[default]
    None,
    Avoid,
    Prefer,
}

impl RelationMode {
    pub fn kind(self) -> Option<RelationKind> {
        match self {
            RelationMode::None => None,
            RelationMode::Avoid => Some(RelationKind::Avoid),
            RelationMode::Prefer => Some(RelationKind::Prefer),
        }
    }
}

impl From<RelationKind> for RelationMode {
    fn from(kind: RelationKind) -> Self {
        match kind {
            RelationKind::Avoid => RelationMode::Avoid,
            RelationKind::Prefer => RelationMode::Prefer,
        }
    }
}

/// A typed constraint between two distinct students.
///
/// The pair is unordered; `students` keeps pick order for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Relation {
    pub students: [StudentId; 2],
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: RelationKind,
}

impl Relation {
    pub fn new(first: StudentId, second: StudentId, kind: RelationKind) -> Self {
        Self {
            students: [first, second],
            kind,
        }
    }

    /// Returns true if both relations join the same two students.
    pub fn same_pair(&self, other: &Relation) -> bool {
        let [a, b] = &self.students;
        let [c, d] = &other.students;
        (a == c && b == d) || (a == d && b == c)
    }
}

/// What a single [`RelationTracker::pick`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// No mode is active; the pick was dropped.
    Inactive,

    /// First half of a pair; waiting for the second pick.
    Pending(StudentId),

    /// The student is already waiting; the pick was dropped.
    Ignored(StudentId),

    /// The pair completed and this relation was recorded.
    Emitted(Relation),
}

/// Accumulates two-student picks into relations.
///
/// # Example
///
/// ```
/// use seatforge_core::{PickOutcome, RelationMode, RelationTracker, StudentId};
///
/// let mut tracker = RelationTracker::new();
/// tracker.set_mode(RelationMode::Avoid);
/// tracker.pick(StudentId::from(1u64));
/// let outcome = tracker.pick(StudentId::from(2u64));
///
/// assert!(matches!(outcome, PickOutcome::Emitted(_)));
/// assert_eq!(tracker.relations().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RelationTracker {
    mode: RelationMode,
    pending: Option<StudentId>,
    relations: Vec<Relation>,
}

impl RelationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> RelationMode {
        self.mode
    }

    /// Switches mode. A half-filled pair is discarded when the mode changes.
    pub fn set_mode(&mut self, mode: RelationMode) {
        if mode != self.mode {
            self.pending = None;
            self.mode = mode;
        }
    }

    /// Records a pick under the current mode.
    pub fn pick(&mut self, id: StudentId) -> PickOutcome {
        let Some(kind) = self.mode.kind() else {
            return PickOutcome::Inactive;
        };

        match self.pending.take() {
            None => {
                self.pending = Some(id.clone());
                PickOutcome::Pending(id)
            }
            Some(first) if first == id => {
                self.pending = Some(first);
                PickOutcome::Ignored(id)
            }
            Some(first) => {
                let relation = Relation::new(first, id, kind);
                self.relations.push(relation.clone());
                PickOutcome::Emitted(relation)
            }
        }
    }

    /// The student waiting for a partner, if any.
    pub fn pending(&self) -> Option<&StudentId> {
        self.pending.as_ref()
    }

    /// Drops a half-filled pair without changing mode.
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }
}

/// A relation whose two students are both seated, with their seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationLine<'a> {
    pub relation: &'a Relation,
    pub from: SeatPosition,
    pub to: SeatPosition,
}

/// Resolves relations to seat endpoints for drawing.
///
/// Relations with an unseated student produce no line.
pub fn relation_lines<'a>(
    relations: &'a [Relation],
    seat_map: &SeatMap,
) -> Vec<RelationLine<'a>> {
    relations
        .iter()
        .filter_map(|relation| {
            let [a, b] = &relation.students;
            Some(RelationLine {
                relation,
                from: seat_map.position_of(a)?,
                to: seat_map.position_of(b)?,
            })
        })
        .collect()
}
