//! Student and seat fixtures.

use seatforge_core::{IndexSet, SeatPosition, Student};

/// Shorthand for [`SeatPosition::new`].
pub fn pos(row: u32, col: u32) -> SeatPosition {
    SeatPosition::new(row, col)
}

/// Student `n` named `"Student n"`.
pub fn student(n: u64) -> Student {
    Student::new(n, format!("Student {n}"))
}

/// Students 1 through `n`.
pub fn roster(n: u64) -> Vec<Student> {
    (1..=n).map(student).collect()
}

/// The first `cols` seats of `row`, left to right.
pub fn row_seats(row: u32, cols: u32) -> IndexSet<SeatPosition> {
    (0..cols).map(|col| pos(row, col)).collect()
}

/// Seats from `(row, col)` pairs, in the given order.
pub fn seats(cells: &[(u32, u32)]) -> IndexSet<SeatPosition> {
    cells.iter().copied().map(SeatPosition::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_ids_are_sequential() {
        let students = roster(3);
        assert_eq!(students.len(), 3);
        assert_eq!(students[2].name, "Student 3");
    }

    #[test]
    fn test_row_seats_order() {
        let seats = row_seats(2, 3);
        assert_eq!(seats.first(), Some(&pos(2, 0)));
        assert_eq!(seats.last(), Some(&pos(2, 2)));
    }
}
