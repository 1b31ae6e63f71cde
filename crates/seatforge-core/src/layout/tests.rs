//! Tests for layout validation.

use super::*;

fn pos(row: u32, col: u32) -> SeatPosition {
    SeatPosition::new(row, col)
}

fn id(n: u64) -> StudentId {
    StudentId::from(n)
}

fn student(n: u64) -> Student {
    Student::new(n, format!("S{}", n))
}

fn entry(n: u64, row: u32, col: u32) -> LayoutEntry {
    LayoutEntry::new(student(n), pos(row, col))
}

#[test]
fn test_mixed_layout_reports_every_problem() {
    let seats = [pos(0, 0), pos(0, 1)];
    let roster = vec![student(1), student(2), student(3)];

    let validated = LayoutValidator::new(seats, &roster).validate(vec![
        entry(1, 0, 0),
        entry(2, 9, 9),
        entry(1, 0, 1),
    ]);

    let map = &validated.seat_map;
    assert_eq!(map.occupied_count(), 1);
    assert_eq!(map.position_of(&id(1)), Some(pos(0, 0)));
    assert!(map.occupant_at(pos(0, 1)).is_none());

    assert_eq!(
        validated.report.diagnostics,
        vec![
            Diagnostic::InvalidSeat {
                index: 1,
                student: id(2),
                position: pos(9, 9)
            },
            Diagnostic::DuplicateAssignment {
                index: 2,
                student: id(1),
                position: pos(0, 1)
            },
            Diagnostic::UnassignedStudent { student: id(2) },
            Diagnostic::UnassignedStudent { student: id(3) },
        ]
    );
    assert_eq!(validated.report.received, 3);
    assert_eq!(validated.report.accepted, 1);
    assert_eq!(validated.report.rejected(), 2);
    assert_eq!(
        validated.report.unassigned().collect::<Vec<_>>(),
        vec![&id(2), &id(3)]
    );
}

#[test]
fn test_clean_layout() {
    let seats = [pos(0, 0), pos(0, 1), pos(1, 0)];
    let roster = vec![student(1), student(2)];

    let validated =
        LayoutValidator::new(seats, &roster).validate(vec![entry(2, 0, 0), entry(1, 1, 0)]);

    assert!(validated.report.is_clean());
    assert_eq!(validated.seat_map.position_of(&id(2)), Some(pos(0, 0)));
    assert_eq!(validated.seat_map.position_of(&id(1)), Some(pos(1, 0)));
    assert_eq!(validated.seat_map.seat_count(), 3);
}

#[test]
fn test_seat_conflict_keeps_first_student() {
    let seats = [pos(0, 0), pos(0, 1)];
    let roster = vec![student(1), student(2)];

    let validated =
        LayoutValidator::new(seats, &roster).validate(vec![entry(1, 0, 0), entry(2, 0, 0)]);

    assert_eq!(validated.seat_map.occupant_at(pos(0, 0)).unwrap().id, id(1));
    assert_eq!(
        validated.report.diagnostics,
        vec![
            Diagnostic::SeatConflict {
                index: 1,
                student: id(2),
                position: pos(0, 0),
                occupant: id(1)
            },
            Diagnostic::UnassignedStudent { student: id(2) },
        ]
    );
}

#[test]
fn test_unknown_student_is_rejected() {
    let seats = [pos(0, 0)];
    let roster = vec![student(1)];

    let validated =
        LayoutValidator::new(seats, &roster).validate(vec![entry(42, 0, 0), entry(1, 0, 0)]);

    assert_eq!(validated.seat_map.position_of(&id(1)), Some(pos(0, 0)));
    assert!(!validated.seat_map.is_seated(&id(42)));
    assert_eq!(
        validated.report.diagnostics,
        vec![Diagnostic::UnknownStudent {
            index: 0,
            student: id(42),
            position: pos(0, 0)
        }]
    );
}

#[test]
fn test_roster_name_wins_over_response_name() {
    let seats = [pos(0, 0)];
    let roster = vec![Student::new(1u64, "Ada Lovelace")];

    let validated = LayoutValidator::new(seats, &roster)
        .validate(vec![LayoutEntry::new(Student::new(1u64, "ada"), pos(0, 0))]);

    assert_eq!(
        validated.seat_map.occupant_at(pos(0, 0)).unwrap().name,
        "Ada Lovelace"
    );
}

#[test]
fn test_invalid_seat_checked_before_duplicate() {
    let seats = [pos(0, 0)];
    let roster = vec![student(1)];

    let validated =
        LayoutValidator::new(seats, &roster).validate(vec![entry(1, 0, 0), entry(1, 7, 7)]);

    assert!(matches!(
        validated.report.diagnostics.as_slice(),
        [Diagnostic::InvalidSeat { index: 1, .. }]
    ));
}

#[test]
fn test_empty_response_leaves_everyone_unassigned() {
    let seats = [pos(0, 0), pos(0, 1)];
    let roster = vec![student(1), student(2)];

    let validated = LayoutValidator::new(seats, &roster).validate(Vec::new());

    assert_eq!(validated.seat_map.occupied_count(), 0);
    assert_eq!(validated.seat_map.seat_count(), 2);
    assert_eq!(validated.report.unassigned().count(), 2);
    assert!(validated.report.diagnostics.iter().all(|d| !d.is_rejection()));
}

#[test]
fn test_diagnostic_display() {
    let d = Diagnostic::InvalidSeat {
        index: 3,
        student: id(7),
        position: pos(9, 9),
    };
    assert_eq!(
        d.to_string(),
        "entry 3: seat 9-9 for student 7 is not a selected seat"
    );
    assert_eq!(d.student(), &id(7));
}

#[test]
fn test_duplicate_reported_before_seat_conflict() {
    let seats = [pos(0, 0), pos(0, 1)];
    let roster = vec![student(1), student(2)];

    let validated = LayoutValidator::new(seats, &roster).validate(vec![
        entry(1, 0, 0),
        entry(2, 0, 1),
        entry(1, 0, 1),
        entry(2, 0, 0),
    ]);

    assert_eq!(
        validated.report.diagnostics,
        vec![
            Diagnostic::DuplicateAssignment {
                index: 2,
                student: id(1),
                position: pos(0, 1)
            },
            Diagnostic::DuplicateAssignment {
                index: 3,
                student: id(2),
                position: pos(0, 0)
            },
        ]
    );
    assert_eq!(validated.report.accepted, 2);
}

#[test]
fn test_placement_errors_map_to_matching_findings() {
    let taken = SeatError::SeatTaken {
        position: pos(0, 0),
        occupant: id(1),
    };
    assert_eq!(
        Diagnostic::rejected_placement(taken, 4, id(2), pos(0, 0)),
        Diagnostic::SeatConflict {
            index: 4,
            student: id(2),
            position: pos(0, 0),
            occupant: id(1)
        }
    );
    assert_eq!(
        Diagnostic::rejected_placement(SeatError::DuplicateStudent(id(2)), 5, id(2), pos(0, 1)),
        Diagnostic::DuplicateAssignment {
            index: 5,
            student: id(2),
            position: pos(0, 1)
        }
    );
    assert!(matches!(
        Diagnostic::rejected_placement(SeatError::UnknownSeat(pos(3, 3)), 6, id(2), pos(3, 3)),
        Diagnostic::InvalidSeat { index: 6, .. }
    ));
}
