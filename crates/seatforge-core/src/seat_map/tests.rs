//! Tests for seat map seeding and swap semantics.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::*;

fn pos(row: u32, col: u32) -> SeatPosition {
    SeatPosition::new(row, col)
}

fn id(n: u64) -> StudentId {
    StudentId::from(n)
}

fn roster(n: u64) -> Vec<Student> {
    (1..=n).map(|i| Student::new(i, format!("S{}", i))).collect()
}

fn seats(positions: &[(u32, u32)]) -> IndexSet<SeatPosition> {
    positions.iter().map(|&p| SeatPosition::from(p)).collect()
}

/// Every student appears at most once and the reverse index agrees.
fn assert_consistent(map: &SeatMap) {
    let mut seen = HashSet::new();
    for (p, student) in map.occupants() {
        assert!(seen.insert(student.id.clone()), "{} seated twice", student.id);
        assert_eq!(map.position_of(&student.id), Some(p));
    }
    assert_eq!(seen.len(), map.occupied_count());
}

#[test]
fn test_seed_pairs_roster_with_selection_order() {
    let seats = seats(&[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1)]);
    let map = SeatMap::seed(&seats, &roster(3)).unwrap();

    assert_eq!(map.seat_count(), 5);
    assert_eq!(map.occupied_count(), 3);
    assert_eq!(map.position_of(&id(1)), Some(pos(0, 0)));
    assert_eq!(map.position_of(&id(2)), Some(pos(0, 1)));
    assert_eq!(map.position_of(&id(3)), Some(pos(0, 2)));
    assert_eq!(map.vacant_seats().collect::<Vec<_>>(), vec![pos(1, 0), pos(1, 1)]);
}

#[test]
fn test_seed_follows_insertion_order_not_sorted_order() {
    let seats = seats(&[(3, 3), (0, 0)]);
    let map = SeatMap::seed(&seats, &roster(2)).unwrap();
    assert_eq!(map.position_of(&id(1)), Some(pos(3, 3)));
    assert_eq!(map.position_of(&id(2)), Some(pos(0, 0)));
}

#[test]
fn test_seed_insufficient_seats() {
    let seats = seats(&[(0, 0), (0, 1)]);
    let err = SeatMap::seed(&seats, &roster(3)).unwrap_err();
    assert_eq!(
        err,
        SeatError::InsufficientSeats {
            seats: 2,
            students: 3
        }
    );
}

#[test]
fn test_seed_rejects_duplicate_ids() {
    let seats = seats(&[(0, 0), (0, 1)]);
    let students = vec![Student::new(7u64, "A"), Student::new(7u64, "B")];
    assert_eq!(
        SeatMap::seed(&seats, &students).unwrap_err(),
        SeatError::DuplicateStudent(id(7))
    );
}

#[test]
fn test_swap_exchanges_two_students() {
    let seats = seats(&[(0, 0), (1, 1)]);
    let mut map = SeatMap::seed(&seats, &roster(2)).unwrap();

    let outcome = map.swap(&id(1), pos(1, 1)).unwrap();

    assert_eq!(
        outcome,
        SwapOutcome::Swapped {
            from: pos(0, 0),
            to: pos(1, 1),
            displaced: id(2)
        }
    );
    assert_eq!(map.occupant_at(pos(1, 1)).unwrap().id, id(1));
    assert_eq!(map.occupant_at(pos(0, 0)).unwrap().id, id(2));
    assert_consistent(&map);
}

#[test]
fn test_swap_onto_vacant_seat_vacates_source() {
    let seats = seats(&[(0, 0), (0, 1), (2, 2)]);
    let mut map = SeatMap::seed(&seats, &roster(2)).unwrap();

    let outcome = map.swap(&id(1), pos(2, 2)).unwrap();

    assert_eq!(
        outcome,
        SwapOutcome::Moved {
            from: pos(0, 0),
            to: pos(2, 2)
        }
    );
    assert!(map.occupant_at(pos(0, 0)).is_none());
    assert_eq!(map.position_of(&id(1)), Some(pos(2, 2)));
    assert_eq!(map.occupied_count(), 2);
    assert_consistent(&map);
}

#[test]
fn test_swap_onto_own_seat_is_noop() {
    let seats = seats(&[(0, 0), (0, 1)]);
    let mut map = SeatMap::seed(&seats, &roster(2)).unwrap();
    let before = map.clone();

    assert_eq!(
        map.swap(&id(2), pos(0, 1)).unwrap(),
        SwapOutcome::Unchanged(pos(0, 1))
    );
    assert_eq!(map, before);
}

#[test]
fn test_swap_unseated_student_leaves_map_unchanged() {
    let seats = seats(&[(0, 0), (0, 1)]);
    let mut map = SeatMap::seed(&seats, &roster(1)).unwrap();
    let before = map.clone();

    let err = map.swap(&id(9), pos(0, 1)).unwrap_err();

    assert_eq!(err, SeatError::StudentNotSeated(id(9)));
    assert_eq!(map, before);
}

#[test]
fn test_swap_to_unknown_seat_leaves_map_unchanged() {
    let seats = seats(&[(0, 0), (0, 1)]);
    let mut map = SeatMap::seed(&seats, &roster(2)).unwrap();
    let before = map.clone();

    let err = map.swap(&id(1), pos(5, 5)).unwrap_err();

    assert_eq!(err, SeatError::UnknownSeat(pos(5, 5)));
    assert_eq!(map, before);
    assert_eq!(map.position_of(&id(1)), Some(pos(0, 0)));
}

#[test]
fn test_vacant_map_has_no_occupants() {
    let map = SeatMap::vacant([pos(0, 0), pos(0, 1)]);
    assert_eq!(map.seat_count(), 2);
    assert_eq!(map.occupied_count(), 0);
    assert!(map.occupant_at(pos(0, 0)).is_none());
    assert!(map.occupant_at(pos(4, 4)).is_none());
    assert!(!map.is_seated(&id(1)));
}

#[test]
fn test_replace_swaps_whole_assignment() {
    let seats = seats(&[(0, 0), (0, 1)]);
    let mut live = SeatMap::seed(&seats, &roster(2)).unwrap();
    let mut fresh = SeatMap::vacant(seats.iter().copied());
    fresh.place(pos(0, 1), Student::new(1u64, "S1")).unwrap();

    live.replace(fresh);

    assert_eq!(live.position_of(&id(1)), Some(pos(0, 1)));
    assert!(!live.is_seated(&id(2)));
    assert!(live.occupant_at(pos(0, 0)).is_none());
}

#[test]
fn test_place_refuses_taken_seat_and_repeat_student() {
    let mut map = SeatMap::vacant([pos(0, 0), pos(0, 1)]);
    map.place(pos(0, 0), Student::new(1u64, "S1")).unwrap();

    assert_eq!(
        map.place(pos(0, 0), Student::new(2u64, "S2")).unwrap_err(),
        SeatError::SeatTaken {
            position: pos(0, 0),
            occupant: StudentId::from(1u64)
        }
    );
    assert_eq!(
        map.place(pos(0, 1), Student::new(1u64, "S1")).unwrap_err(),
        SeatError::DuplicateStudent(id(1))
    );
    assert_eq!(
        map.place(pos(3, 3), Student::new(3u64, "S3")).unwrap_err(),
        SeatError::UnknownSeat(pos(3, 3))
    );
    assert_consistent(&map);
}

#[test]
fn test_random_swap_sequences_never_duplicate_students() {
    let seat_list: Vec<_> = (0..4)
        .flat_map(|row| (0..4).map(move |col| pos(row, col)))
        .collect();
    let seats: IndexSet<_> = seat_list.iter().copied().collect();
    let students = roster(11);

    for seed in 0..16u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut map = SeatMap::seed(&seats, &students).unwrap();

        for _ in 0..200 {
            let who = id(rng.random_range(1..=12));
            let target = seat_list[rng.random_range(0..seat_list.len())];
            let before = map.clone();

            match map.swap(&who, target) {
                Ok(_) => assert_eq!(map.position_of(&who), Some(target)),
                Err(err) => {
                    assert_eq!(err, SeatError::StudentNotSeated(who.clone()));
                    assert_eq!(map, before);
                }
            }
            assert_consistent(&map);
            assert_eq!(map.occupied_count(), students.len());
        }
    }
}
