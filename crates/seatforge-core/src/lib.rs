//! SeatForge Core - seat, student and relation state for classroom seating
//!
//! This crate provides the state model the seating engine is built on:
//! - Domain types: seat positions, students, relations
//! - [`GridSelector`] for turning drag gestures into a seat set
//! - [`SeatMap`] for the position to student assignment and its swap semantics
//! - [`RelationTracker`] for collecting `avoid` / `prefer` pairs from picks
//! - [`LayoutValidator`] for checking externally generated layouts

pub mod domain;
pub mod error;
pub mod grid;
pub mod layout;
pub mod relation;
pub mod seat_map;

pub use domain::{GridSize, SeatPosition, Student, StudentId};
pub use error::{Result, SeatError};
pub use grid::GridSelector;
pub use layout::{Diagnostic, LayoutEntry, LayoutReport, LayoutValidator, ValidatedLayout};
pub use relation::{
    relation_lines, PickOutcome, Relation, RelationKind, RelationLine, RelationMode,
    RelationTracker,
};
pub use seat_map::{SeatMap, SwapOutcome};

pub use indexmap::IndexSet;
