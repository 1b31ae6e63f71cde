//! Shared test fixtures for SeatForge crates.
//!
//! - [`fixtures`] - students, rosters and seat lists
//! - [`stubs`] - in-memory collaborators for the engine ports
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! seatforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use seatforge_test::{roster, row_seats, InOrderGenerator};
//! ```

pub mod fixtures;
pub mod stubs;

pub use fixtures::{pos, roster, row_seats, seats, student};
pub use stubs::{
    FailingExporter, FailingGenerator, Gate, GatedGenerator, InOrderGenerator, RecordingExporter,
    StaticRoster, StubError,
};
