//! SeatForge Engine - the seat-assignment session state machine
//!
//! [`SeatAssignmentEngine`] owns one seating session: the roster, the seat
//! selection, the seat map, the relation tracker and the status of layout
//! generation. Collaborators (roster files, the layout optimizer, chart
//! export) are reached through the traits in [`port`]; their adapters live in
//! separate crates.
//!
//! Logging levels:
//! - **INFO**: phase transitions, layout requests and their results
//! - **DEBUG**: swaps and relation picks
//! - **WARN**: collaborator failures and rejected layouts

pub mod engine;
pub mod error;
pub mod phase;
pub mod port;
pub mod protocol;
pub mod shared;

pub use engine::{LayoutOutcome, PendingLayout, SeatAssignmentEngine};
pub use error::{EngineError, Result};
pub use phase::{GenerationStatus, Phase};
pub use port::{ChartExporter, LayoutGenerator, RosterSource};
pub use protocol::{ExportRequest, ExportedChart, ExportedSeat, LayoutRequest, SeatKey};
pub use shared::SharedSession;
