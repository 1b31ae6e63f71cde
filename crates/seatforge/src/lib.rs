//! SeatForge - classroom seat assignment sessions
//!
//! One [`SeatAssignmentEngine`] drives a session: upload a roster, drag out
//! the seats on a grid, confirm them, then swap students, record who should
//! or should not sit together, and ask a layout service for an arrangement.
//!
//! # Example
//!
//! ```rust
//! use seatforge::prelude::*;
//!
//! let roster = CsvRoster::new("name\nAda\nBrian\n");
//! let mut engine = SeatAssignmentEngine::new(SessionConfig::default());
//! engine.ingest_roster(&roster).unwrap();
//! engine
//!     .select_rect(SeatPosition::new(0, 0), SeatPosition::new(1, 1))
//!     .unwrap();
//! engine.confirm_seats().unwrap();
//!
//! assert_eq!(engine.phase(), Phase::Arrangement);
//! assert_eq!(engine.seat_map().vacant_seats().count(), 2);
//! ```

// Domain types
pub use seatforge_core::{
    GridSelector, GridSize, LayoutEntry, LayoutReport, Relation, RelationKind, RelationMode,
    SeatError, SeatMap, SeatPosition, Student, StudentId,
};

pub use seatforge_config::{AcceptancePolicy, ConfigError, SessionConfig};

pub use seatforge_engine::{
    EngineError, GenerationStatus, LayoutOutcome, Phase, SeatAssignmentEngine, SharedSession,
};

pub use seatforge_roster::{CsvRoster, RosterError};

#[cfg(feature = "http")]
pub use seatforge_client::{ClientError, HttpChartExporter, HttpLayoutGenerator};

/// Collaborator ports and wire types.
pub mod port {
    pub use seatforge_engine::{
        ChartExporter, ExportRequest, ExportedChart, ExportedSeat, LayoutGenerator, LayoutRequest,
        RosterSource, SeatKey,
    };
}

/// Layout validation results.
pub mod layout {
    pub use seatforge_core::{Diagnostic, LayoutValidator, ValidatedLayout};
}

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::port::{ChartExporter, LayoutGenerator, RosterSource};
    pub use super::{
        AcceptancePolicy, CsvRoster, GenerationStatus, LayoutOutcome, Phase, RelationKind,
        RelationMode, SeatAssignmentEngine, SeatPosition, SessionConfig, SharedSession, Student,
        StudentId,
    };
    #[cfg(feature = "http")]
    pub use super::{HttpChartExporter, HttpLayoutGenerator};
}
