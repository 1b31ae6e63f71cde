//! Wire shapes exchanged with the layout-generation and export collaborators.
//!
//! Seat lists travel as `"row-col"` seat keys; generated placements come back
//! with `{row, col}` objects (see [`LayoutEntry`]).

use std::fmt;

use seatforge_core::{Relation, SeatPosition, Student};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

pub use seatforge_core::LayoutEntry;

/// A seat position in its `"row-col"` string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatKey(pub SeatPosition);

impl From<SeatPosition> for SeatKey {
    fn from(pos: SeatPosition) -> Self {
        SeatKey(pos)
    }
}

impl fmt::Display for SeatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for SeatKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SeatKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map(SeatKey).map_err(de::Error::custom)
    }
}

/// Snapshot sent to the layout-generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub students: Vec<Student>,
    pub seats: Vec<SeatKey>,
    pub relations: Vec<Relation>,
}

/// One seated student in an export request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedSeat {
    #[serde(flatten)]
    pub student: Student,
    pub position: SeatKey,
}

/// Snapshot sent to the export collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub students: Vec<ExportedSeat>,
    pub seats: Vec<SeatKey>,
}

/// Document returned by the export collaborator.
///
/// The bytes are opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedChart {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: Option<String>,
}
