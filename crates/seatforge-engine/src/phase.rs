//! Session phase and generation status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Two-stage session state machine. The only transition is
/// `Selection -> Arrangement`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Seats are being chosen on the grid.
    #[default]
    Selection,

    /// Students are being placed and adjusted.
    Arrangement,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Selection => f.write_str("seat selection"),
            Phase::Arrangement => f.write_str("arrangement"),
        }
    }
}

/// Status of the layout-generation collaborator as seen by the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Failed,
}

impl fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GenerationStatus::Idle => "idle",
            GenerationStatus::Pending => "pending",
            GenerationStatus::Success => "success",
            GenerationStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}
