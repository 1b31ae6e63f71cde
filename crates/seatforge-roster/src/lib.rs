//! Roster ingestion from delimited text (CSV, TSV).
//!
//! [`CsvRoster`] finds the header row by looking for a name column in the
//! first few non-empty rows, then turns every later row into a
//! [`Student`](seatforge_core::Student) with a sequential id.
//!
//! ```
//! use seatforge_engine::RosterSource;
//! use seatforge_roster::CsvRoster;
//!
//! let roster = CsvRoster::new("Class 3B\nNo.,Name,Score\n1,Ada,90\n2,Brian,85\n");
//! let students = roster.read_students().unwrap();
//!
//! assert_eq!(students.len(), 2);
//! assert_eq!(students[1].name, "Brian");
//! ```

mod error;
mod header;
mod records;
mod roster;

pub use error::{Result, RosterError};
pub use header::{find_header, HeaderMatch, MAX_HEADER_SEARCH_ROWS, NAME_KEYS};
pub use records::parse_records;
pub use roster::CsvRoster;
