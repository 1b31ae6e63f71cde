//! The delimited-text roster source.

use std::fs;
use std::io::Read;
use std::path::Path;

use seatforge_core::Student;
use seatforge_engine::RosterSource;
use tracing::{debug, info};

use crate::error::{Result, RosterError};
use crate::header::{find_header, MAX_HEADER_SEARCH_ROWS};
use crate::records::parse_records;

/// Roster held as delimited text, parsed on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRoster {
    text: String,
    delimiter: char,
}

impl CsvRoster {
    /// Comma-separated roster from `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delimiter: ',',
        }
    }

    /// Reads a roster file. Files ending in `.tsv` are tab-separated.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let roster = Self::new(text);
        let is_tsv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
        Ok(if is_tsv {
            roster.with_delimiter('\t')
        } else {
            roster
        })
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::new(text))
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Parses the roster.
    ///
    /// Every non-empty row after the header becomes a student with an id
    /// counting from 1. Blank or missing names become `"Student <id>"`.
    pub fn parse(&self) -> Result<Vec<Student>> {
        let rows = parse_records(&self.text, self.delimiter)?;
        let header = find_header(&rows).ok_or(RosterError::MissingNameColumn {
            searched: rows.len().min(MAX_HEADER_SEARCH_ROWS),
        })?;
        debug!(
            event = "roster_header",
            row = header.row,
            column = header.column,
        );

        let students: Vec<Student> = rows[header.row + 1..]
            .iter()
            .zip(1u64..)
            .map(|(row, id)| {
                let name = row
                    .get(header.column)
                    .map(|cell| cell.trim())
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Student {id}"));
                Student::new(id, name)
            })
            .collect();

        info!(event = "roster_parsed", students = students.len());
        Ok(students)
    }
}

impl RosterSource for CsvRoster {
    type Error = RosterError;

    fn read_students(&self) -> Result<Vec<Student>> {
        self.parse()
    }
}
