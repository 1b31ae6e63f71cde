//! In-memory collaborators for the engine ports.
//!
//! None of these perform I/O. [`GatedGenerator`] lets a test decide when each
//! layout call resolves, which is how overlapping requests are exercised.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use seatforge_core::{LayoutEntry, Student};
use seatforge_engine::{
    ChartExporter, ExportRequest, ExportedChart, LayoutGenerator, LayoutRequest, RosterSource,
};
use thiserror::Error;
use tokio::sync::oneshot;

/// Error returned by the failing stubs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StubError(pub String);

/// Roster source backed by a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticRoster {
    students: Vec<Student>,
    failure: Option<String>,
}

impl StaticRoster {
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            students,
            failure: None,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            students: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl RosterSource for StaticRoster {
    type Error = StubError;

    fn read_students(&self) -> Result<Vec<Student>, StubError> {
        match &self.failure {
            Some(message) => Err(StubError(message.clone())),
            None => Ok(self.students.clone()),
        }
    }
}

/// Seats students in request order; optionally in reverse.
#[derive(Debug, Default)]
pub struct InOrderGenerator {
    reverse: bool,
    calls: AtomicUsize,
}

impl InOrderGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats the first student on the last seat and so on.
    pub fn reversed() -> Self {
        Self {
            reverse: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LayoutGenerator for InOrderGenerator {
    type Error = StubError;

    async fn generate(&self, request: &LayoutRequest) -> Result<Vec<LayoutEntry>, StubError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let seats: Vec<_> = if self.reverse {
            request.seats.iter().rev().collect()
        } else {
            request.seats.iter().collect()
        };
        Ok(request
            .students
            .iter()
            .zip(seats)
            .map(|(student, seat)| LayoutEntry::new(student.clone(), seat.0))
            .collect())
    }
}

/// Generator that always fails with the same message.
#[derive(Debug, Clone)]
pub struct FailingGenerator(pub String);

impl LayoutGenerator for FailingGenerator {
    type Error = StubError;

    async fn generate(&self, _request: &LayoutRequest) -> Result<Vec<LayoutEntry>, StubError> {
        Err(StubError(self.0.clone()))
    }
}

/// Sender side of one gated layout call.
pub type Gate = oneshot::Sender<Result<Vec<LayoutEntry>, StubError>>;

/// Generator whose calls resolve only when the test opens their gate.
///
/// Each call takes the next receiver in the order gates were created.
#[derive(Debug, Default)]
pub struct GatedGenerator {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<Vec<LayoutEntry>, StubError>>>>,
    calls: AtomicUsize,
}

impl GatedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a gate for the next call.
    pub fn gate(&self) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().push_back(rx);
        tx
    }

    /// Number of calls that have started.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Yields until at least `n` calls have started.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }
}

impl LayoutGenerator for GatedGenerator {
    type Error = StubError;

    async fn generate(&self, _request: &LayoutRequest) -> Result<Vec<LayoutEntry>, StubError> {
        let gate = self.gates.lock().pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(StubError("gate dropped".to_string()))),
            None => Err(StubError("no gate queued".to_string())),
        }
    }
}

/// Exporter that records every request and returns a fixed document.
#[derive(Debug, Default)]
pub struct RecordingExporter {
    requests: Mutex<Vec<ExportRequest>>,
}

impl RecordingExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<ExportRequest> {
        self.requests.lock().clone()
    }
}

impl ChartExporter for RecordingExporter {
    type Error = StubError;

    async fn export(&self, request: &ExportRequest) -> Result<ExportedChart, StubError> {
        self.requests.lock().push(request.clone());
        Ok(ExportedChart {
            bytes: b"%PDF-1.4 stub".to_vec(),
            file_name: "seating-chart.pdf".to_string(),
            content_type: Some("application/pdf".to_string()),
        })
    }
}

/// Exporter that always fails.
#[derive(Debug, Clone)]
pub struct FailingExporter(pub String);

impl ChartExporter for FailingExporter {
    type Error = StubError;

    async fn export(&self, _request: &ExportRequest) -> Result<ExportedChart, StubError> {
        Err(StubError(self.0.clone()))
    }
}
