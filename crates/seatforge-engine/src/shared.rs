//! A session shared between tasks.

use std::sync::Arc;

use parking_lot::Mutex;
use seatforge_config::SessionConfig;
use tokio::sync::watch;

use crate::engine::{finish_export, LayoutOutcome, SeatAssignmentEngine};
use crate::error::Result;
use crate::phase::GenerationStatus;
use crate::port::{ChartExporter, LayoutGenerator};
use crate::protocol::ExportedChart;

/// Cloneable handle to one [`SeatAssignmentEngine`].
///
/// The lock is never held across an `.await`: layout requests snapshot the
/// session, release it while the generator runs, and reacquire it to apply
/// the result. Several requests may therefore be in flight at once; a
/// result that finishes after a newer one has been applied is dropped.
///
/// Status changes are published on a watch channel so UIs can follow the
/// pending indicator without polling.
#[derive(Debug, Clone)]
pub struct SharedSession {
    engine: Arc<Mutex<SeatAssignmentEngine>>,
    status: Arc<watch::Sender<GenerationStatus>>,
}

impl SharedSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::from_engine(SeatAssignmentEngine::new(config))
    }

    pub fn from_engine(engine: SeatAssignmentEngine) -> Self {
        let (status, _) = watch::channel(engine.generation_status());
        Self {
            engine: Arc::new(Mutex::new(engine)),
            status: Arc::new(status),
        }
    }

    /// Runs `f` with shared access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&SeatAssignmentEngine) -> T) -> T {
        f(&self.engine.lock())
    }

    /// Runs `f` with exclusive access and publishes the resulting status.
    pub fn with_mut<T>(&self, f: impl FnOnce(&mut SeatAssignmentEngine) -> T) -> T {
        let mut engine = self.engine.lock();
        let out = f(&mut engine);
        self.publish(&engine);
        out
    }

    /// Receiver that observes every generation status change.
    pub fn subscribe_status(&self) -> watch::Receiver<GenerationStatus> {
        self.status.subscribe()
    }

    pub fn generation_status(&self) -> GenerationStatus {
        self.engine.lock().generation_status()
    }

    /// Requests a layout without holding the session across the call.
    ///
    /// If the returned future is dropped before the generator answers, the
    /// request is withdrawn and the status falls back to the last settled one.
    pub async fn request_layout<G: LayoutGenerator>(&self, generator: &G) -> Result<LayoutOutcome> {
        let pending = self.with_mut(|engine| engine.begin_layout_request())?;
        let _guard = Withdraw {
            session: self,
            ticket: pending.ticket,
        };
        let result = generator.generate(&pending.request).await;
        self.with_mut(|engine| engine.complete_layout_request(pending.ticket, result))
    }

    /// Exports the assignment as it was when the call started.
    pub async fn export_current_assignment<E: ChartExporter>(
        &self,
        exporter: &E,
    ) -> Result<ExportedChart> {
        let request = self.with(|engine| engine.export_request())?;
        finish_export(exporter.export(&request).await)
    }

    fn publish(&self, engine: &SeatAssignmentEngine) {
        let status = engine.generation_status();
        self.status.send_if_modified(|current| {
            if *current == status {
                false
            } else {
                *current = status;
                true
            }
        });
    }
}

struct Withdraw<'a> {
    session: &'a SharedSession,
    ticket: u64,
}

impl Drop for Withdraw<'_> {
    fn drop(&mut self) {
        self.session
            .with_mut(|engine| engine.abandon_layout_request(self.ticket));
    }
}

impl Default for SharedSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
