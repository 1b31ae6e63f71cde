//! The seat-assignment session orchestrator.

mod requests;

use std::collections::HashSet;
use std::fmt::Display;

use seatforge_config::{AcceptancePolicy, SessionConfig};
use seatforge_core::{
    relation_lines, GridSelector, IndexSet, LayoutEntry, LayoutReport, LayoutValidator,
    PickOutcome, Relation, RelationLine, RelationMode, RelationTracker, SeatMap, SeatPosition,
    Student, StudentId, SwapOutcome,
};
use tracing::{debug, info, warn};

use crate::error::{EngineError, Result};
use crate::phase::{GenerationStatus, Phase};
use crate::port::{ChartExporter, LayoutGenerator, RosterSource};
use crate::protocol::{ExportRequest, ExportedChart, ExportedSeat, LayoutRequest, SeatKey};

use requests::{RequestLedger, Resolution};

/// A layout request that has been snapshotted but not yet completed.
///
/// Hand `request` to the generator, then pass `ticket` and the result to
/// [`SeatAssignmentEngine::complete_layout_request`].
#[derive(Debug, Clone)]
pub struct PendingLayout {
    pub ticket: u64,
    pub request: LayoutRequest,
}

/// What happened to a completed layout request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutOutcome {
    /// The layout replaced the seat map; the report lists any findings.
    Applied(LayoutReport),

    /// A newer layout was already applied; this result was dropped.
    Stale { ticket: u64 },
}

/// One seating session: roster, seat selection, seat map and relations.
///
/// The session starts in [`Phase::Selection`], where the roster is uploaded
/// and seats are chosen on the grid. [`confirm_seats`] freezes the seat set,
/// seeds the seat map and moves to [`Phase::Arrangement`], where students are
/// swapped, relations are recorded and layouts are requested.
///
/// Every mutating call either completes or returns an error with the session
/// unchanged.
///
/// [`confirm_seats`]: SeatAssignmentEngine::confirm_seats
///
/// # Example
///
/// ```
/// use seatforge_core::{SeatPosition, Student, StudentId};
/// use seatforge_engine::{Phase, SeatAssignmentEngine};
///
/// let mut engine = SeatAssignmentEngine::default();
/// engine
///     .upload_roster(vec![Student::new(1u64, "Ada"), Student::new(2u64, "Brian")])
///     .unwrap();
/// engine
///     .select_rect(SeatPosition::new(0, 0), SeatPosition::new(0, 2))
///     .unwrap();
/// engine.confirm_seats().unwrap();
///
/// assert_eq!(engine.phase(), Phase::Arrangement);
/// engine
///     .swap_student(&StudentId::from(1u64), SeatPosition::new(0, 2))
///     .unwrap();
/// assert_eq!(engine.seat_map().vacant_seats().next(), Some(SeatPosition::new(0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct SeatAssignmentEngine {
    config: SessionConfig,
    phase: Phase,
    roster: Vec<Student>,
    selector: GridSelector,
    seat_map: SeatMap,
    relations: RelationTracker,
    requests: RequestLedger,
    settled_status: GenerationStatus,
    status_message: Option<String>,
}

impl SeatAssignmentEngine {
    pub fn new(config: SessionConfig) -> Self {
        let selector = GridSelector::new(config.grid_size());
        Self {
            config,
            phase: Phase::Selection,
            roster: Vec::new(),
            selector,
            seat_map: SeatMap::default(),
            relations: RelationTracker::new(),
            requests: RequestLedger::default(),
            settled_status: GenerationStatus::Idle,
            status_message: None,
        }
    }

    // ------------------------------------------------------------------
    // Selection phase
    // ------------------------------------------------------------------

    /// Replaces the roster.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidRoster`] if two students share an id or a name
    /// is blank.
    pub fn upload_roster(&mut self, students: Vec<Student>) -> Result<()> {
        self.require(Phase::Selection, "upload_roster")?;

        let mut ids = HashSet::with_capacity(students.len());
        for student in &students {
            if student.name.trim().is_empty() {
                return Err(EngineError::InvalidRoster(format!(
                    "student {} has a blank name",
                    student.id
                )));
            }
            if !ids.insert(&student.id) {
                return Err(EngineError::InvalidRoster(format!(
                    "student id {} appears more than once",
                    student.id
                )));
            }
        }

        info!(event = "roster_uploaded", students = students.len());
        self.roster = students;
        Ok(())
    }

    /// Reads the roster from `source` and uploads it.
    pub fn ingest_roster<R: RosterSource>(&mut self, source: &R) -> Result<usize> {
        self.require(Phase::Selection, "ingest_roster")?;
        let students = source.read_students().map_err(|e| {
            warn!(event = "roster_ingestion_failed", error = %e);
            EngineError::RosterIngestionFailed(e.to_string())
        })?;
        let count = students.len();
        self.upload_roster(students)?;
        Ok(count)
    }

    /// Starts a drag at `pos`.
    pub fn begin_selection(&mut self, pos: SeatPosition) -> Result<&IndexSet<SeatPosition>> {
        self.require(Phase::Selection, "begin_selection")?;
        Ok(self.selector.begin_selection(pos)?)
    }

    /// Sweeps the active drag to `pos`.
    pub fn extend_selection(&mut self, pos: SeatPosition) -> Result<&IndexSet<SeatPosition>> {
        self.require(Phase::Selection, "extend_selection")?;
        Ok(self.selector.extend_selection(pos)?)
    }

    /// Ends the active drag.
    pub fn end_selection(&mut self) -> Result<()> {
        self.require(Phase::Selection, "end_selection")?;
        self.selector.end_selection();
        Ok(())
    }

    /// Selects the rectangle spanned by `start` and `end` in one gesture.
    pub fn select_rect(
        &mut self,
        start: SeatPosition,
        end: SeatPosition,
    ) -> Result<&IndexSet<SeatPosition>> {
        self.require(Phase::Selection, "select_rect")?;
        Ok(self.selector.select_rect(start, end)?)
    }

    /// Freezes the seat set, seeds the seat map and enters arrangement.
    ///
    /// # Errors
    ///
    /// `InsufficientSeats` when fewer seats are selected than there are
    /// students; the phase does not change.
    pub fn confirm_seats(&mut self) -> Result<()> {
        self.require(Phase::Selection, "confirm_seats")?;

        let seat_map = SeatMap::seed(self.selector.selected(), &self.roster)?;
        self.selector.end_selection();
        self.seat_map = seat_map;
        self.phase = Phase::Arrangement;

        info!(
            event = "seats_confirmed",
            seats = self.seat_map.seat_count(),
            students = self.roster.len(),
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Arrangement phase
    // ------------------------------------------------------------------

    /// Moves a student to `target`, trading places with any occupant.
    pub fn swap_student(&mut self, id: &StudentId, target: SeatPosition) -> Result<SwapOutcome> {
        self.require(Phase::Arrangement, "swap_student")?;
        let outcome = self.seat_map.swap(id, target)?;
        debug!(event = "student_swapped", student = %id, target = %target, outcome = ?outcome);
        Ok(outcome)
    }

    /// Sets the relation pick mode.
    pub fn set_relation_mode(&mut self, mode: RelationMode) -> Result<()> {
        self.require(Phase::Arrangement, "set_relation_mode")?;
        self.relations.set_mode(mode);
        debug!(event = "relation_mode", mode = ?mode);
        Ok(())
    }

    /// Picks a student under the current relation mode.
    pub fn pick_student(&mut self, id: &StudentId) -> Result<PickOutcome> {
        self.require(Phase::Arrangement, "pick_student")?;
        if !self.roster.iter().any(|s| &s.id == id) {
            return Err(EngineError::UnknownStudent(id.clone()));
        }
        let outcome = self.relations.pick(id.clone());
        debug!(event = "student_picked", student = %id, outcome = ?outcome);
        Ok(outcome)
    }

    /// Drops a half-picked pair without leaving the current mode.
    pub fn clear_pending_pick(&mut self) -> Result<()> {
        self.require(Phase::Arrangement, "clear_pending_pick")?;
        self.relations.clear_pending();
        Ok(())
    }

    /// Snapshots the layout request and marks generation as pending.
    pub fn begin_layout_request(&mut self) -> Result<PendingLayout> {
        self.require(Phase::Arrangement, "request_layout")?;

        let request = LayoutRequest {
            students: self.roster.clone(),
            seats: self.selector.selected().iter().copied().map(SeatKey).collect(),
            relations: self.relations.relations().to_vec(),
        };
        let ticket = self.requests.issue();

        info!(
            event = "layout_requested",
            ticket,
            students = request.students.len(),
            seats = request.seats.len(),
            relations = request.relations.len(),
        );
        Ok(PendingLayout { ticket, request })
    }

    /// Applies the collaborator's answer to request `ticket`.
    ///
    /// The layout is validated against the current seats and roster. Under
    /// the lenient policy the validated map always replaces the seat map;
    /// under the strict policy any finding rejects the whole layout.
    ///
    /// # Errors
    ///
    /// - `GenerationRequestFailed` when `result` is an error;
    /// - `LayoutRejected` under the strict policy;
    /// - `UnknownTicket` when `ticket` is not outstanding.
    pub fn complete_layout_request<E: Display>(
        &mut self,
        ticket: u64,
        result: std::result::Result<Vec<LayoutEntry>, E>,
    ) -> Result<LayoutOutcome> {
        let resolution = self
            .requests
            .resolve(ticket)
            .ok_or(EngineError::UnknownTicket(ticket))?;

        if resolution == Resolution::Stale {
            info!(event = "layout_dropped", ticket);
            return Ok(LayoutOutcome::Stale { ticket });
        }

        let entries = match result {
            Ok(entries) => entries,
            Err(e) => {
                let message = e.to_string();
                warn!(event = "layout_request_failed", ticket, error = %message);
                self.settle(GenerationStatus::Failed, Some(message.clone()));
                return Err(EngineError::GenerationRequestFailed(message));
            }
        };

        let seats = self.selector.selected().iter().copied();
        let validated = LayoutValidator::new(seats, &self.roster).validate(entries);
        let report = validated.report;

        if self.config.acceptance_policy == AcceptancePolicy::Strict && !report.is_clean() {
            let message = format!("layout rejected: {} finding(s)", report.diagnostics.len());
            warn!(event = "layout_rejected", ticket, findings = report.diagnostics.len());
            self.settle(GenerationStatus::Failed, Some(message));
            return Err(EngineError::LayoutRejected(report));
        }

        self.seat_map.replace(validated.seat_map);
        self.requests.mark_applied(ticket);

        let message = if report.is_clean() {
            None
        } else {
            Some(format!(
                "{} finding(s), {} student(s) missing",
                report.diagnostics.len(),
                self.missing_count()
            ))
        };
        self.settle(GenerationStatus::Success, message);

        info!(
            event = "layout_applied",
            ticket,
            accepted = report.accepted,
            findings = report.diagnostics.len(),
        );
        Ok(LayoutOutcome::Applied(report))
    }

    /// Withdraws request `ticket` without applying anything.
    ///
    /// The seat map and the last settled status are untouched. Returns
    /// `false` if the ticket was not outstanding.
    pub fn abandon_layout_request(&mut self, ticket: u64) -> bool {
        let abandoned = self.requests.abandon(ticket);
        if abandoned {
            info!(event = "layout_abandoned", ticket);
        }
        abandoned
    }

    /// Requests a layout from `generator` and applies it.
    ///
    /// The request is snapshotted before the call suspends. Dropping the
    /// future before the generator answers withdraws the request.
    pub async fn request_layout<G: LayoutGenerator>(
        &mut self,
        generator: &G,
    ) -> Result<LayoutOutcome> {
        let pending = self.begin_layout_request()?;
        let guard = AbandonOnDrop {
            engine: self,
            ticket: pending.ticket,
        };
        let result = generator.generate(&pending.request).await;
        guard.engine.complete_layout_request(pending.ticket, result)
    }

    /// Snapshots the current assignment for export.
    pub fn export_request(&self) -> Result<ExportRequest> {
        self.require(Phase::Arrangement, "export")?;
        Ok(ExportRequest {
            students: self
                .seat_map
                .occupants()
                .map(|(pos, student)| ExportedSeat {
                    student: student.clone(),
                    position: SeatKey(pos),
                })
                .collect(),
            seats: self.seat_map.seats().map(SeatKey).collect(),
        })
    }

    /// Sends the current assignment to `exporter`. Never mutates the session.
    pub async fn export_current_assignment<E: ChartExporter>(
        &self,
        exporter: &E,
    ) -> Result<ExportedChart> {
        let request = self.export_request()?;
        finish_export(exporter.export(&request).await)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    /// Seats selected so far, in selection order. Fixed once arranged.
    pub fn selected_seats(&self) -> &IndexSet<SeatPosition> {
        self.selector.selected()
    }

    pub fn seat_map(&self) -> &SeatMap {
        &self.seat_map
    }

    pub fn relations(&self) -> &[Relation] {
        self.relations.relations()
    }

    pub fn relation_mode(&self) -> RelationMode {
        self.relations.mode()
    }

    /// Student waiting for a relation partner, if any.
    pub fn pending_pick(&self) -> Option<&StudentId> {
        self.relations.pending()
    }

    /// Relations whose students are both seated, with their seats.
    pub fn relation_lines(&self) -> Vec<RelationLine<'_>> {
        relation_lines(self.relations.relations(), &self.seat_map)
    }

    pub fn generation_status(&self) -> GenerationStatus {
        if self.requests.has_outstanding() {
            GenerationStatus::Pending
        } else {
            self.settled_status
        }
    }

    /// Message accompanying the last settled generation, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Roster students without a seat.
    pub fn missing_count(&self) -> usize {
        self.roster
            .iter()
            .filter(|s| !self.seat_map.is_seated(&s.id))
            .count()
    }

    fn require(&self, phase: Phase, operation: &'static str) -> Result<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(EngineError::PhaseMismatch {
                operation,
                phase: self.phase,
            })
        }
    }

    fn settle(&mut self, status: GenerationStatus, message: Option<String>) {
        self.settled_status = status;
        self.status_message = message;
    }
}

impl Default for SeatAssignmentEngine {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

/// Withdraws its ticket when dropped, unless the request already resolved.
struct AbandonOnDrop<'a> {
    engine: &'a mut SeatAssignmentEngine,
    ticket: u64,
}

impl Drop for AbandonOnDrop<'_> {
    fn drop(&mut self) {
        self.engine.abandon_layout_request(self.ticket);
    }
}

pub(crate) fn finish_export<E: Display>(
    result: std::result::Result<ExportedChart, E>,
) -> Result<ExportedChart> {
    match result {
        Ok(chart) => {
            info!(
                event = "chart_exported",
                file = %chart.file_name,
                bytes = chart.bytes.len(),
            );
            Ok(chart)
        }
        Err(e) => {
            warn!(event = "export_failed", error = %e);
            Err(EngineError::ExportRequestFailed(e.to_string()))
        }
    }
}
