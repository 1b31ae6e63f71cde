//! Collaborator interfaces the engine calls.
//!
//! The engine never performs I/O itself. Hosts inject implementations of
//! these traits; results are applied to the session only after the call has
//! resolved.

use std::error::Error;
use std::future::Future;

use seatforge_core::{LayoutEntry, Student};

use crate::protocol::{ExportRequest, ExportedChart, LayoutRequest};

/// Produces the student roster, e.g. from an uploaded file.
///
/// Implementations assign sequential ids starting at 1 and trimmed,
/// non-empty names.
pub trait RosterSource {
    type Error: Error + Send + Sync + 'static;

    fn read_students(&self) -> Result<Vec<Student>, Self::Error>;
}

/// Computes a candidate seat assignment from students, seats and relations.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use seatforge_core::LayoutEntry;
/// use seatforge_engine::{LayoutGenerator, LayoutRequest};
///
/// /// Seats students in request order.
/// struct InOrder;
///
/// impl LayoutGenerator for InOrder {
///     type Error = Infallible;
///
///     async fn generate(&self, request: &LayoutRequest) -> Result<Vec<LayoutEntry>, Infallible> {
///         Ok(request
///             .students
///             .iter()
///             .zip(&request.seats)
///             .map(|(student, seat)| LayoutEntry::new(student.clone(), seat.0))
///             .collect())
///     }
/// }
/// ```
pub trait LayoutGenerator: Send + Sync {
    type Error: Error + Send + Sync + 'static;

    fn generate(
        &self,
        request: &LayoutRequest,
    ) -> impl Future<Output = Result<Vec<LayoutEntry>, Self::Error>> + Send;
}

/// Renders the current assignment into a downloadable document.
pub trait ChartExporter: Send + Sync {
    type Error: Error + Send + Sync + 'static;

    fn export(
        &self,
        request: &ExportRequest,
    ) -> impl Future<Output = Result<ExportedChart, Self::Error>> + Send;
}
