//! HTTP adapters for the layout-generation and export services.
//!
//! - [`HttpLayoutGenerator`] posts the layout request to `{base_url}/generate`
//! - [`HttpChartExporter`] posts the export request to `{base_url}/export_pdf`
//!
//! Both read their endpoints from [`ServiceConfig`](seatforge_config::ServiceConfig).
//! Non-2xx responses are expected to carry `{"error": "<message>"}`.

mod error;
mod export;
mod generate;
mod http;

pub use error::{ClientError, Result};
pub use export::HttpChartExporter;
pub use generate::HttpLayoutGenerator;
pub use http::build_client;
