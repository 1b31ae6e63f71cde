//! Chart export over HTTP.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use seatforge_config::{ExportConfig, ServiceConfig};
use seatforge_engine::{ChartExporter, ExportRequest, ExportedChart};

use crate::error::{ClientError, Result};
use crate::http::{build_client, post_json};

/// Calls the export service and names the returned document.
#[derive(Debug, Clone)]
pub struct HttpChartExporter {
    client: Client,
    url: String,
    file_name: String,
}

impl HttpChartExporter {
    pub fn new(service: &ServiceConfig, export: &ExportConfig) -> Result<Self> {
        Ok(Self::with_client(
            build_client(service)?,
            service.export_url(),
            export.file_name.clone(),
        ))
    }

    pub fn with_client(
        client: Client,
        url: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            file_name: file_name.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ChartExporter for HttpChartExporter {
    type Error = ClientError;

    async fn export(&self, request: &ExportRequest) -> Result<ExportedChart> {
        let response = post_json(&self.client, &self.url, request).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?;

        Ok(ExportedChart {
            bytes: bytes.to_vec(),
            file_name: self.file_name.clone(),
            content_type,
        })
    }
}
