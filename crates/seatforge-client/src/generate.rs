//! Layout generation over HTTP.

use reqwest::Client;
use seatforge_config::ServiceConfig;
use seatforge_core::LayoutEntry;
use seatforge_engine::{LayoutGenerator, LayoutRequest};

use crate::error::{ClientError, Result};
use crate::http::{build_client, post_json};

/// Calls the layout-generation service.
#[derive(Debug, Clone)]
pub struct HttpLayoutGenerator {
    client: Client,
    url: String,
}

impl HttpLayoutGenerator {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        Ok(Self::with_client(build_client(config)?, config.generate_url()))
    }

    /// Uses an existing client, e.g. one shared with the exporter.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl LayoutGenerator for HttpLayoutGenerator {
    type Error = ClientError;

    async fn generate(&self, request: &LayoutRequest) -> Result<Vec<LayoutEntry>> {
        let response = post_json(&self.client, &self.url, request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
