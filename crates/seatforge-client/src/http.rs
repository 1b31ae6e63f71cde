//! Shared request plumbing.

use reqwest::{Client, Response};
use seatforge_config::ServiceConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, Result};

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Builds a client honouring the configured timeout.
pub fn build_client(config: &ServiceConfig) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Posts `body` as JSON and returns the response if it is a success.
pub(crate) async fn post_json<T: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    body: &T,
) -> Result<Response> {
    debug!(event = "http_post", url);
    let response = client.post(url).json(body).send().await?;
    let status = response.status();
    debug!(event = "http_response", url, status = status.as_u16());

    if status.is_success() {
        return Ok(response);
    }

    let bytes = response.bytes().await?;
    let message = match serde_json::from_slice::<ErrorBody>(&bytes) {
        Ok(body) => body.error,
        Err(_) => {
            let text = String::from_utf8_lossy(&bytes).trim().to_string();
            if text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                text
            }
        }
    };
    Err(ClientError::Remote {
        status: status.as_u16(),
        message,
    })
}
