//! Client for the external brain-dump extraction service.
//!
//! The service receives free-form text and classifies it into tasks,
//! shopping items, and calendar events matching
//! [`offload_core::extraction::ExtractedBrainDump`]. The service itself
//! (model choice, prompting, accuracy) is an external collaborator; this
//! crate only speaks its HTTP API.

use async_trait::async_trait;
use offload_core::extraction::ExtractedBrainDump;

/// Errors from the extraction service client.
#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("extraction service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Turns free-form brain-dump text into structured items.
///
/// Production uses [`HttpExtractor`]; tests substitute stubs so requests
/// never leave the process.
#[async_trait]
pub trait BrainDumpExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<ExtractedBrainDump, ExtractorError>;
}

/// HTTP client for the extraction service.
pub struct HttpExtractor {
    client: reqwest::Client,
    base_url: String,
}

impl HttpExtractor {
    /// Create a client for the service at `base_url`, e.g. `http://host:8090`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl BrainDumpExtractor for HttpExtractor {
    /// `POST /extract` with the raw text, expecting the structured schema back.
    async fn extract(&self, text: &str) -> Result<ExtractedBrainDump, ExtractorError> {
        let body = serde_json::json!({ "text": text });

        let response = self
            .client
            .post(format!("{}/extract", self.base_url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ExtractorError::Api { status, body });
        }

        Ok(response.json().await?)
    }
}
