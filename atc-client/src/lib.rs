//! ATC HTTP Client
//!
//! A small, type-safe HTTP client for the pipeline-management endpoints of the
//! ATC API (`/api/v1/pipelines`).
//!
//! Every operation is a single request/response exchange. A `404` on an
//! operation that targets one pipeline is treated as absence, not failure:
//! it comes back as `Ok(false)` or `Ok(None)`. Any other unexpected status is
//! returned as [`ClientError::ApiError`].
//!
//! # Example
//!
//! ```no_run
//! use atc_client::AtcClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AtcClient::new("http://localhost:8080");
//!
//!     match client.pipeline("main").await? {
//!         Some(pipeline) => println!("{} paused={}", pipeline.name, pipeline.paused),
//!         None => println!("no such pipeline"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod pipelines;

#[cfg(test)]
mod test_server;

// Re-export commonly used types
pub use atc_core::domain::pipeline::{GroupConfig, Pipeline};
pub use error::{ClientError, Result};
pub use pipelines::PipelineApi;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::warn;

/// Path segments every pipeline endpoint lives under
const PIPELINES_PATH: [&str; 3] = ["api", "v1", "pipelines"];

/// HTTP client for the ATC pipeline API
///
/// Stateless between calls; share it across tasks freely.
#[derive(Debug, Clone)]
pub struct AtcClient {
    /// Base URL of the ATC (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl AtcClient {
    /// Client for the ATC at `base_url`, using a default `reqwest::Client`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Client for the ATC at `base_url` over a caller-built transport
    ///
    /// Timeouts, proxies and TLS belong on `client`:
    ///
    /// ```
    /// # use atc_client::AtcClient;
    /// # use std::time::Duration;
    /// let http = reqwest::Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    /// let atc = AtcClient::with_client("https://ci.example.com", http);
    /// assert_eq!(atc.base_url(), "https://ci.example.com");
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the ATC
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `{base}/api/v1/pipelines/{segments...}`
    ///
    /// Each segment is percent-encoded on its own, so a pipeline name can
    /// never add path components or a query string.
    fn pipelines_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidRequest(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!(
                    "base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(PIPELINES_PATH)
            .extend(segments);

        Ok(url)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Any non-success status, 404 included, is an error.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::unexpected_status(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response for a single named resource
    ///
    /// Returns `Ok(None)` when the ATC answers 404.
    async fn handle_optional_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<Option<T>> {
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        self.handle_response(response).await.map(Some)
    }

    /// Handle a state-changing response whose body is irrelevant
    ///
    /// Returns `Ok(true)` on 2xx/3xx and `Ok(false)` on 404.
    async fn handle_found_response(&self, response: Response) -> Result<bool> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        if !is_accepted(status) {
            return Err(Self::unexpected_status(response).await);
        }

        Ok(true)
    }

    /// Handle an API response that returns no content
    async fn handle_empty_response(&self, response: Response) -> Result<()> {
        if !is_accepted(response.status()) {
            return Err(Self::unexpected_status(response).await);
        }

        Ok(())
    }

    async fn unexpected_status(response: Response) -> ClientError {
        let status = response.status();
        let url = response.url().clone();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        warn!(%status, %url, "unexpected response from ATC");

        ClientError::api_error(status, error_text)
    }
}

/// Statuses a body-less call treats as done: 2xx, plus any 3xx reqwest did not follow
fn is_accepted(status: StatusCode) -> bool {
    status.is_success() || status.is_redirection()
}
