//! Configuration module
//!
//! Handles CLI configuration: where the ATC lives and how long to wait for it.

use anyhow::{Context, Result};
use atc_client::AtcClient;
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the ATC
    pub atc_url: String,

    /// Per-request timeout; `None` waits as long as the transport allows
    pub timeout: Option<Duration>,
}

impl Config {
    /// Creates a configuration from the parsed flags
    pub fn new(atc_url: String, timeout_secs: Option<u64>) -> Self {
        Self {
            atc_url,
            timeout: timeout_secs.map(Duration::from_secs),
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.atc_url.is_empty() {
            anyhow::bail!("atc_url cannot be empty");
        }

        if !self.atc_url.starts_with("http://") && !self.atc_url.starts_with("https://") {
            anyhow::bail!("atc_url must start with http:// or https://");
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }

    /// Builds an ATC client with the configured transport settings
    pub fn client(&self) -> Result<AtcClient> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().context("Failed to build HTTP client")?;

        Ok(AtcClient::with_client(&self.atc_url, http_client))
    }
}
