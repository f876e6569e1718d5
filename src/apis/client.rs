/// Base HTTP client with a bounded per-request timeout
///
/// One slow upstream call must not pin a handler indefinitely; the timeout
/// surfaces as a transport error to the caller.
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// HTTP client wrapper with timeout
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        anyhow::ensure!(timeout_secs > 0, "Timeout must be greater than zero");

        let timeout = Duration::from_secs(timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, timeout })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
