/// Structured error types for the proxy
///
/// One variant per failure class the HTTP layer needs to distinguish.
/// Numeric parse failures inside the odds transform are NOT represented
/// here - they are recovered locally as absent values and never surface.
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ProxyError {
    /// Malformed request parameters, rejected before any cache or upstream access
    #[error("{0}")]
    InvalidRequest(String),

    /// Upstream answered successfully but had no matching fixture
    /// (single-fixture live lookups only)
    #[error("Fixture not found")]
    FixtureNotFound,

    /// Upstream returned a non-success HTTP status (4xx and 5xx alike)
    #[error("API Football returned {0}")]
    UpstreamStatus(u16),

    /// Transport-level failure talking to upstream (timeout, DNS, TLS,
    /// connection reset, undecodable body)
    #[error("API Football request failed: {0}")]
    UpstreamTransport(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::UpstreamTransport(err.to_string())
    }
}
