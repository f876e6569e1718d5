use anyhow::{bail, Context, Result};
use std::env;
use std::str::FromStr;
use url::Url;

/// Default upstream base URL (API-Football v3)
const DEFAULT_BASE_URL: &str = "https://v3.football.api-sports.io";

/// Runtime settings, loaded from the environment (after dotenv)
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bind host for the HTTP server
    pub host: String,
    /// Bind port for the HTTP server
    pub port: u16,
    /// API-Football key, sent as `x-rapidapi-key` on every upstream call
    pub api_key: String,
    /// Upstream base URL
    pub api_base_url: String,
    /// Value for the `x-rapidapi-host` header, derived from the base URL
    pub api_host_header: String,
    /// Per-request upstream timeout in seconds
    pub request_timeout_secs: u64,
    /// TTL for `odds:` cache entries (upstream refreshes odds on an hours cadence)
    pub odds_ttl_secs: u64,
    /// TTL for `live:` cache entries (live state changes every few seconds)
    pub live_ttl_secs: u64,
    /// Interval between background expiry sweeps
    pub sweep_interval_secs: u64,
}

impl Settings {
    /// Load settings from environment variables
    ///
    /// `API_FOOTBALL_KEY` is required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let api_key = match env::var("API_FOOTBALL_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => bail!("API_FOOTBALL_KEY environment variable is required"),
        };

        let api_base_url = env::var("API_FOOTBALL_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let parsed = Url::parse(&api_base_url)
            .with_context(|| format!("Invalid API_FOOTBALL_BASE_URL: {}", api_base_url))?;
        let api_host_header = parsed
            .host_str()
            .context("API_FOOTBALL_BASE_URL has no host")?
            .to_string();

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_parse("PORT", 3001)?,
            api_key,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_host_header,
            request_timeout_secs: env_parse("UPSTREAM_TIMEOUT_SECS", 10)?,
            odds_ttl_secs: env_parse("ODDS_CACHE_TTL_SECS", 7200)?,
            live_ttl_secs: env_parse("LIVE_CACHE_TTL_SECS", 30)?,
            sweep_interval_secs: env_parse("CACHE_SWEEP_INTERVAL_SECS", 300)?,
        })
    }
}

/// Read an environment variable and parse it, falling back to a default
/// when the variable is unset
fn env_parse<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value for {}: {}", name, raw)),
        Err(_) => Ok(default),
    }
}
