/// API-Football v3 client
///
/// Endpoints used:
/// - /odds?fixture={id} - pre-match odds across bookmakers
/// - /fixtures?id={id} - single fixture state
/// - /fixtures?ids={id-id-...} - up to 20 fixtures in one call
///
/// Every call carries the same authentication header pair. No retries:
/// a failure propagates immediately and the caller decides what to do
/// (this proxy surfaces it and lets the next request try again).
pub mod types;

pub use self::types::{
    BetMarket, BetValue, Bookmaker, FixtureEntry, FixtureInfo, FixtureOdds, FixtureStatus,
    FixturesResponse, Goals, OddsResponse, TeamInfo, Teams,
};

use crate::apis::client::HttpClient;
use crate::config::Settings;
use crate::errors::ProxyError;
use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Upstream data source seam
///
/// Handlers depend on this trait rather than the concrete client so tests
/// can count and stub upstream calls.
#[async_trait]
pub trait FootballApi: Send + Sync {
    /// Fetch raw odds for one fixture
    async fn fetch_odds(&self, fixture_id: u64) -> Result<OddsResponse, ProxyError>;

    /// Fetch raw state for one fixture
    async fn fetch_fixture(&self, fixture_id: u64) -> Result<FixturesResponse, ProxyError>;

    /// Fetch raw state for several fixtures in a single upstream call
    async fn fetch_fixtures(&self, fixture_ids: &[u64]) -> Result<FixturesResponse, ProxyError>;
}

/// Concrete API-Football client
pub struct ApiFootballClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    api_host: String,
}

impl ApiFootballClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(settings.request_timeout_secs)?,
            base_url: settings.api_base_url.clone(),
            api_key: settings.api_key.clone(),
            api_host: settings.api_host_header.clone(),
        })
    }

    /// Issue one authenticated GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ProxyError> {
        let url = format!("{}{}", self.base_url, path_and_query);

        let response = self
            .http
            .client()
            .get(&url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Upstream returned {} for {}", status.as_u16(), path_and_query);
            return Err(ProxyError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl FootballApi for ApiFootballClient {
    async fn fetch_odds(&self, fixture_id: u64) -> Result<OddsResponse, ProxyError> {
        self.get_json(&format!("/odds?fixture={}", fixture_id)).await
    }

    async fn fetch_fixture(&self, fixture_id: u64) -> Result<FixturesResponse, ProxyError> {
        self.get_json(&format!("/fixtures?id={}", fixture_id)).await
    }

    async fn fetch_fixtures(&self, fixture_ids: &[u64]) -> Result<FixturesResponse, ProxyError> {
        // API-Football takes the batch as a dash-delimited ID list
        let ids = fixture_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("-");

        self.get_json(&format!("/fixtures?ids={}", ids)).await
    }
}
