/// Test double for the upstream API
///
/// Counts calls and replays canned payloads so handler tests can assert
/// exactly how many upstream requests a code path issues.
use crate::apis::football::{FixturesResponse, FootballApi, OddsResponse};
use crate::errors::ProxyError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct MockFootballApi {
    pub odds_calls: AtomicUsize,
    pub fixture_calls: AtomicUsize,
    pub batch_calls: AtomicUsize,
    /// ID lists passed to fetch_fixtures, in call order
    pub batch_requests: Mutex<Vec<Vec<u64>>>,
    pub odds_response: Mutex<Option<OddsResponse>>,
    pub fixtures_response: Mutex<Option<FixturesResponse>>,
    /// When set, every fetch fails with this upstream status
    pub fail_status: Mutex<Option<u16>>,
}

impl MockFootballApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_odds(response: OddsResponse) -> Self {
        let mock = Self::default();
        *mock.odds_response.lock().unwrap() = Some(response);
        mock
    }

    pub fn with_fixtures(response: FixturesResponse) -> Self {
        let mock = Self::default();
        *mock.fixtures_response.lock().unwrap() = Some(response);
        mock
    }

    pub fn failing_with(status: u16) -> Self {
        let mock = Self::default();
        *mock.fail_status.lock().unwrap() = Some(status);
        mock
    }

    fn check_failure(&self) -> Result<(), ProxyError> {
        match *self.fail_status.lock().unwrap() {
            Some(status) => Err(ProxyError::UpstreamStatus(status)),
            None => Ok(()),
        }
    }

    fn fixtures(&self) -> FixturesResponse {
        self.fixtures_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_default()
    }
}

#[async_trait]
impl FootballApi for MockFootballApi {
    async fn fetch_odds(&self, _fixture_id: u64) -> Result<OddsResponse, ProxyError> {
        self.odds_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.odds_response.lock().unwrap().clone().unwrap_or_default())
    }

    async fn fetch_fixture(&self, _fixture_id: u64) -> Result<FixturesResponse, ProxyError> {
        self.fixture_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.fixtures())
    }

    async fn fetch_fixtures(&self, fixture_ids: &[u64]) -> Result<FixturesResponse, ProxyError> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        self.batch_requests
            .lock()
            .unwrap()
            .push(fixture_ids.to_vec());
        self.check_failure()?;
        Ok(self.fixtures())
    }
}
