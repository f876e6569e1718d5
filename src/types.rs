/// Stable response shapes served to clients
///
/// Field names and nesting are part of the public contract consumed by the
/// front-end; changing them breaks every client.
use serde::{Deserialize, Serialize};

/// Match-winner odds from a single bookmaker for one fixture
///
/// `home`/`draw`/`away` are `None` when the bookmaker does not quote that
/// outcome or the upstream value failed to parse as a number; serialized
/// as JSON `null`, never `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsQuote {
    pub bookmaker: String,
    pub home: Option<f64>,
    pub draw: Option<f64>,
    pub away: Option<f64>,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Most recent known state of one fixture
///
/// Cached and served for any match phase, not only in-play fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMatch {
    pub fixture_id: u64,
    /// Short status code from upstream ("NS", "1H", "HT", "2H", "FT", ...)
    pub status: String,
    /// Elapsed minutes; `None` before kickoff and after some terminal states
    pub elapsed: Option<u32>,
    pub scores: Score,
    pub teams: TeamNames,
}

/// Score pair; a score upstream has not reported yet defaults to 0.
/// The 0 is a placeholder for "unknown", not a real result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// Team name pair; a missing name defaults to an empty string placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamNames {
    pub home: String,
    pub away: String,
}
