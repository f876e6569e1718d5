/// Raw API-Football v3 payload schemas
///
/// Deserialized verbatim from upstream JSON. Every field the upstream may
/// omit or null out is an `Option` or `#[serde(default)]` so a sparse
/// payload never fails to decode; the transform layer decides the defaults.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// /odds?fixture={id}
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OddsResponse {
    #[serde(default)]
    pub response: Vec<FixtureOdds>,
}

/// Odds for one fixture, aggregated across bookmakers
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureOdds {
    /// Upstream's last-update timestamp for this odds set
    #[serde(default)]
    pub update: String,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Bookmaker {
    #[serde(default)]
    pub name: String,
    /// Betting markets offered by this bookmaker ("Match Winner",
    /// "Both Teams Score", ...)
    #[serde(default)]
    pub bets: Vec<BetMarket>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BetMarket {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub values: Vec<BetValue>,
}

/// One outcome quote; upstream sends the odd as a decimal string ("2.10")
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BetValue {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub odd: String,
}

// ---------------------------------------------------------------------------
// /fixtures?id={id} and /fixtures?ids={id-id-...}
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixturesResponse {
    #[serde(default)]
    pub response: Vec<FixtureEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureEntry {
    #[serde(default)]
    pub fixture: FixtureInfo,
    #[serde(default)]
    pub goals: Goals,
    #[serde(default)]
    pub teams: Teams,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureInfo {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub status: FixtureStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureStatus {
    /// Short status code ("NS", "1H", "HT", "2H", "FT", ...)
    #[serde(default)]
    pub short: String,
    /// Null before kickoff
    #[serde(default)]
    pub elapsed: Option<u32>,
}

/// Null until the first goal data is available
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Goals {
    #[serde(default)]
    pub home: Option<u32>,
    #[serde(default)]
    pub away: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Teams {
    #[serde(default)]
    pub home: TeamInfo,
    #[serde(default)]
    pub away: TeamInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamInfo {
    #[serde(default)]
    pub name: Option<String>,
}
