/// Upstream payload normalization
///
/// Maps API-Football's verbose schemas onto the compact shapes the proxy
/// serves and caches. Only successful transforms ever reach the cache.
use crate::apis::football::{BetMarket, FixtureEntry, FixturesResponse, OddsResponse};
use crate::types::{LiveMatch, OddsQuote, Score, TeamNames};

/// The only betting market this proxy exposes
const MATCH_WINNER_MARKET: &str = "Match Winner";

/// Build the ordered odds list for one fixture
///
/// Takes the first fixture entry (an odds query returns exactly one) and the
/// first `max_bookmakers` bookmakers in upstream order. A bookmaker without
/// a "Match Winner" market is skipped entirely rather than emitted with all
/// outcomes null. An absent upstream response yields an empty list, not an
/// error.
pub fn to_odds_quotes(raw: &OddsResponse, max_bookmakers: usize) -> Vec<OddsQuote> {
    let Some(fixture_odds) = raw.response.first() else {
        return Vec::new();
    };

    fixture_odds
        .bookmakers
        .iter()
        .take(max_bookmakers)
        .filter_map(|bookmaker| {
            let market = bookmaker
                .bets
                .iter()
                .find(|bet| bet.name == MATCH_WINNER_MARKET)?;

            Some(OddsQuote {
                bookmaker: bookmaker.name.clone(),
                home: outcome_odd(market, "Home"),
                draw: outcome_odd(market, "Draw"),
                away: outcome_odd(market, "Away"),
                updated_at: fixture_odds.update.clone(),
            })
        })
        .collect()
}

/// Numeric odds for one named outcome
///
/// Upstream sends odds as strings; a missing outcome or a malformed number
/// both yield None, never zero and never an error.
fn outcome_odd(market: &BetMarket, outcome: &str) -> Option<f64> {
    let value = market.values.iter().find(|v| v.value == outcome)?;
    value.odd.parse::<f64>().ok()
}

/// Live state for the first fixture in the response, or None when upstream
/// had no matching fixture (callers surface that as not-found)
pub fn first_live_match(raw: &FixturesResponse) -> Option<LiveMatch> {
    raw.response.first().map(to_live_match)
}

/// Live state for every fixture in the response, in upstream order
pub fn to_live_matches(raw: &FixturesResponse) -> Vec<LiveMatch> {
    raw.response.iter().map(to_live_match).collect()
}

fn to_live_match(entry: &FixtureEntry) -> LiveMatch {
    LiveMatch {
        fixture_id: entry.fixture.id,
        status: entry.fixture.status.short.clone(),
        elapsed: entry.fixture.status.elapsed,
        // 0 / "" are placeholders for data upstream has not reported,
        // not real scores or names
        scores: Score {
            home: entry.goals.home.unwrap_or(0),
            away: entry.goals.away.unwrap_or(0),
        },
        teams: TeamNames {
            home: entry.teams.home.name.clone().unwrap_or_default(),
            away: entry.teams.away.name.clone().unwrap_or_default(),
        },
    }
}
