//! Response shapes of the companion data service.

use serde::Deserialize;

/// Current weather observation for a city.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    #[serde(default)]
    pub city: String,
    /// Temperature in Fahrenheit.
    pub temperature_f: f64,
    /// Relative humidity percentage.
    pub humidity: f64,
    #[serde(default)]
    pub description: String,
    pub feels_like_f: Option<f64>,
}

/// Lifecycle of a match in the results feed. Only `Finished` entries are
/// actionable for result notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Halftime,
    Finished,
}

/// A match record from the results feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub match_id: i64,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub status: MatchStatus,
    #[serde(default)]
    pub venue: String,
}

/// An upcoming match within the requested horizon.
///
/// `hours_until_kickoff` is reported at whole-hour granularity by the
/// source; the match-day check keys off the exact value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingMatch {
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub city: String,
    pub hours_until_kickoff: i64,
}
