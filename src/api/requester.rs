//! HTTP client for the companion data service.
//!
//! The [`Requester`] trait abstracts the three data feeds the engine
//! consumes (weather, finished results, upcoming matches) so trigger logic
//! can be tested against a mock. [`HttpRequester`] is the production
//! implementation on `reqwest`.

use async_trait::async_trait;
use log::{debug, info};
use mockall::automock;
use reqwest::{Client, Error};

use crate::api::structs::{MatchRecord, UpcomingMatch, WeatherData};

/// Trait for fetching data from the companion service.
///
/// Boxed through `async_trait` so the engine's background tasks can hold
/// the returned futures across threads. Every method returns `Err` on
/// transport failure or a non-success status; callers treat that as "no
/// data this cycle", never as a surfaced error.
#[automock]
#[async_trait]
pub trait Requester: Send + Sync {
    /// Fetches the current weather observation for a city.
    async fn get_weather(&self, city_key: &str) -> Result<WeatherData, Error>;
    /// Fetches the match results feed.
    async fn get_match_results(&self) -> Result<Vec<MatchRecord>, Error>;
    /// Fetches matches kicking off within the next `hours_ahead` hours.
    async fn get_upcoming_matches(&self, hours_ahead: u32) -> Result<Vec<UpcomingMatch>, Error>;
}

/// HTTP client for the companion data service.
pub struct HttpRequester {
    /// Base URL of the service, without trailing slash.
    url: String,
    client: Client,
}

impl HttpRequester {
    /// Create a new [HttpRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the companion data service.
    pub fn new(url: &str) -> Self {
        let client = reqwest::Client::new();
        HttpRequester {
            url: url.to_string(),
            client,
        }
    }
}

#[async_trait]
impl Requester for HttpRequester {
    /// Request `/api/weather/{cityKey}` for the current observation.
    ///
    /// The response is a json object:
    /// ```text
    /// { "city": "Dallas", "temperatureF": 101.0, "humidity": 38.0, "description": "sunny" }
    /// ```
    async fn get_weather(&self, city_key: &str) -> Result<WeatherData, Error> {
        let url = format!("{}/api/weather/{}", &self.url, city_key);
        info!("request weather for {}", city_key);
        debug!("request {}", &url);

        let weather: WeatherData = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("response from {} -> {:?}", &url, &weather);

        Ok(weather)
    }

    /// Request `/api/matches/results` for the results feed.
    ///
    /// The response is a json array of match records:
    /// ```text
    /// [
    ///   { "matchId": 7, "homeTeam": "Mexico", "awayTeam": "Canada",
    ///     "homeScore": 2, "awayScore": 1, "status": "finished" }
    /// ]
    /// ```
    async fn get_match_results(&self) -> Result<Vec<MatchRecord>, Error> {
        let url = format!("{}/api/matches/results", &self.url);
        info!("request match results");
        debug!("request {}", &url);

        let results: Vec<MatchRecord> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("response from {} -> {:?}", &url, &results);

        Ok(results)
    }

    /// Request `/api/gameday/upcoming?hours={hoursAhead}` for matches
    /// kicking off within the horizon.
    async fn get_upcoming_matches(&self, hours_ahead: u32) -> Result<Vec<UpcomingMatch>, Error> {
        let url = format!("{}/api/gameday/upcoming", &self.url);
        info!("request upcoming matches within {} hours", hours_ahead);
        debug!("request {}?hours={}", &url, hours_ahead);

        let upcoming: Vec<UpcomingMatch> = self
            .client
            .get(&url)
            .query(&[("hours", hours_ahead)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("response from {} -> {:?}", &url, &upcoming);

        Ok(upcoming)
    }
}
