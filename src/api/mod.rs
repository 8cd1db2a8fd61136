//! Companion data service integration.
//!
//! The engine consumes three read-only feeds from a conventional
//! request/response API: current weather per city, the match results feed
//! and the upcoming-matches horizon. This module holds the HTTP client and
//! the response shapes; the [`Requester`] trait is the seam the trigger
//! sources are tested against.

pub mod requester;
pub mod structs;

#[cfg(test)]
pub use crate::api::requester::MockRequester;
pub use crate::api::requester::{HttpRequester, Requester};
pub use crate::api::structs::{MatchRecord, MatchStatus, UpcomingMatch, WeatherData};
