//! Trigger sources.
//!
//! Five independent evaluators plus the match-day check, each inspecting
//! current context (city, coordinates, wall clock), reference data and the
//! shared dedup ledger, and producing notifications for the orchestrator
//! to funnel into the alert store. Each evaluator is stateless apart from
//! the storage or ledger handle it is given, so every one is testable in
//! isolation.

pub mod currency;
pub mod gameday;
pub mod match_result;
pub mod safety;
pub mod stadium;
pub mod weather;

pub use crate::triggers::currency::CurrencyTrigger;
pub use crate::triggers::gameday::GameDayTrigger;
pub use crate::triggers::match_result::MatchResultTrigger;
pub use crate::triggers::safety::SafetyTrigger;
pub use crate::triggers::stadium::StadiumTrigger;
pub use crate::triggers::weather::WeatherTrigger;
