//! Matchday - a location and time-triggered alert engine for tournament
//! travelers.
//!
//! The engine watches a traveler's context (current host city, live
//! coordinates, wall clock) and a handful of data feeds (weather, match
//! results, upcoming kickoffs), and proactively surfaces alerts: currency
//! changes when crossing a border, night-time safety tips, stadium-arrival
//! guidance, heat warnings, match reminders and final scores for followed
//! teams. Alerts land in a persisted in-app list and, when permitted, the
//! platform notification facility.
//!
//! # Architecture
//!
//! - [`engine`] - orchestrator owning the periodic evaluation cycle and
//!   the engine lifecycle
//! - [`triggers`] - the independent trigger sources (currency, safety,
//!   stadium, weather, match results, match day)
//! - [`reminders`] - absolute-time match reminders at fixed offsets
//! - [`notifications`] - notification model, capped persisted store and
//!   push delivery
//! - [`ledger`] - dedup keys and cooldowns shared by every trigger
//! - [`api`] - HTTP client for the companion data service
//! - [`reference`] - static city/currency/safety/stadium/team tables
//! - [`storage`] - file-backed key/value store for all persisted state
//! - [`config`] - YAML configuration with environment overrides
//!
//! # Runtime Behavior
//!
//! Once started, the engine runs two periodic tasks: a global evaluation
//! cycle (5 minutes by default) re-evaluating the time- and team-based
//! triggers, and a one-minute poll firing due match reminders. Location
//! updates fed through [`engine::Engine::update_location`] evaluate the
//! geofence triggers immediately, independent of the timers. Every
//! trigger writes through the dedup ledger before reaching the alert
//! store, so re-evaluating the same context never produces repeats.

pub mod api;
pub mod config;
pub mod engine;
pub mod geo;
pub mod ledger;
pub mod notifications;
pub mod reference;
pub mod reminders;
pub mod storage;
pub mod triggers;
