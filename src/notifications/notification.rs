//! Notification data model.
//!
//! Every alert produced by the engine, whatever its trigger source, is a
//! [`Notification`] stored in the [`AlertStore`](crate::notifications::AlertStore).
//! Triggers build a [`NewNotification`] (the add-shape without id or
//! timestamp); the store assigns identity and persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The closed set of alert categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Welcome,
    Weather,
    Gameday,
    Safety,
    Transport,
    Reminder,
    Stadium,
    Currency,
    MatchResult,
    General,
}

/// Delivery priority of an alert. High-priority alerts are pushed to the
/// platform notification facility in addition to the in-app list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A stored notification.
///
/// Mutated only to flip `read`; destroyed by store eviction or clear-all.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Notification {
    /// Opaque unique id assigned by the store.
    pub id: String,
    pub category: Category,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    /// In-app route to open when the notification is tapped.
    pub action_target: Option<String>,
    /// Free-form structured context attached by the trigger.
    pub payload: Option<serde_json::Map<String, serde_json::Value>>,
}

/// A notification waiting to be added to the store.
///
/// Carries the delivery priority and an explicit push override, neither of
/// which is part of the stored shape.
#[derive(Clone, Debug)]
pub struct NewNotification {
    pub category: Category,
    pub title: String,
    pub body: String,
    pub priority: Priority,
    /// Push to the platform facility even when priority is not high.
    pub push: bool,
    pub action_target: Option<String>,
    pub payload: Option<serde_json::Map<String, serde_json::Value>>,
}

impl NewNotification {
    pub fn new(category: Category, title: impl Into<String>, body: impl Into<String>) -> Self {
        NewNotification {
            category,
            title: title.into(),
            body: body.into(),
            priority: Priority::Low,
            push: false,
            action_target: None,
            payload: None,
        }
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Forces platform push delivery regardless of priority.
    pub fn with_push(mut self) -> Self {
        self.push = true;
        self
    }

    pub fn action_target(mut self, target: impl Into<String>) -> Self {
        self.action_target = Some(target.into());
        self
    }

    pub fn payload(mut self, payload: serde_json::Map<String, serde_json::Value>) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Greeting shown when the traveler arrives in a new host city.
    pub fn welcome(city_name: &str, motto: &str) -> Self {
        NewNotification::new(
            Category::Welcome,
            format!("Welcome to {}!", city_name),
            motto,
        )
        .with_push()
        .action_target("/cities")
    }

    /// Heat/hydration alert for a city.
    pub fn weather_alert(city_name: &str, temperature_f: f64, recommendation: &str) -> Self {
        NewNotification::new(
            Category::Weather,
            format!(
                "Hydration Alert: {} is {}\u{b0}F today",
                city_name,
                temperature_f.round() as i64
            ),
            recommendation,
        )
        .with_push()
        .action_target("/critical-info")
    }

    /// Kickoff-approaching alert with a stadium transit tip.
    pub fn game_day(
        home_team: &str,
        away_team: &str,
        stadium: &str,
        hours_until_kickoff: i64,
        transport_tip: &str,
    ) -> Self {
        NewNotification::new(
            Category::Gameday,
            format!("{} vs {} in {} hours", home_team, away_team, hours_until_kickoff),
            format!("Heading to {}? {}", stadium, transport_tip),
        )
        .with_push()
        .action_target("/transportation")
    }

    /// Ad hoc transit update.
    pub fn transport(message: &str, action_target: Option<&str>) -> Self {
        let notification =
            NewNotification::new(Category::Transport, "Transport Update", message).with_push();
        match action_target {
            Some(target) => notification.action_target(target),
            None => notification,
        }
    }
}
