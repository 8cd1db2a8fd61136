//! Match reminder scheduler.
//!
//! Reminders are absolute-time alerts derived from a match's kickoff time
//! at fixed offsets: pack your bag 24 hours out, leave the hotel 4 hours
//! out, gates open 2 hours out. Scheduling is idempotent per match id and
//! offsets already in the past are skipped at scheduling time, never fired
//! retroactively. A reminder lives through `scheduled -> fired -> pruned`;
//! fired reminders are retained for a day to guard against re-fires, then
//! dropped.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    notifications::{Category, NewNotification, Priority},
    storage::Storage,
};

/// Storage key holding the serialized reminder list.
const STORAGE_KEY: &str = "match_reminders";

/// How long a fired reminder is retained before pruning.
const FIRED_RETENTION_HOURS: i64 = 24;

/// The kind of a match reminder, one of each per match at most.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReminderKind {
    PackBag,
    LeaveHotel,
    GatesOpen,
}

impl ReminderKind {
    /// Offset before kickoff at which this reminder fires.
    fn offset(self) -> Duration {
        match self {
            ReminderKind::PackBag => Duration::hours(24),
            ReminderKind::LeaveHotel => Duration::hours(4),
            ReminderKind::GatesOpen => Duration::hours(2),
        }
    }

    fn id_suffix(self) -> &'static str {
        match self {
            ReminderKind::PackBag => "pack",
            ReminderKind::LeaveHotel => "leave",
            ReminderKind::GatesOpen => "gates",
        }
    }

    fn title(self) -> &'static str {
        match self {
            ReminderKind::PackBag => "Pack Your Match Day Bag",
            ReminderKind::LeaveHotel => "Time to Leave",
            ReminderKind::GatesOpen => "Stadium Gates Open",
        }
    }

    fn message(self, home_team: &str, away_team: &str, venue: &str) -> String {
        match self {
            ReminderKind::PackBag => format!(
                "Pack your bag for tomorrow's match: {} vs {} at {}. Don't forget: tickets, ID, comfortable shoes, and a portable charger!",
                home_team, away_team, venue
            ),
            ReminderKind::LeaveHotel => format!(
                "Time to head out! {} vs {} kicks off in 4 hours. Leave now to avoid traffic and explore the stadium area.",
                home_team, away_team
            ),
            ReminderKind::GatesOpen => format!(
                "Stadium gates are now open for {} vs {}! Arrive early for the best experience and pre-match atmosphere.",
                home_team, away_team
            ),
        }
    }
}

/// A scheduled match reminder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduledReminder {
    pub id: String,
    pub match_id: i64,
    pub kind: ReminderKind,
    pub trigger_at: DateTime<Utc>,
    pub message: String,
    pub fired: bool,
}

impl ScheduledReminder {
    /// The notification delivered when this reminder fires. Leaving the
    /// hotel on time matters most, so that kind is pushed at high priority.
    pub fn to_notification(&self) -> NewNotification {
        let priority = match self.kind {
            ReminderKind::LeaveHotel => Priority::High,
            _ => Priority::Medium,
        };

        NewNotification::new(Category::Reminder, self.kind.title(), self.message.clone())
            .priority(priority)
    }
}

/// Persisted reminder scheduler.
pub struct ReminderScheduler {
    storage: Storage,
    reminders: Vec<ScheduledReminder>,
}

impl ReminderScheduler {
    /// Creates the scheduler, loading persisted reminders. Corruption
    /// recovers to an empty list.
    pub async fn new(storage: Storage) -> Self {
        let reminders = storage.get(STORAGE_KEY).await.unwrap_or_default();
        ReminderScheduler { storage, reminders }
    }

    /// Schedules the reminder set for a match.
    ///
    /// A no-op when any reminder already exists for the match id. Each
    /// offset is created only if its absolute trigger time is still ahead
    /// of `now`; elapsed offsets are skipped silently.
    pub async fn schedule_match_reminders(
        &mut self,
        match_id: i64,
        match_time: DateTime<Utc>,
        home_team: &str,
        away_team: &str,
        venue: &str,
        now: DateTime<Utc>,
    ) {
        if self.reminders.iter().any(|r| r.match_id == match_id) {
            debug!("reminders for match {} already scheduled", match_id);
            return;
        }

        for kind in [ReminderKind::PackBag, ReminderKind::LeaveHotel, ReminderKind::GatesOpen] {
            let trigger_at = match_time - kind.offset();
            if trigger_at <= now {
                debug!("skipping elapsed {:?} reminder for match {}", kind, match_id);
                continue;
            }

            self.reminders.push(ScheduledReminder {
                id: format!("{}_{}", match_id, kind.id_suffix()),
                match_id,
                kind,
                trigger_at,
                message: kind.message(home_team, away_team, venue),
                fired: false,
            });
        }

        info!(
            "scheduled {} reminders for match {}",
            self.reminders.iter().filter(|r| r.match_id == match_id).count(),
            match_id
        );
        self.persist().await;
    }

    /// Removes every reminder of a match, fired or not.
    pub async fn cancel_match_reminders(&mut self, match_id: i64) {
        self.reminders.retain(|r| r.match_id != match_id);
        self.persist().await;
        info!("cancelled reminders for match {}", match_id);
    }

    /// Unfired reminders, the scheduler's pending set.
    pub fn pending(&self) -> Vec<&ScheduledReminder> {
        self.reminders.iter().filter(|r| !r.fired).collect()
    }

    /// Flags due reminders fired and returns them for delivery; prunes
    /// fired reminders older than the retention window.
    pub async fn check_due(&mut self, now: DateTime<Utc>) -> Vec<ScheduledReminder> {
        let mut due = Vec::new();

        for reminder in &mut self.reminders {
            if !reminder.fired && reminder.trigger_at <= now {
                reminder.fired = true;
                due.push(reminder.clone());
            }
        }

        let retention_floor = now - Duration::hours(FIRED_RETENTION_HOURS);
        self.reminders
            .retain(|r| !r.fired || r.trigger_at > retention_floor);

        self.persist().await;

        due
    }

    async fn persist(&self) {
        self.storage.set(STORAGE_KEY, &self.reminders).await;
    }
}
