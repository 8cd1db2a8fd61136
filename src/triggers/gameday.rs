//! Match-day check.
//!
//! Scans the upcoming-matches horizon and alerts when a match is exactly
//! three hours from kickoff, the reporting granularity of the feed. The
//! alert carries the host city's stadium-transit tip.

use chrono::NaiveDate;
use log::{debug, warn};

use crate::{
    api::Requester,
    ledger::Ledger,
    notifications::NewNotification,
    reference::cities,
};

/// Hours-ahead horizon requested from the upcoming-matches feed.
const UPCOMING_HORIZON_HOURS: u32 = 6;

/// The exact hours-until-kickoff value that produces an alert.
const KICKOFF_ALERT_HOURS: i64 = 3;

/// Kickoff-approaching evaluator.
pub struct GameDayTrigger;

impl GameDayTrigger {
    /// Fetches the horizon and produces an alert per matchup hitting the
    /// three-hour mark, at most once per (matchup, calendar day).
    pub async fn evaluate<R: Requester>(
        &self,
        requester: &R,
        today: NaiveDate,
        ledger: &mut Ledger,
    ) -> Vec<NewNotification> {
        let matches = match requester.get_upcoming_matches(UPCOMING_HORIZON_HOURS).await {
            Ok(matches) => matches,
            Err(e) => {
                warn!("failed to fetch upcoming matches: {}", e);
                return Vec::new();
            }
        };

        let mut alerts = Vec::new();
        for upcoming in matches {
            if upcoming.hours_until_kickoff != KICKOFF_ALERT_HOURS {
                continue;
            }

            let key = format!(
                "gameday:{}:{}:{}",
                upcoming.home_team, upcoming.away_team, today
            );
            if ledger.has_fired(&key) {
                debug!("match-day alert already fired for {}", key);
                continue;
            }
            ledger.mark_fired(&key).await;

            let city_key = cities::key_for_display_name(&upcoming.city);
            let transport_tip = cities::city(&city_key)
                .map(|c| c.transport_tip)
                .unwrap_or(cities::GENERIC_TRANSPORT_TIP);

            let home = non_empty(&upcoming.home_team, "TBD");
            let away = non_empty(&upcoming.away_team, "TBD");
            let venue = non_empty(&upcoming.venue, "Stadium");

            alerts.push(NewNotification::game_day(
                home,
                away,
                venue,
                KICKOFF_ALERT_HOURS,
                transport_tip,
            ));
        }

        alerts
    }
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
