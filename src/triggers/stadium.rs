//! Stadium-arrival trigger.
//!
//! Fires once per (stadium, calendar day) when live coordinates come
//! within the proximity threshold of a configured stadium, naming the
//! nearest entry gate and the nearest drop-off-capable rideshare zone.
//! Either piece of guidance is omitted when no candidate exists.

use chrono::NaiveDate;
use log::{debug, info};

use crate::{
    geo::{distance_miles, nearest},
    ledger::Ledger,
    notifications::{Category, NewNotification, Priority},
    reference::stadiums::{self, PROXIMITY_THRESHOLD_MILES, Stadium},
};

/// Stadium-proximity evaluator.
pub struct StadiumTrigger;

impl StadiumTrigger {
    /// Returns the first stadium whose center is within the proximity
    /// threshold of the coordinates.
    pub fn stadium_near(&self, lat: f64, lon: f64) -> Option<&'static Stadium> {
        stadiums::STADIUMS
            .iter()
            .find(|s| distance_miles(lat, lon, s.lat, s.lon) <= PROXIMITY_THRESHOLD_MILES)
    }

    /// Evaluates live coordinates against the stadium geofences.
    pub async fn evaluate(
        &self,
        lat: f64,
        lon: f64,
        today: NaiveDate,
        ledger: &mut Ledger,
    ) -> Option<NewNotification> {
        let stadium = self.stadium_near(lat, lon)?;

        let key = format!("stadium:{}:{}", stadium.name, today);
        if ledger.has_fired(&key) {
            debug!("stadium alert already fired for {}", key);
            return None;
        }
        ledger.mark_fired(&key).await;

        info!("approaching {}", stadium.name);

        Some(arrival_alert(stadium, lat, lon))
    }
}

fn arrival_alert(stadium: &'static Stadium, lat: f64, lon: f64) -> NewNotification {
    // Gate selection is nearest-by-distance only; section ranges are shown
    // but not matched against the traveler's ticket.
    let gate = nearest(lat, lon, stadium.gates, |g| (g.lat, g.lon));

    let dropoff_zones: Vec<_> = stadium
        .rideshare_zones
        .iter()
        .filter(|z| z.serves_dropoff())
        .collect();
    let dropoff = nearest(lat, lon, &dropoff_zones, |z| (z.lat, z.lon));

    let mut message = format!("You're approaching {}! ", stadium.name);
    if let Some(gate) = gate {
        message.push_str(&format!("Nearest entry: {} ({}). ", gate.name, gate.sections));
    }
    if let Some(zone) = dropoff {
        message.push_str(&format!(
            "RideShare drop-off: {} (~{} min walk).",
            zone.name, zone.walking_minutes
        ));
    }

    NewNotification::new(
        Category::Stadium,
        format!("Arriving at {}", stadium.name),
        message.trim_end(),
    )
    .priority(Priority::High)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use tempfile::tempdir;

    // Just north of the Arrowhead Stadium center, inside the threshold.
    const NEAR_ARROWHEAD: (f64, f64) = (39.0510, -94.4840);

    async fn create_test_ledger(dir: &std::path::Path) -> Ledger {
        Ledger::new(Storage::new(dir)).await
    }

    #[test]
    fn test_stadium_near_within_threshold() {
        let trigger = StadiumTrigger;
        let stadium = trigger.stadium_near(NEAR_ARROWHEAD.0, NEAR_ARROWHEAD.1).unwrap();
        assert_eq!(stadium.name, "Arrowhead Stadium");
    }

    #[test]
    fn test_stadium_near_outside_threshold() {
        let trigger = StadiumTrigger;
        // Downtown Kansas City is several miles from Arrowhead.
        assert!(trigger.stadium_near(39.0997, -94.5786).is_none());
    }

    #[tokio::test]
    async fn test_evaluate_names_gate_and_dropoff() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let trigger = StadiumTrigger;

        let alert = trigger
            .evaluate(
                NEAR_ARROWHEAD.0,
                NEAR_ARROWHEAD.1,
                NaiveDate::from_ymd_opt(2026, 6, 18).unwrap(),
                &mut ledger,
            )
            .await
            .unwrap();

        assert_eq!(alert.category, Category::Stadium);
        assert_eq!(alert.priority, Priority::High);
        assert_eq!(alert.title, "Arriving at Arrowhead Stadium");
        // Approaching from the north, Gate A and Lot N are closest.
        assert!(alert.body.contains("Nearest entry: Gate A (100-112)"));
        assert!(alert.body.contains("RideShare drop-off: Lot N RideShare Zone (~8 min walk)"));
    }

    #[tokio::test]
    async fn test_evaluate_fires_once_per_day() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let trigger = StadiumTrigger;
        let today = NaiveDate::from_ymd_opt(2026, 6, 18).unwrap();

        assert!(
            trigger
                .evaluate(NEAR_ARROWHEAD.0, NEAR_ARROWHEAD.1, today, &mut ledger)
                .await
                .is_some()
        );
        assert!(
            trigger
                .evaluate(NEAR_ARROWHEAD.0, NEAR_ARROWHEAD.1, today, &mut ledger)
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_evaluate_fires_again_on_a_new_day() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let trigger = StadiumTrigger;

        let first_day = NaiveDate::from_ymd_opt(2026, 6, 18).unwrap();
        let next_day = NaiveDate::from_ymd_opt(2026, 6, 19).unwrap();

        assert!(
            trigger
                .evaluate(NEAR_ARROWHEAD.0, NEAR_ARROWHEAD.1, first_day, &mut ledger)
                .await
                .is_some()
        );
        assert!(
            trigger
                .evaluate(NEAR_ARROWHEAD.0, NEAR_ARROWHEAD.1, next_day, &mut ledger)
                .await
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_evaluate_away_from_any_stadium() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let trigger = StadiumTrigger;

        assert!(
            trigger
                .evaluate(
                    0.0,
                    0.0,
                    NaiveDate::from_ymd_opt(2026, 6, 18).unwrap(),
                    &mut ledger
                )
                .await
                .is_none()
        );
    }
}
