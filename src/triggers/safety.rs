//! Safety trigger: night-time tips and danger-zone proximity.
//!
//! Two independent checks share this module. The night-tip check is
//! city-and-time scoped and runs from the periodic cycle; the proximity
//! check is coordinate driven and runs on every location update. Zones
//! classified safe never fire.

use chrono::{DateTime, Local, Timelike};
use log::{debug, info};

use crate::{
    geo::distance_miles,
    ledger::Ledger,
    notifications::{Category, NewNotification, Priority},
    reference::safety::{self, SafetyZone, ZoneKind},
};

/// Local hour at which the night phase begins.
const NIGHT_START_HOUR: u32 = 22;
/// Local hour at which the night phase ends (exclusive).
const NIGHT_END_HOUR: u32 = 6;

/// Safety-zone and night-tip evaluator.
pub struct SafetyTrigger;

impl SafetyTrigger {
    /// Evaluates the night-tip check for a city.
    ///
    /// Fires the city's first configured night tip when the local hour is
    /// inside the night window and no tip fired yet for this (city, phase,
    /// calendar day).
    pub async fn night_tip(
        &self,
        city_key: &str,
        now: DateTime<Local>,
        ledger: &mut Ledger,
    ) -> Option<NewNotification> {
        let sheet = safety::for_city(city_key)?;

        let hour = now.hour();
        let is_night = hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR;
        if !is_night {
            return None;
        }

        let tip = sheet.night_tips.first()?;

        let key = format!("safety:{}:night:{}", city_key, now.date_naive());
        if ledger.has_fired(&key) {
            debug!("night tip already fired for {}", key);
            return None;
        }
        ledger.mark_fired(&key).await;

        info!("firing night safety tip for {}", city_key);

        Some(
            NewNotification::new(
                Category::Safety,
                format!("Night Safety Tips - {}", sheet.city_name),
                *tip,
            )
            .priority(Priority::Medium),
        )
    }

    /// Returns the first caution/avoid zone of the city containing the
    /// coordinates, honoring each zone's active-hour window.
    pub fn zone_near(
        &self,
        city_key: &str,
        lat: f64,
        lon: f64,
        now: DateTime<Local>,
    ) -> Option<&'static SafetyZone> {
        let sheet = safety::for_city(city_key)?;
        let hour = now.hour();

        sheet.zones.iter().find(|zone| {
            zone.kind != ZoneKind::Safe
                && zone_active(zone, hour)
                && distance_miles(lat, lon, zone.lat, zone.lon) <= zone.radius_miles
        })
    }

    /// Evaluates the zone-proximity check for live coordinates.
    ///
    /// At most one alert per (zone, calendar day).
    pub async fn zone_proximity(
        &self,
        city_key: &str,
        lat: f64,
        lon: f64,
        now: DateTime<Local>,
        ledger: &mut Ledger,
    ) -> Option<NewNotification> {
        let sheet = safety::for_city(city_key)?;
        let zone = self.zone_near(city_key, lat, lon, now)?;

        let key = format!("zone:{}:{}", zone.name, now.date_naive());
        if ledger.has_fired(&key) {
            debug!("zone alert already fired for {}", key);
            return None;
        }
        ledger.mark_fired(&key).await;

        info!("entered {:?} zone {}", zone.kind, zone.name);

        Some(zone_alert(zone, sheet.city_name))
    }
}

/// Whether a zone is active at the given local hour. Windows wrapping
/// midnight have start > end.
fn zone_active(zone: &SafetyZone, hour: u32) -> bool {
    match zone.active_hours {
        None => true,
        Some((start, end)) if start > end => hour >= start || hour < end,
        Some((start, end)) => hour >= start && hour < end,
    }
}

fn zone_alert(zone: &'static SafetyZone, city_name: &str) -> NewNotification {
    let (title, priority) = match zone.kind {
        ZoneKind::Avoid => (format!("Caution Area - {}", city_name), Priority::High),
        _ => (format!("Stay Alert - {}", zone.name), Priority::Medium),
    };

    NewNotification::new(Category::Safety, title, zone.description).priority(priority)
}
