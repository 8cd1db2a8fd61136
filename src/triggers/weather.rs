//! Weather-threshold trigger.
//!
//! Fetches the current observation for the active city and fires a
//! hydration/heat alert when the temperature or the humidity/heat
//! combination crosses the thresholds. Re-alerting is rate limited by a
//! per-city cooldown rather than a calendar day: hazardous weather should
//! alert again after a few hours even within the same day.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info, warn};

use crate::{
    api::{Requester, WeatherData},
    ledger::Ledger,
    notifications::NewNotification,
    reference::cities,
};

/// Hours before a city may produce another weather alert.
const COOLDOWN_HOURS: i64 = 4;

/// Temperature at which the heat alert fires.
const HEAT_THRESHOLD_F: f64 = 90.0;
/// Humidity/temperature combination at which the hydration alert fires.
const HUMIDITY_THRESHOLD: f64 = 80.0;
const HUMID_HEAT_THRESHOLD_F: f64 = 80.0;

/// Number of recommendations included in the alert body.
const MAX_RECOMMENDATIONS: usize = 3;

/// Weather-threshold evaluator.
pub struct WeatherTrigger;

impl WeatherTrigger {
    /// Evaluates the weather check for a city.
    ///
    /// The cooldown is checked before the fetch so a city in cooldown costs
    /// no network round trip; it is restarted only when an alert actually
    /// fires. Fetch failures are "no data this cycle".
    pub async fn evaluate<R: Requester>(
        &self,
        requester: &R,
        city_key: &str,
        now: DateTime<Utc>,
        ledger: &mut Ledger,
    ) -> Option<NewNotification> {
        let city = cities::city(city_key)?;

        let scope = format!("weather:{}", city_key);
        if ledger.is_in_cooldown(&scope, Duration::hours(COOLDOWN_HOURS), now) {
            debug!("weather alert for {} is in cooldown", city_key);
            return None;
        }

        let weather = match requester.get_weather(city_key).await {
            Ok(weather) => weather,
            Err(e) => {
                warn!("failed to fetch weather for {}: {}", city_key, e);
                return None;
            }
        };

        let (severity, base) = classify(&weather, city.heat_advice)?;
        ledger.touch_cooldown(&scope, now).await;

        info!(
            "firing {} weather alert for {} at {}\u{b0}F",
            severity, city_key, weather.temperature_f
        );

        let mut recommendation = base.to_string();

        let tips = hydration_recommendations(weather.temperature_f);
        if !tips.is_empty() {
            recommendation.push_str("\n\n- ");
            recommendation.push_str(&tips[..tips.len().min(MAX_RECOMMENDATIONS)].join("\n- "));
        }

        let stations = cities::cooling_stations(city_key);
        if let Some(station) = stations.first() {
            recommendation.push_str(&format!("\n\nNearest cooling station: {}", station.name));
        }

        let mut payload = serde_json::Map::new();
        payload.insert("severity".to_string(), severity.into());
        payload.insert("temperatureF".to_string(), weather.temperature_f.into());
        payload.insert("humidity".to_string(), weather.humidity.into());

        Some(
            NewNotification::weather_alert(city.name, weather.temperature_f, &recommendation)
                .payload(payload),
        )
    }
}

/// Classifies an observation into (severity, base recommendation), or
/// `None` when no threshold is crossed.
fn classify(weather: &WeatherData, heat_advice: &'static str) -> Option<(&'static str, &'static str)> {
    if weather.temperature_f >= HEAT_THRESHOLD_F {
        let severity = if weather.temperature_f >= 100.0 {
            "high"
        } else if weather.temperature_f >= 95.0 {
            "medium"
        } else {
            "low"
        };
        return Some((severity, heat_advice));
    }

    if weather.humidity >= HUMIDITY_THRESHOLD && weather.temperature_f >= HUMID_HEAT_THRESHOLD_F {
        return Some((
            "medium",
            "Take frequent breaks and stay hydrated. The heat index makes it feel hotter.",
        ));
    }

    None
}

/// Temperature-graduated hydration recommendations, mildest tier first.
pub fn hydration_recommendations(temperature_f: f64) -> Vec<&'static str> {
    let mut recommendations = Vec::new();

    if temperature_f >= 85.0 {
        recommendations.push("Drink water every 15-20 minutes");
        recommendations.push("Wear light, loose-fitting clothing");
        recommendations.push("Use sunscreen SPF 30+");
    }

    if temperature_f >= 95.0 {
        recommendations.push("Limit outdoor exposure during peak hours (11am-4pm)");
        recommendations.push("Seek air-conditioned venues");
        recommendations.push("Carry a portable fan or cooling towel");
    }

    if temperature_f >= 100.0 {
        recommendations.push("Consider watching match at an indoor venue");
        recommendations.push("Know the location of medical tents");
        recommendations.push("Watch for signs of heat exhaustion");
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockRequester;
    use crate::storage::Storage;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn observation(temperature_f: f64, humidity: f64) -> WeatherData {
        WeatherData {
            city: "Dallas".to_string(),
            temperature_f,
            humidity,
            description: "sunny".to_string(),
            feels_like_f: None,
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 18, 12, 0, 0).unwrap()
    }

    async fn create_test_ledger(dir: &std::path::Path) -> Ledger {
        Ledger::new(Storage::new(dir)).await
    }

    #[tokio::test]
    async fn test_hot_day_fires_alert_with_station_and_tips() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let mut requester = MockRequester::new();
        requester
            .expect_get_weather()
            .returning(|_| Ok(observation(101.0, 30.0)));

        let alert = WeatherTrigger
            .evaluate(&requester, "dallas", noon(), &mut ledger)
            .await
            .unwrap();

        assert_eq!(alert.title, "Hydration Alert: Dallas is 101\u{b0}F today");
        assert!(alert.body.contains("Drink water every 15-20 minutes"));
        assert!(alert.body.contains("Nearest cooling station: AT&T Stadium Cooling Zones"));
        assert_eq!(
            alert.payload.as_ref().unwrap().get("severity").unwrap(),
            "high"
        );
    }

    #[tokio::test]
    async fn test_mild_day_does_not_fire() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let mut requester = MockRequester::new();
        requester
            .expect_get_weather()
            .returning(|_| Ok(observation(75.0, 40.0)));

        assert!(
            WeatherTrigger
                .evaluate(&requester, "dallas", noon(), &mut ledger)
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_humid_heat_fires_without_crossing_heat_threshold() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let mut requester = MockRequester::new();
        requester
            .expect_get_weather()
            .returning(|_| Ok(observation(82.0, 85.0)));

        let alert = WeatherTrigger
            .evaluate(&requester, "miami", noon(), &mut ledger)
            .await
            .unwrap();

        assert!(alert.body.starts_with("Take frequent breaks and stay hydrated."));
        assert_eq!(
            alert.payload.as_ref().unwrap().get("severity").unwrap(),
            "medium"
        );
    }

    #[tokio::test]
    async fn test_cooldown_suppresses_within_four_hours() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let mut requester = MockRequester::new();
        requester
            .expect_get_weather()
            .times(2)
            .returning(|_| Ok(observation(101.0, 30.0)));

        let trigger = WeatherTrigger;
        assert!(
            trigger
                .evaluate(&requester, "dallas", noon(), &mut ledger)
                .await
                .is_some()
        );

        // Three hours later the cooldown still holds; the fetch is skipped.
        assert!(
            trigger
                .evaluate(&requester, "dallas", noon() + Duration::hours(3), &mut ledger)
                .await
                .is_none()
        );

        // Five hours later the cooldown has elapsed.
        assert!(
            trigger
                .evaluate(&requester, "dallas", noon() + Duration::hours(5), &mut ledger)
                .await
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_cooldown_is_not_touched_when_nothing_fires() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let mut requester = MockRequester::new();
        requester
            .expect_get_weather()
            .times(2)
            .returning(|_| Ok(observation(75.0, 40.0)));

        let trigger = WeatherTrigger;
        trigger.evaluate(&requester, "dallas", noon(), &mut ledger).await;

        // A second evaluation a minute later still reaches the fetch.
        trigger
            .evaluate(&requester, "dallas", noon() + Duration::minutes(1), &mut ledger)
            .await;
    }

    #[tokio::test]
    async fn test_unknown_city_is_skipped() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let requester = MockRequester::new();

        assert!(
            WeatherTrigger
                .evaluate(&requester, "atlantis", noon(), &mut ledger)
                .await
                .is_none()
        );
    }

    #[test]
    fn test_recommendations_graduate_with_temperature() {
        assert!(hydration_recommendations(80.0).is_empty());
        assert_eq!(hydration_recommendations(86.0).len(), 3);
        assert_eq!(hydration_recommendations(96.0).len(), 6);
        assert_eq!(hydration_recommendations(101.0).len(), 9);
    }

    #[test]
    fn test_classify_severity_tiers() {
        assert_eq!(classify(&observation(92.0, 10.0), "x").unwrap().0, "low");
        assert_eq!(classify(&observation(96.0, 10.0), "x").unwrap().0, "medium");
        assert_eq!(classify(&observation(100.0, 10.0), "x").unwrap().0, "high");
        assert!(classify(&observation(79.0, 90.0), "x").is_none());
    }
}
