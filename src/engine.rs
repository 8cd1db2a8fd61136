//! Trigger engine orchestrator.
//!
//! The [`Engine`] owns the evaluation lifecycle: a periodic global cycle
//! re-evaluates the time- and team-based triggers, a one-minute poll
//! drives the reminder scheduler, and location updates evaluate the
//! geofence triggers immediately, decoupled from the timers. All state
//! mutation funnels through the engine's mutex-guarded store, ledger and
//! scheduler, giving the persisted state a single writer per process.
//!
//! `stop()` aborts both timer tasks; an evaluation already in flight may
//! still complete one write, which is benign because every write is
//! idempotent through the ledger.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use log::{debug, info};
use tokio::{sync::Mutex, task::JoinHandle, time};

use crate::{
    api::Requester,
    ledger::Ledger,
    notifications::{AlertStore, NewNotification, Notification, PushDelivery},
    reminders::ReminderScheduler,
    storage::Storage,
    triggers::{
        CurrencyTrigger, GameDayTrigger, MatchResultTrigger, SafetyTrigger, StadiumTrigger,
        WeatherTrigger,
    },
};

/// Period of the reminder scheduler's due-check poll.
const REMINDER_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Storage key holding the epoch milliseconds of the last global check.
const LAST_CHECK_KEY: &str = "trigger_last_check";

/// Minimum spacing between two global check passes. Guards against
/// overlapping evaluation bursts from external callers racing the cycle.
const MIN_CHECK_SPACING_MS: i64 = 60_000;

/// Snapshot of the engine's runtime state.
#[derive(Debug)]
pub struct EngineStatus {
    pub is_running: bool,
    pub current_city: Option<String>,
    pub followed_teams: Vec<String>,
    pub scheduled_reminders: usize,
}

/// State shared with the background tasks.
struct Shared<R> {
    requester: R,
    storage: Storage,
    store: Mutex<AlertStore>,
    ledger: Mutex<Ledger>,
    reminders: Mutex<ReminderScheduler>,
    currency: CurrencyTrigger,
    safety: SafetyTrigger,
    stadium: StadiumTrigger,
    weather: WeatherTrigger,
    results: MatchResultTrigger,
    gameday: GameDayTrigger,
    current_city: Mutex<Option<String>>,
}

impl<R: Requester> Shared<R> {
    /// One global evaluation pass.
    ///
    /// Match-day and match-result checks run unconditionally and always
    /// precede the city-scoped weather and safety checks, which run only
    /// when a current city is set.
    async fn run_all_checks(&self) {
        let now = Utc::now();
        if let Some(last) = self.storage.get::<i64>(LAST_CHECK_KEY).await {
            if now.timestamp_millis() - last < MIN_CHECK_SPACING_MS {
                debug!("skipping check pass, last one ran under a minute ago");
                return;
            }
        }
        self.storage.set(LAST_CHECK_KEY, &now.timestamp_millis()).await;

        self.check_game_day().await;
        self.check_match_results().await;

        let city = self.current_city.lock().await.clone();
        if let Some(city) = city {
            self.check_weather(&city).await;
            self.check_safety(&city).await;
        }
    }

    async fn check_game_day(&self) {
        let today = Local::now().date_naive();
        let mut ledger = self.ledger.lock().await;
        let alerts = self.gameday.evaluate(&self.requester, today, &mut ledger).await;
        drop(ledger);
        self.deliver_all(alerts).await;
    }

    async fn check_match_results(&self) {
        let mut ledger = self.ledger.lock().await;
        let alerts = self.results.evaluate(&self.requester, &mut ledger).await;
        drop(ledger);
        self.deliver_all(alerts).await;
    }

    async fn check_weather(&self, city_key: &str) {
        let mut ledger = self.ledger.lock().await;
        let alert = self
            .weather
            .evaluate(&self.requester, city_key, Utc::now(), &mut ledger)
            .await;
        drop(ledger);
        self.deliver(alert).await;
    }

    async fn check_safety(&self, city_key: &str) {
        let mut ledger = self.ledger.lock().await;
        let alert = self.safety.night_tip(city_key, Local::now(), &mut ledger).await;
        drop(ledger);
        self.deliver(alert).await;
    }

    async fn handle_due_reminders(&self) {
        let due = self.reminders.lock().await.check_due(Utc::now()).await;
        let alerts = due.iter().map(|r| r.to_notification()).collect();
        self.deliver_all(alerts).await;
    }

    async fn deliver(&self, alert: Option<NewNotification>) {
        if let Some(alert) = alert {
            self.store.lock().await.add(alert).await;
        }
    }

    async fn deliver_all(&self, alerts: Vec<NewNotification>) {
        if alerts.is_empty() {
            return;
        }
        let mut store = self.store.lock().await;
        for alert in alerts {
            store.add(alert).await;
        }
    }
}

/// The trigger engine. Exactly one instance runs per process.
pub struct Engine<R: Requester + 'static> {
    shared: Arc<Shared<R>>,
    /// Period of the global evaluation cycle.
    check_interval: Duration,
    running: bool,
    cycle_handle: Option<JoinHandle<()>>,
    reminder_handle: Option<JoinHandle<()>>,
}

impl<R: Requester + 'static> Engine<R> {
    /// Creates the engine, loading all persisted state from `storage`.
    pub async fn new(
        requester: R,
        storage: Storage,
        push: Box<dyn PushDelivery>,
        check_interval: Duration,
    ) -> Self {
        let store = AlertStore::new(storage.clone(), push).await;
        let ledger = Ledger::new(storage.clone()).await;
        let reminders = ReminderScheduler::new(storage.clone()).await;

        let shared = Shared {
            requester,
            storage: storage.clone(),
            store: Mutex::new(store),
            ledger: Mutex::new(ledger),
            reminders: Mutex::new(reminders),
            currency: CurrencyTrigger::new(storage.clone()),
            safety: SafetyTrigger,
            stadium: StadiumTrigger,
            weather: WeatherTrigger,
            results: MatchResultTrigger::new(storage),
            gameday: GameDayTrigger,
            current_city: Mutex::new(None),
        };

        Engine {
            shared: Arc::new(shared),
            check_interval,
            running: false,
            cycle_handle: None,
            reminder_handle: None,
        }
    }

    /// Starts the reminder poll and the global evaluation cycle.
    ///
    /// The cycle runs an immediate first pass. Idempotent: calling while
    /// already running is a no-op.
    pub fn start(&mut self) {
        if self.running {
            debug!("engine already running");
            return;
        }
        self.running = true;

        let shared = Arc::clone(&self.shared);
        self.reminder_handle = Some(tokio::spawn(async move {
            let mut interval = time::interval(REMINDER_POLL_INTERVAL);
            loop {
                interval.tick().await;
                shared.handle_due_reminders().await;
            }
        }));

        let shared = Arc::clone(&self.shared);
        let check_interval = self.check_interval;
        self.cycle_handle = Some(tokio::spawn(async move {
            // The first interval tick completes immediately.
            let mut interval = time::interval(check_interval);
            loop {
                interval.tick().await;
                shared.run_all_checks().await;
            }
        }));

        info!("trigger engine started");
    }

    /// Halts both timers. Idempotent; no further alerts are produced by
    /// the timers after this returns.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;

        if let Some(handle) = self.cycle_handle.take() {
            handle.abort();
        }
        if let Some(handle) = self.reminder_handle.take() {
            handle.abort();
        }

        info!("trigger engine stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs one global evaluation pass, subject to the minimum-spacing
    /// guard shared with the periodic cycle.
    pub async fn run_all_checks(&self) {
        self.shared.run_all_checks().await;
    }

    /// Updates the current-city context.
    ///
    /// An actual change of city immediately evaluates the currency and
    /// safety checks once, ahead of the periodic cycle.
    pub async fn set_current_city(&self, city_key: Option<&str>) {
        let changed = {
            let mut current = self.shared.current_city.lock().await;
            let changed = match (current.as_deref(), city_key) {
                (Some(previous), Some(new)) => previous != new,
                (None, Some(_)) => true,
                _ => false,
            };
            *current = city_key.map(str::to_string);
            changed
        };

        if changed {
            if let Some(key) = city_key {
                info!("current city changed to {}", key);
                let alert = self.shared.currency.evaluate(key).await;
                self.shared.deliver(alert).await;
                self.shared.check_safety(key).await;
            }
        }
    }

    /// Feeds a live coordinate update into the geofence triggers.
    ///
    /// Decoupled from the timer cycle; callers may invoke this at any
    /// cadence the platform's geolocation source produces.
    pub async fn update_location(&self, lat: f64, lon: f64) {
        let now = Local::now();

        let mut ledger = self.shared.ledger.lock().await;
        let alert = self
            .shared
            .stadium
            .evaluate(lat, lon, now.date_naive(), &mut ledger)
            .await;
        drop(ledger);
        self.shared.deliver(alert).await;

        let city = self.shared.current_city.lock().await.clone();
        if let Some(city) = city {
            let mut ledger = self.shared.ledger.lock().await;
            let alert = self
                .shared
                .safety
                .zone_proximity(&city, lat, lon, now, &mut ledger)
                .await;
            drop(ledger);
            self.shared.deliver(alert).await;
        }
    }

    /// Schedules the reminder set for a match.
    pub async fn schedule_match_reminders(
        &self,
        match_id: i64,
        match_time: DateTime<Utc>,
        home_team: &str,
        away_team: &str,
        venue: &str,
    ) {
        self.shared
            .reminders
            .lock()
            .await
            .schedule_match_reminders(match_id, match_time, home_team, away_team, venue, Utc::now())
            .await;
    }

    /// Cancels every reminder of a match.
    pub async fn cancel_match_reminders(&self, match_id: i64) {
        self.shared
            .reminders
            .lock()
            .await
            .cancel_match_reminders(match_id)
            .await;
    }

    pub async fn follow_team(&self, team_code: &str) {
        self.shared.results.follow(team_code).await;
    }

    pub async fn unfollow_team(&self, team_code: &str) {
        self.shared.results.unfollow(team_code).await;
    }

    /// Stored notifications, most recent first.
    pub async fn notifications(&self) -> Vec<Notification> {
        self.shared.store.lock().await.list().to_vec()
    }

    pub async fn mark_notification_read(&self, id: &str) {
        self.shared.store.lock().await.mark_read(id).await;
    }

    pub async fn mark_all_notifications_read(&self) {
        self.shared.store.lock().await.mark_all_read().await;
    }

    pub async fn clear_notifications(&self) {
        self.shared.store.lock().await.clear().await;
    }

    pub async fn status(&self) -> EngineStatus {
        EngineStatus {
            is_running: self.running,
            current_city: self.shared.current_city.lock().await.clone(),
            followed_teams: self.shared.results.followed_teams().await,
            scheduled_reminders: self.shared.reminders.lock().await.pending().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MatchRecord, MatchStatus, MockRequester};
    use crate::notifications::{Category, SystemPush};
    use chrono::Duration as ChronoDuration;
    use tempfile::tempdir;

    async fn create_test_engine(dir: &std::path::Path, requester: MockRequester) -> Engine<MockRequester> {
        Engine::new(
            requester,
            Storage::new(dir),
            Box::new(SystemPush::new(false)),
            Duration::from_secs(300),
        )
        .await
    }

    fn quiet_requester() -> MockRequester {
        let mut requester = MockRequester::new();
        requester
            .expect_get_upcoming_matches()
            .returning(|_| Ok(vec![]));
        requester.expect_get_match_results().returning(|| Ok(vec![]));
        requester
    }

    async fn count_by_category(engine: &Engine<MockRequester>, category: Category) -> usize {
        engine
            .notifications()
            .await
            .iter()
            .filter(|n| n.category == category)
            .count()
    }

    #[tokio::test]
    async fn test_city_change_across_border_fires_one_currency_alert() {
        let dir = tempdir().unwrap();
        let engine = create_test_engine(dir.path(), MockRequester::new()).await;

        engine.set_current_city(Some("kansasCity")).await;
        assert_eq!(count_by_category(&engine, Category::Currency).await, 0);

        engine.set_current_city(Some("mexicoCity")).await;
        assert_eq!(count_by_category(&engine, Category::Currency).await, 1);

        let notifications = engine.notifications().await;
        let currency = notifications
            .iter()
            .find(|n| n.category == Category::Currency)
            .unwrap();
        assert!(currency.body.contains("Mexican Peso"));

        // Setting the same city again is silent.
        engine.set_current_city(Some("mexicoCity")).await;
        assert_eq!(count_by_category(&engine, Category::Currency).await, 1);
    }

    #[tokio::test]
    async fn test_stadium_approach_fires_once_per_day() {
        let dir = tempdir().unwrap();
        let engine = create_test_engine(dir.path(), MockRequester::new()).await;

        engine.update_location(39.0510, -94.4840).await;
        assert_eq!(count_by_category(&engine, Category::Stadium).await, 1);

        let notifications = engine.notifications().await;
        let stadium = notifications
            .iter()
            .find(|n| n.category == Category::Stadium)
            .unwrap();
        assert!(stadium.body.contains("Nearest entry: Gate A"));
        assert!(stadium.body.contains("RideShare drop-off: Lot N RideShare Zone"));

        engine.update_location(39.0512, -94.4842).await;
        assert_eq!(count_by_category(&engine, Category::Stadium).await, 1);
    }

    #[tokio::test]
    async fn test_followed_team_win_fires_once() {
        let dir = tempdir().unwrap();

        let mut requester = MockRequester::new();
        requester
            .expect_get_upcoming_matches()
            .returning(|_| Ok(vec![]));
        requester.expect_get_match_results().times(2).returning(|| {
            Ok(vec![MatchRecord {
                match_id: 7,
                home_team: "Mexico".to_string(),
                away_team: "Canada".to_string(),
                home_score: 2,
                away_score: 1,
                status: MatchStatus::Finished,
                venue: "Estadio Azteca".to_string(),
            }])
        });

        let engine = create_test_engine(dir.path(), requester).await;
        engine.follow_team("MEX").await;

        engine.run_all_checks().await;
        assert_eq!(count_by_category(&engine, Category::MatchResult).await, 1);

        let notifications = engine.notifications().await;
        let result = notifications
            .iter()
            .find(|n| n.category == Category::MatchResult)
            .unwrap();
        assert_eq!(result.title, "Victory! MEX Wins!");

        // Bypass the spacing guard and re-run with the same result list.
        engine
            .shared
            .storage
            .set(
                LAST_CHECK_KEY,
                &(Utc::now() - ChronoDuration::minutes(5)).timestamp_millis(),
            )
            .await;
        engine.run_all_checks().await;
        assert_eq!(count_by_category(&engine, Category::MatchResult).await, 1);
    }

    #[tokio::test]
    async fn test_spacing_guard_skips_back_to_back_passes() {
        let dir = tempdir().unwrap();

        let mut requester = MockRequester::new();
        requester
            .expect_get_upcoming_matches()
            .times(1)
            .returning(|_| Ok(vec![]));

        let engine = create_test_engine(dir.path(), requester).await;

        engine.run_all_checks().await;
        engine.run_all_checks().await;
    }

    #[tokio::test]
    async fn test_city_scoped_checks_skipped_without_a_city() {
        let dir = tempdir().unwrap();

        let mut requester = MockRequester::new();
        requester
            .expect_get_upcoming_matches()
            .returning(|_| Ok(vec![]));
        requester.expect_get_weather().times(0);

        let engine = create_test_engine(dir.path(), requester).await;
        engine.run_all_checks().await;
    }

    #[tokio::test]
    async fn test_city_scoped_checks_run_with_a_city() {
        let dir = tempdir().unwrap();

        let mut requester = MockRequester::new();
        requester
            .expect_get_upcoming_matches()
            .returning(|_| Ok(vec![]));
        requester.expect_get_weather().times(1).returning(|_| {
            Ok(crate::api::WeatherData {
                city: "Dallas".to_string(),
                temperature_f: 72.0,
                humidity: 40.0,
                description: "clear".to_string(),
                feels_like_f: None,
            })
        });

        let engine = create_test_engine(dir.path(), requester).await;
        engine.set_current_city(Some("dallas")).await;
        engine.run_all_checks().await;
    }

    #[tokio::test]
    async fn test_reminder_scheduling_through_the_engine() {
        let dir = tempdir().unwrap();
        let engine = create_test_engine(dir.path(), MockRequester::new()).await;

        engine
            .schedule_match_reminders(
                7,
                Utc::now() + ChronoDuration::hours(30),
                "Mexico",
                "Canada",
                "Estadio Azteca",
            )
            .await;

        let status = engine.status().await;
        assert_eq!(status.scheduled_reminders, 3);

        engine.cancel_match_reminders(7).await;
        assert_eq!(engine.status().await.scheduled_reminders, 0);
    }

    #[tokio::test]
    async fn test_start_and_stop_are_idempotent() {
        let dir = tempdir().unwrap();
        let mut engine = create_test_engine(dir.path(), quiet_requester()).await;

        engine.start();
        engine.start();
        assert!(engine.is_running());

        engine.stop();
        engine.stop();
        assert!(!engine.is_running());
    }

    #[tokio::test]
    async fn test_start_runs_an_immediate_first_pass() {
        let dir = tempdir().unwrap();
        let mut engine = create_test_engine(dir.path(), quiet_requester()).await;

        engine.start();
        time::sleep(Duration::from_millis(100)).await;
        engine.stop();

        let last_check: Option<i64> = engine.shared.storage.get(LAST_CHECK_KEY).await;
        assert!(last_check.is_some());
    }

    #[tokio::test]
    async fn test_status_snapshot() {
        let dir = tempdir().unwrap();
        let engine = create_test_engine(dir.path(), MockRequester::new()).await;

        engine.follow_team("MEX").await;
        engine.set_current_city(Some("kansasCity")).await;

        let status = engine.status().await;
        assert!(!status.is_running);
        assert_eq!(status.current_city.as_deref(), Some("kansasCity"));
        assert_eq!(status.followed_teams, vec!["MEX"]);
        assert_eq!(status.scheduled_reminders, 0);
    }
}
