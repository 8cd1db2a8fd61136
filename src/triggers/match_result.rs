//! Match-result trigger and the followed-teams set.
//!
//! Fires exactly one alert per finished match involving a followed team,
//! classifying the outcome relative to the followed side. The match id is
//! recorded in the ledger afterwards, permanently suppressing a re-fire
//! for that match.

use log::{info, warn};

use crate::{
    api::{MatchRecord, MatchStatus, Requester},
    ledger::Ledger,
    notifications::{Category, NewNotification, Priority},
    reference::teams::team_code,
    storage::Storage,
};

/// Storage key holding the followed-team codes.
const FOLLOWED_TEAMS_KEY: &str = "followed_teams";

/// Finished-match evaluator; also owns the followed-teams set.
pub struct MatchResultTrigger {
    storage: Storage,
}

impl MatchResultTrigger {
    pub fn new(storage: Storage) -> Self {
        MatchResultTrigger { storage }
    }

    /// Short codes of the teams the user follows.
    pub async fn followed_teams(&self) -> Vec<String> {
        self.storage.get(FOLLOWED_TEAMS_KEY).await.unwrap_or_default()
    }

    /// Adds a team code to the followed set. Already-followed codes are
    /// left alone.
    pub async fn follow(&self, team_code: &str) {
        let mut teams = self.followed_teams().await;
        if !teams.iter().any(|t| t == team_code) {
            teams.push(team_code.to_string());
            self.storage.set(FOLLOWED_TEAMS_KEY, &teams).await;
            info!("following team {}", team_code);
        }
    }

    /// Removes a team code from the followed set.
    pub async fn unfollow(&self, team_code: &str) {
        let teams: Vec<String> = self
            .followed_teams()
            .await
            .into_iter()
            .filter(|t| t != team_code)
            .collect();
        self.storage.set(FOLLOWED_TEAMS_KEY, &teams).await;
        info!("unfollowed team {}", team_code);
    }

    pub async fn is_followed(&self, team_code: &str) -> bool {
        self.followed_teams().await.iter().any(|t| t == team_code)
    }

    /// Fetches the results feed and produces one alert per fresh finished
    /// match involving a followed team.
    pub async fn evaluate<R: Requester>(
        &self,
        requester: &R,
        ledger: &mut Ledger,
    ) -> Vec<NewNotification> {
        let followed = self.followed_teams().await;
        if followed.is_empty() {
            return Vec::new();
        }

        let results = match requester.get_match_results().await {
            Ok(results) => results,
            Err(e) => {
                warn!("failed to fetch match results: {}", e);
                return Vec::new();
            }
        };

        let mut alerts = Vec::new();
        for result in results {
            if result.status != MatchStatus::Finished {
                continue;
            }

            let key = format!("result:{}", result.match_id);
            if ledger.has_fired(&key) {
                continue;
            }

            let home_code = team_code(&result.home_team);
            let away_code = team_code(&result.away_team);

            let followed_home = followed.iter().any(|t| *t == home_code);
            let followed_away = followed.iter().any(|t| *t == away_code);
            if !followed_home && !followed_away {
                continue;
            }

            let followed_code = if followed_home { &home_code } else { &away_code };
            info!(
                "match {} finished {} {} - {} {}",
                result.match_id,
                result.home_team,
                result.home_score,
                result.away_score,
                result.away_team
            );

            alerts.push(result_alert(&result, followed_code));
            ledger.mark_fired(&key).await;
        }

        alerts
    }
}

fn result_alert(result: &MatchRecord, followed_code: &str) -> NewNotification {
    let home_code = team_code(&result.home_team);
    let followed_is_home = home_code == followed_code;

    let followed_score = if followed_is_home { result.home_score } else { result.away_score };
    let opponent_score = if followed_is_home { result.away_score } else { result.home_score };
    let opponent_name = if followed_is_home { &result.away_team } else { &result.home_team };

    let scoreline = format!(
        "{} {} - {} {}",
        result.home_team, result.home_score, result.away_score, result.away_team
    );

    let (title, body) = if followed_score > opponent_score {
        (
            format!("Victory! {} Wins!", followed_code),
            format!("{}. Your team advances!", scoreline),
        )
    } else if followed_score < opponent_score {
        (
            format!("{} Lost", followed_code),
            format!("{}. Better luck next time.", scoreline),
        )
    } else {
        (
            format!("Draw: {} vs {}", followed_code, team_code(opponent_name)),
            format!("{}. The match ended in a draw.", scoreline),
        )
    };

    NewNotification::new(Category::MatchResult, title, body).priority(Priority::High)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockRequester;
    use tempfile::tempdir;

    fn finished(match_id: i64, home: &str, away: &str, home_score: u32, away_score: u32) -> MatchRecord {
        MatchRecord {
            match_id,
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score,
            away_score,
            status: MatchStatus::Finished,
            venue: "Test Stadium".to_string(),
        }
    }

    async fn create_test_ledger(dir: &std::path::Path) -> Ledger {
        Ledger::new(Storage::new(dir)).await
    }

    #[tokio::test]
    async fn test_follow_and_unfollow() {
        let dir = tempdir().unwrap();
        let trigger = MatchResultTrigger::new(Storage::new(dir.path()));

        trigger.follow("MEX").await;
        trigger.follow("MEX").await;
        trigger.follow("CAN").await;
        assert_eq!(trigger.followed_teams().await, vec!["MEX", "CAN"]);
        assert!(trigger.is_followed("MEX").await);

        trigger.unfollow("MEX").await;
        assert!(!trigger.is_followed("MEX").await);
        assert_eq!(trigger.followed_teams().await, vec!["CAN"]);
    }

    #[tokio::test]
    async fn test_no_followed_teams_skips_the_fetch() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let trigger = MatchResultTrigger::new(Storage::new(dir.path()));

        let mut requester = MockRequester::new();
        requester.expect_get_match_results().times(0);

        assert!(trigger.evaluate(&requester, &mut ledger).await.is_empty());
    }

    #[tokio::test]
    async fn test_home_win_for_followed_team() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let trigger = MatchResultTrigger::new(Storage::new(dir.path()));
        trigger.follow("MEX").await;

        let mut requester = MockRequester::new();
        requester
            .expect_get_match_results()
            .returning(|| Ok(vec![finished(7, "Mexico", "Canada", 2, 1)]));

        let alerts = trigger.evaluate(&requester, &mut ledger).await;
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title, "Victory! MEX Wins!");
        assert_eq!(alerts[0].body, "Mexico 2 - 1 Canada. Your team advances!");
        assert_eq!(alerts[0].priority, Priority::High);
    }

    #[tokio::test]
    async fn test_away_loss_for_followed_team() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let trigger = MatchResultTrigger::new(Storage::new(dir.path()));
        trigger.follow("CAN").await;

        let mut requester = MockRequester::new();
        requester
            .expect_get_match_results()
            .returning(|| Ok(vec![finished(7, "Mexico", "Canada", 2, 1)]));

        let alerts = trigger.evaluate(&requester, &mut ledger).await;
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title, "CAN Lost");
        assert!(alerts[0].body.ends_with("Better luck next time."));
    }

    #[tokio::test]
    async fn test_draw_names_both_codes() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let trigger = MatchResultTrigger::new(Storage::new(dir.path()));
        trigger.follow("FRA").await;

        let mut requester = MockRequester::new();
        requester
            .expect_get_match_results()
            .returning(|| Ok(vec![finished(9, "France", "Brazil", 1, 1)]));

        let alerts = trigger.evaluate(&requester, &mut ledger).await;
        assert_eq!(alerts[0].title, "Draw: FRA vs BRA");
    }

    #[tokio::test]
    async fn test_same_result_never_fires_twice() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let trigger = MatchResultTrigger::new(Storage::new(dir.path()));
        trigger.follow("MEX").await;

        let mut requester = MockRequester::new();
        requester
            .expect_get_match_results()
            .times(2)
            .returning(|| Ok(vec![finished(7, "Mexico", "Canada", 2, 1)]));

        assert_eq!(trigger.evaluate(&requester, &mut ledger).await.len(), 1);
        assert_eq!(trigger.evaluate(&requester, &mut ledger).await.len(), 0);
    }

    #[tokio::test]
    async fn test_unfinished_and_unfollowed_matches_are_ignored() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let trigger = MatchResultTrigger::new(Storage::new(dir.path()));
        trigger.follow("MEX").await;

        let mut live = finished(10, "Mexico", "Brazil", 1, 0);
        live.status = MatchStatus::Live;

        let mut requester = MockRequester::new();
        requester.expect_get_match_results().returning(move || {
            Ok(vec![
                live.clone(),
                finished(11, "France", "Germany", 3, 0),
            ])
        });

        assert!(trigger.evaluate(&requester, &mut ledger).await.is_empty());
    }

    #[tokio::test]
    async fn test_unmapped_team_uses_truncated_code() {
        let dir = tempdir().unwrap();
        let mut ledger = create_test_ledger(dir.path()).await;
        let trigger = MatchResultTrigger::new(Storage::new(dir.path()));
        trigger.follow("FRE").await;

        let mut requester = MockRequester::new();
        requester
            .expect_get_match_results()
            .returning(|| Ok(vec![finished(12, "Freedonia", "Mexico", 4, 2)]));

        let alerts = trigger.evaluate(&requester, &mut ledger).await;
        assert_eq!(alerts[0].title, "Victory! FRE Wins!");
    }
}
