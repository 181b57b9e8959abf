//! Read-only league queries: score tables, rankings and the average number of
//! attempts left in open games.

use super::{League, LeagueError, ScoreEntry, UserRanking};

/// Number of entries `high_scores` returns when no limit is given
pub const DEFAULT_HIGH_SCORES: usize = 5;

impl League {
    /// Every recorded score, oldest first
    #[must_use]
    pub fn scores(&self) -> &[ScoreEntry] {
        &self.scores
    }

    /// Scores recorded for one user
    ///
    /// # Errors
    /// Returns `UserNotFound` for unknown users.
    pub fn user_scores(&self, user_name: &str) -> Result<Vec<&ScoreEntry>, LeagueError> {
        self.require_user(user_name)?;
        Ok(self.scores.iter().filter(|s| s.user == user_name).collect())
    }

    /// The `limit` highest scores (default [`DEFAULT_HIGH_SCORES`])
    #[must_use]
    pub fn high_scores(&self, limit: Option<usize>) -> Vec<&ScoreEntry> {
        let mut ranked: Vec<&ScoreEntry> = self.scores.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(limit.unwrap_or(DEFAULT_HIGH_SCORES));
        ranked
    }

    /// Users ordered by total score, highest first
    ///
    /// Users without scores appear with a total of zero; ties keep
    /// registration order.
    #[must_use]
    pub fn user_rankings(&self) -> Vec<UserRanking> {
        let mut rankings: Vec<UserRanking> = self
            .users
            .iter()
            .map(|user| UserRanking {
                user_name: user.name.clone(),
                total_score: self
                    .scores
                    .iter()
                    .filter(|s| s.user == user.name)
                    .map(|s| s.score)
                    .sum(),
            })
            .collect();
        rankings.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
        rankings
    }

    /// Mean attempts remaining across games that are still open
    ///
    /// Returns `None` when no game is open.
    #[must_use]
    pub fn average_attempts_remaining(&self) -> Option<f64> {
        let open: Vec<u32> = self
            .games
            .values()
            .filter(|g| !g.state.is_over())
            .map(|g| g.state.attempts_remaining())
            .collect();
        if open.is_empty() {
            return None;
        }
        Some(f64::from(open.iter().sum::<u32>()) / open.len() as f64)
    }

    /// Human-readable average, or an empty string when no game is open
    #[must_use]
    pub fn average_attempts_message(&self) -> String {
        self.average_attempts_remaining()
            .map(|avg| format!("The average moves remaining is {avg:.2}"))
            .unwrap_or_default()
    }
}
