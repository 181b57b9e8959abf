//! Records kept by the league: users, game keys, scores, move history and
//! the game views handed back to callers.

use super::LeagueError;
use crate::core::GameState;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: Option<String>,
}

/// Opaque key identifying a game
///
/// Displays as a URL-safe hex token and parses back from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(u64);

impl GameId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{:08x}", self.0)
    }
}

impl FromStr for GameId {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('g')
            .filter(|hex| !hex.is_empty())
            .and_then(|hex| u64::from_str_radix(hex, 16).ok())
            .map(Self)
            .ok_or_else(|| LeagueError::InvalidKey(s.to_string()))
    }
}

/// A game owned by a user
#[derive(Debug, Clone)]
pub(crate) struct GameRecord {
    pub id: GameId,
    pub user: String,
    pub state: GameState,
}

impl GameRecord {
    pub fn view(&self, message: impl Into<String>) -> GameView {
        GameView {
            key: self.id,
            user_name: self.user.clone(),
            attempts_remaining: self.state.attempts_remaining(),
            game_over: self.state.is_over(),
            message: message.into(),
            word_so_far: self.state.revealed(),
        }
    }
}

/// Snapshot of a game returned by every game operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub key: GameId,
    pub user_name: String,
    pub attempts_remaining: u32,
    pub game_over: bool,
    pub message: String,
    pub word_so_far: String,
}

/// A finished game's result
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub user: String,
    pub date: NaiveDate,
    pub won: bool,
    pub score: f64,
}

/// One accepted move of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: String,
    pub message: String,
    pub order: usize,
}

/// A user's total across all recorded scores
#[derive(Debug, Clone, PartialEq)]
pub struct UserRanking {
    pub user_name: String,
    pub total_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_id_round_trips_through_display() {
        let id = GameId::new(42);
        let token = id.to_string();
        assert_eq!(token, "g0000002a");
        assert_eq!(token.parse::<GameId>().unwrap(), id);
    }

    #[test]
    fn malformed_game_id_rejected() {
        for bad in ["", "g", "42", "gxyz", "h0000002a"] {
            assert!(
                matches!(bad.parse::<GameId>(), Err(LeagueError::InvalidKey(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn view_reflects_state() {
        let record = GameRecord {
            id: GameId::new(1),
            user: "ash".to_string(),
            state: GameState::new("Eevee").unwrap(),
        };
        let view = record.view("Guess a letter!");

        assert_eq!(view.user_name, "ash");
        assert_eq!(view.attempts_remaining, 6);
        assert!(!view.game_over);
        assert_eq!(view.word_so_far, "_____");
        assert_eq!(view.message, "Guess a letter!");
    }
}
