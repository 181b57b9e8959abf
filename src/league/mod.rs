//! In-memory game service
//!
//! A `League` owns users, their games, per-game move history and the score
//! table. It wraps the pure guess engine: every accepted guess is appended to
//! the game's history, and a game that ends records a score for its owner.
//!
//! Mutations take `&mut self`, so guesses against one game are serialized by
//! the borrow checker rather than by locks.

mod error;
mod queries;
mod records;

pub use error::LeagueError;
pub use queries::DEFAULT_HIGH_SCORES;
pub use records::{GameId, GameView, HistoryEntry, ScoreEntry, User, UserRanking};

use crate::core::{GameState, Guess, MAX_ATTEMPTS};
use crate::wordlists::Pokedex;
use chrono::{Local, NaiveDate};
use log::{debug, info};
use rand::Rng;
use records::GameRecord;
use rustc_hash::FxHashMap;

/// Message attached to freshly created games
pub const NEW_GAME_MESSAGE: &str = "Good luck playing Pokemon Hangman!";

/// Message attached to plain game lookups
pub const GET_GAME_MESSAGE: &str = "Guess a letter!";

/// Message attached to a cancelled game
pub const CANCELLED_MESSAGE: &str = "Game cancelled";

/// Users, games, history and scores
#[derive(Debug)]
pub struct League {
    attempts: u32,
    users: Vec<User>,
    games: FxHashMap<GameId, GameRecord>,
    history: FxHashMap<GameId, Vec<HistoryEntry>>,
    scores: Vec<ScoreEntry>,
    next_id: u64,
    today: fn() -> NaiveDate,
}

impl Default for League {
    fn default() -> Self {
        Self::new(MAX_ATTEMPTS)
    }
}

impl League {
    /// Create an empty league whose games start with `attempts` attempts
    #[must_use]
    pub fn new(attempts: u32) -> Self {
        Self {
            attempts,
            users: Vec::new(),
            games: FxHashMap::default(),
            history: FxHashMap::default(),
            scores: Vec::new(),
            next_id: 1,
            today: || Local::now().date_naive(),
        }
    }

    /// Override the clock used to date score entries
    #[must_use]
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Attempt budget given to new games
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Register a user. Names and emails must be unique.
    ///
    /// # Errors
    /// Returns `UserExists` or `EmailExists` on a clash.
    pub fn create_user(&mut self, name: &str, email: Option<&str>) -> Result<String, LeagueError> {
        if self.find_user(name).is_some() {
            return Err(LeagueError::UserExists(name.to_string()));
        }
        if let Some(email) = email
            && self.users.iter().any(|u| u.email.as_deref() == Some(email))
        {
            return Err(LeagueError::EmailExists(email.to_string()));
        }

        self.users.push(User {
            name: name.to_string(),
            email: email.map(str::to_string),
        });
        info!("created user {name}");
        Ok(format!("User {name} created!"))
    }

    #[must_use]
    pub fn find_user(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name)
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Start a game for `user_name` with a given target
    ///
    /// # Errors
    /// Returns `UserNotFound` for unknown users and `InvalidTarget` if the
    /// target cannot be played.
    pub fn new_game(&mut self, user_name: &str, target: &str) -> Result<GameView, LeagueError> {
        let user = self
            .find_user(user_name)
            .ok_or_else(|| LeagueError::UserNotFound(user_name.to_string()))?
            .name
            .clone();
        let state = GameState::with_attempts(target, self.attempts)?;

        let id = GameId::new(self.next_id);
        self.next_id += 1;

        let record = GameRecord { id, user, state };
        let view = record.view(NEW_GAME_MESSAGE);
        info!(
            "new game {id} for {user_name} ({} letters)",
            record.state.len()
        );
        self.games.insert(id, record);
        Ok(view)
    }

    /// Start a game with a random Pokédex target
    ///
    /// # Errors
    /// Returns `NoNames` if the Pokédex is empty, otherwise as [`League::new_game`].
    pub fn new_random_game<R: Rng + ?Sized>(
        &mut self,
        user_name: &str,
        pokedex: &Pokedex,
        rng: &mut R,
    ) -> Result<GameView, LeagueError> {
        let target = pokedex.random_name(rng).ok_or(LeagueError::NoNames)?;
        self.new_game(user_name, target)
    }

    /// Current state of a game
    ///
    /// # Errors
    /// Returns `GameNotFound` for unknown or cancelled games.
    pub fn get_game(&self, id: GameId) -> Result<GameView, LeagueError> {
        Ok(self.record(id)?.view(GET_GAME_MESSAGE))
    }

    /// Borrow a game's engine state
    ///
    /// # Errors
    /// Returns `GameNotFound` for unknown or cancelled games.
    pub fn game_state(&self, id: GameId) -> Result<&GameState, LeagueError> {
        Ok(&self.record(id)?.state)
    }

    /// Guess a single letter in a game
    ///
    /// # Errors
    /// Returns `GameNotFound` for unknown or cancelled games.
    pub fn guess_letter(&mut self, id: GameId, letter: &str) -> Result<GameView, LeagueError> {
        self.guess(id, &Guess::Letter(letter.to_string()))
    }

    /// Guess the whole word in a game
    ///
    /// # Errors
    /// Returns `GameNotFound` for unknown or cancelled games.
    pub fn guess_word(&mut self, id: GameId, word: &str) -> Result<GameView, LeagueError> {
        self.guess(id, &Guess::Word(word.to_string()))
    }

    /// Apply a guess, record its history entry and, on a finish, its score
    ///
    /// # Errors
    /// Returns `GameNotFound` for unknown or cancelled games.
    pub fn guess(&mut self, id: GameId, guess: &Guess) -> Result<GameView, LeagueError> {
        let record = self
            .games
            .get_mut(&id)
            .ok_or(LeagueError::GameNotFound(id))?;

        let resolution = guess.apply(record.state.clone());
        record.state = resolution.state;
        let outcome = resolution.outcome;
        let message = outcome.to_string();
        debug!("game {id}: {guess:?} -> {message}");

        if !outcome.is_rejected() {
            let order = record.state.guessed_tokens().len();
            self.history.entry(id).or_default().push(HistoryEntry {
                guess: guess.text().to_string(),
                message: message.clone(),
                order,
            });
        }

        if outcome.is_terminal()
            && let Some(score) = outcome.score()
        {
            info!(
                "game {id} finished for {}: won={} score={score:.1}",
                record.user,
                outcome.is_win()
            );
            self.scores.push(ScoreEntry {
                user: record.user.clone(),
                date: (self.today)(),
                won: outcome.is_win(),
                score,
            });
        }

        Ok(record.view(message))
    }

    /// Cancel an open game, deleting it and its history
    ///
    /// Finished games are left alone and answer "Game is already over!".
    ///
    /// # Errors
    /// Returns `GameNotFound` for unknown or cancelled games.
    pub fn cancel_game(&mut self, id: GameId) -> Result<GameView, LeagueError> {
        let record = self.record(id)?;
        if record.state.is_over() {
            return Ok(record.view(crate::core::Outcome::AlreadyOver.to_string()));
        }

        let view = record.view(CANCELLED_MESSAGE);
        self.games.remove(&id);
        self.history.remove(&id);
        info!("cancelled game {id}");
        Ok(view)
    }

    /// Moves made in a game, in order
    ///
    /// # Errors
    /// Returns `GameNotFound` for unknown or cancelled games.
    pub fn game_history(&self, id: GameId) -> Result<&[HistoryEntry], LeagueError> {
        self.record(id)?;
        Ok(self.history.get(&id).map_or(&[], Vec::as_slice))
    }

    /// All games created by a user, oldest first
    ///
    /// # Errors
    /// Returns `UserNotFound` for unknown users.
    pub fn user_games(&self, user_name: &str) -> Result<Vec<GameView>, LeagueError> {
        self.require_user(user_name)?;
        let mut games: Vec<&GameRecord> = self
            .games
            .values()
            .filter(|g| g.user == user_name)
            .collect();
        games.sort_by_key(|g| g.id);
        Ok(games.into_iter().map(|g| g.view("")).collect())
    }

    fn record(&self, id: GameId) -> Result<&GameRecord, LeagueError> {
        self.games.get(&id).ok_or(LeagueError::GameNotFound(id))
    }

    fn require_user(&self, name: &str) -> Result<&User, LeagueError> {
        self.find_user(name)
            .ok_or_else(|| LeagueError::UserNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 9, 1).unwrap()
    }

    fn league_with_ash() -> League {
        let mut league = League::default().with_clock(fixed_day);
        league.create_user("ash", Some("ash@pallet.town")).unwrap();
        league
    }

    #[test]
    fn create_user_reports_success() {
        let mut league = League::default();
        let message = league.create_user("misty", None).unwrap();
        assert_eq!(message, "User misty created!");
        assert!(league.find_user("misty").is_some());
    }

    #[test]
    fn duplicate_user_name_rejected() {
        let mut league = league_with_ash();
        let err = league.create_user("ash", None).unwrap_err();
        assert_eq!(err, LeagueError::UserExists("ash".to_string()));
        assert_eq!(err.to_string(), "A User with that name already exists!");
    }

    #[test]
    fn duplicate_email_rejected() {
        let mut league = league_with_ash();
        let err = league
            .create_user("gary", Some("ash@pallet.town"))
            .unwrap_err();
        assert!(matches!(err, LeagueError::EmailExists(_)));
    }

    #[test]
    fn users_without_email_do_not_clash() {
        let mut league = League::default();
        league.create_user("brock", None).unwrap();
        assert!(league.create_user("misty", None).is_ok());
    }

    #[test]
    fn new_game_requires_known_user() {
        let mut league = League::default();
        let err = league.new_game("nobody", "Pikachu").unwrap_err();
        assert!(matches!(err, LeagueError::UserNotFound(_)));
    }

    #[test]
    fn new_game_starts_hidden() {
        let mut league = league_with_ash();
        let view = league.new_game("ash", "Pikachu").unwrap();

        assert_eq!(view.message, NEW_GAME_MESSAGE);
        assert_eq!(view.word_so_far, "_______");
        assert_eq!(view.attempts_remaining, MAX_ATTEMPTS);
        assert!(!view.game_over);
        assert_eq!(view.user_name, "ash");
    }

    #[test]
    fn new_game_uses_league_attempts() {
        let mut league = League::new(3);
        league.create_user("ash", None).unwrap();
        let view = league.new_game("ash", "Pikachu").unwrap();
        assert_eq!(view.attempts_remaining, 3);
    }

    #[test]
    fn new_game_rejects_invalid_target() {
        let mut league = league_with_ash();
        let err = league.new_game("ash", "").unwrap_err();
        assert!(matches!(err, LeagueError::InvalidTarget(_)));
    }

    #[test]
    fn new_random_game_draws_from_pokedex() {
        let mut league = league_with_ash();
        let pokedex = Pokedex::from_entries([(133, "Eevee".to_string())]);
        let mut rng = StdRng::seed_from_u64(1);

        let view = league.new_random_game("ash", &pokedex, &mut rng).unwrap();
        assert_eq!(view.word_so_far, "_____");
        assert_eq!(league.game_state(view.key).unwrap().target(), "Eevee");
    }

    #[test]
    fn new_random_game_empty_pokedex() {
        let mut league = league_with_ash();
        let mut rng = StdRng::seed_from_u64(1);
        let err = league
            .new_random_game("ash", &Pokedex::default(), &mut rng)
            .unwrap_err();
        assert_eq!(err, LeagueError::NoNames);
    }

    #[test]
    fn get_game_unknown_id() {
        let league = League::default();
        let err = league.get_game(GameId::new(99)).unwrap_err();
        assert_eq!(err.to_string(), "Game not found!");
    }

    #[test]
    fn guesses_update_view_and_history() {
        let mut league = league_with_ash();
        let id = league.new_game("ash", "PIKACHU").unwrap().key;

        let view = league.guess_letter(id, "p").unwrap();
        assert_eq!(view.message, "Correct guess! Word so far: P______");
        assert_eq!(view.word_so_far, "P______");

        let view = league.guess_letter(id, "z").unwrap();
        assert_eq!(view.attempts_remaining, 5);

        let history = league.game_history(id).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].guess, "p");
        assert_eq!(history[0].order, 1);
        assert_eq!(history[1].message, "Incorrect guess! Word so far: P______");
        assert_eq!(history[1].order, 2);
    }

    #[test]
    fn rejected_guesses_leave_no_history() {
        let mut league = league_with_ash();
        let id = league.new_game("ash", "Mew").unwrap().key;

        league.guess_letter(id, "m").unwrap();
        let view = league.guess_letter(id, "M").unwrap();
        assert_eq!(view.message, "You already guessed that letter!");
        let view = league.guess_letter(id, "ew").unwrap();
        assert_eq!(view.message, "You can only guess a single letter.");

        assert_eq!(league.game_history(id).unwrap().len(), 1);
    }

    #[test]
    fn win_records_score() {
        let mut league = league_with_ash();
        let id = league.new_game("ash", "CAT").unwrap().key;

        league.guess_word(id, "dog").unwrap();
        league.guess_letter(id, "c").unwrap();
        let view = league.guess_word(id, "cat").unwrap();

        assert_eq!(view.message, "You won! Score is 5.7.");
        assert!(view.game_over);
        assert_eq!(view.word_so_far, "CAT");

        let scores = league.scores();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].user, "ash");
        assert!(scores[0].won);
        assert!((scores[0].score - 5.7).abs() < 1e-9);
        assert_eq!(scores[0].date, fixed_day());
    }

    #[test]
    fn loss_records_zero_score() {
        let mut league = League::new(1).with_clock(fixed_day);
        league.create_user("ash", None).unwrap();
        let id = league.new_game("ash", "CAT").unwrap().key;

        let view = league.guess_letter(id, "x").unwrap();
        assert_eq!(view.message, "Game over! Score is 0.");

        let scores = league.scores();
        assert_eq!(scores.len(), 1);
        assert!(!scores[0].won);
        assert!(scores[0].score.abs() < f64::EPSILON);
    }

    #[test]
    fn guessing_finished_game_records_nothing() {
        let mut league = League::new(1);
        league.create_user("ash", None).unwrap();
        let id = league.new_game("ash", "CAT").unwrap().key;
        league.guess_letter(id, "x").unwrap();

        let view = league.guess_word(id, "cat").unwrap();
        assert_eq!(view.message, "Game is already over!");
        assert_eq!(league.scores().len(), 1);
        assert_eq!(league.game_history(id).unwrap().len(), 1);
    }

    #[test]
    fn cancel_open_game_removes_it() {
        let mut league = league_with_ash();
        let id = league.new_game("ash", "Gengar").unwrap().key;
        league.guess_letter(id, "g").unwrap();

        let view = league.cancel_game(id).unwrap();
        assert_eq!(view.message, CANCELLED_MESSAGE);
        assert_eq!(view.word_so_far, "G__g__");
        assert!(league.get_game(id).is_err());
        assert!(league.game_history(id).is_err());
    }

    #[test]
    fn cancel_finished_game_refused() {
        let mut league = league_with_ash();
        let id = league.new_game("ash", "Mew").unwrap().key;
        league.guess_word(id, "mew").unwrap();

        let view = league.cancel_game(id).unwrap();
        assert_eq!(view.message, "Game is already over!");
        assert!(league.get_game(id).is_ok());
    }

    #[test]
    fn user_games_lists_in_creation_order() {
        let mut league = league_with_ash();
        league.create_user("gary", None).unwrap();
        let first = league.new_game("ash", "Onix").unwrap().key;
        league.new_game("gary", "Eevee").unwrap();
        let second = league.new_game("ash", "Staryu").unwrap().key;

        let games = league.user_games("ash").unwrap();
        let keys: Vec<GameId> = games.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![first, second]);
        assert!(games.iter().all(|g| g.message.is_empty()));
        assert!(league.user_games("nobody").is_err());
    }
}
