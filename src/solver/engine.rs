//! Automated hangman player

use super::strategy::GuessStrategy;
use crate::core::{GameState, Guess, TargetError};

/// Plays hangman games with a given strategy
///
/// The pool is every name a target might be; the strategy narrows it as the
/// game reveals letters.
pub struct Player<'a, S: GuessStrategy> {
    strategy: S,
    pool: &'a [&'a str],
}

/// A single guess in a played-out game
#[derive(Debug, Clone, PartialEq)]
pub struct PlayStep {
    pub guess: Guess,
    pub message: String,
    pub revealed: String,
    pub attempts_remaining: u32,
}

/// Full record of a played-out game
#[derive(Debug, Clone, PartialEq)]
pub struct PlayResult {
    pub target: String,
    pub steps: Vec<PlayStep>,
    pub finished: bool,
    pub won: bool,
    pub score: Option<f64>,
    pub attempts_remaining: u32,
}

impl<'a, S: GuessStrategy> Player<'a, S> {
    pub const fn new(strategy: S, pool: &'a [&'a str]) -> Self {
        Self { strategy, pool }
    }

    /// Get the next guess for a game in progress
    pub fn next_guess(&self, state: &GameState) -> Option<Guess> {
        self.strategy.next_guess(state, self.pool)
    }

    /// Start a game on `target` and play it to the end
    ///
    /// # Errors
    /// Returns `TargetError` if `target` is not a playable word.
    pub fn play(&self, target: &str, attempts: u32) -> Result<PlayResult, TargetError> {
        Ok(self.play_out(GameState::with_attempts(target, attempts)?))
    }

    /// Keep guessing until the game ends or the strategy runs dry
    ///
    /// A rejected guess also stops play, since the strategy would repeat it.
    pub fn play_out(&self, mut state: GameState) -> PlayResult {
        let mut steps = Vec::new();
        let mut score = None;

        while let Some(guess) = self.next_guess(&state) {
            let resolution = guess.apply(state);
            state = resolution.state;

            if resolution.outcome.is_rejected() {
                break;
            }

            score = resolution.outcome.score();
            steps.push(PlayStep {
                guess,
                message: resolution.outcome.to_string(),
                revealed: state.revealed(),
                attempts_remaining: state.attempts_remaining(),
            });

            if state.is_over() {
                break;
            }
        }

        PlayResult {
            target: state.target(),
            steps,
            finished: state.is_over(),
            won: state.won(),
            score,
            attempts_remaining: state.attempts_remaining(),
        }
    }
}
