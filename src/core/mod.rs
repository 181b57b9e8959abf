//! Core domain types for Pokemon Hangman
//!
//! The game state and the guess-resolution engine. No I/O happens here: every
//! operation is a pure transition from one `GameState` to the next.

pub mod engine;
mod state;

pub use engine::{
    Guess, LETTER_WIN_SCORE, Outcome, Resolution, WORD_PENALTY, apply, guess_letter, guess_word,
    word_score,
};
pub use state::{GameState, MAX_ATTEMPTS, PLACEHOLDER, TargetError};
