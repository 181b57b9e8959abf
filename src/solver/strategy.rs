//! Guess selection strategies
//!
//! Defines the `GuessStrategy` trait and concrete implementations.

use super::candidates::filter_candidates;
use crate::core::{GameState, Guess};
use rustc_hash::FxHashMap;

/// Letters in rough order of frequency in English, used when no candidate
/// name fits the revealed pattern
const FALLBACK_ORDER: &str = "eaoirntlsucdhmgpbykfwvzjxq";

/// A strategy for choosing the next guess of a game
pub trait GuessStrategy {
    /// Pick the next guess for `state`, given every name the target might be
    ///
    /// Returns `None` when the strategy has nothing left to try.
    fn next_guess(&self, state: &GameState, pool: &[&str]) -> Option<Guess>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Letter-frequency narrowing (default)
    Frequency(FrequencyStrategy),
    /// Random unguessed letters
    Random(RandomStrategy),
}

impl GuessStrategy for StrategyType {
    fn next_guess(&self, state: &GameState, pool: &[&str]) -> Option<Guess> {
        match self {
            Self::Frequency(s) => s.next_guess(state, pool),
            Self::Random(s) => s.next_guess(state, pool),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

/// Letter-frequency strategy
///
/// Narrows the pool to names that fit the revealed pattern. With one
/// candidate left it guesses the whole word; otherwise it guesses the
/// unguessed letter found in the most candidates.
pub struct FrequencyStrategy;

impl GuessStrategy for FrequencyStrategy {
    fn next_guess(&self, state: &GameState, pool: &[&str]) -> Option<Guess> {
        if state.is_over() {
            return None;
        }

        let candidates = filter_candidates(state, pool);
        if let [only] = candidates.as_slice() {
            return Some(Guess::Word((*only).to_string()));
        }

        best_letter(state, &candidates)
            .or_else(|| fallback_letter(state))
            .map(|letter| Guess::Letter(letter.to_string()))
    }
}

/// Most common unguessed letter across candidates, counted once per name
fn best_letter(state: &GameState, candidates: &[&str]) -> Option<char> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for name in candidates {
        let mut letters: Vec<char> = name.chars().flat_map(char::to_lowercase).collect();
        letters.sort_unstable();
        letters.dedup();
        for letter in letters {
            if !state.has_guessed(&letter.to_string()) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
    }

    counts
        .into_iter()
        .max_by(|(a, ca), (b, cb)| ca.cmp(cb).then_with(|| b.cmp(a)))
        .map(|(letter, _)| letter)
}

fn fallback_letter(state: &GameState) -> Option<char> {
    FALLBACK_ORDER
        .chars()
        .find(|c| !state.has_guessed(&c.to_string()))
}

/// Random strategy
///
/// Guesses a random unguessed letter of the alphabet. Useful as a baseline.
pub struct RandomStrategy;

impl GuessStrategy for RandomStrategy {
    fn next_guess(&self, state: &GameState, _pool: &[&str]) -> Option<Guess> {
        use rand::prelude::IndexedRandom;

        if state.is_over() {
            return None;
        }

        let remaining: Vec<char> = ('a'..='z')
            .filter(|c| !state.has_guessed(&c.to_string()))
            .collect();

        remaining
            .choose(&mut rand::rng())
            .map(|letter| Guess::Letter(letter.to_string()))
    }
}
