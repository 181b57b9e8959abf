//! Name solving command
//!
//! Plays the automated player against one chosen target and returns every step.

use crate::core::MAX_ATTEMPTS;
use crate::solver::{GuessStrategy, PlayResult, Player};
use crate::wordlists::Pokedex;

/// Configuration for solving a name
pub struct SolveConfig {
    pub target: String,
    pub attempts: u32,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            attempts: MAX_ATTEMPTS,
        }
    }
}

/// Solve a specific name using the given player
///
/// The target is looked up in the Pokédex first so its canonical spelling is
/// used; names outside the Pokédex are played as typed.
///
/// # Errors
///
/// Returns an error if the target is not a playable word (empty, or contains
/// whitespace or the placeholder character).
pub fn solve_name<S: GuessStrategy>(
    config: &SolveConfig,
    player: &Player<S>,
    pokedex: &Pokedex,
) -> Result<PlayResult, String> {
    let target = pokedex.find(&config.target).unwrap_or(config.target.as_str());
    player
        .play(target, config.attempts)
        .map_err(|e| format!("Invalid target: {e}"))
}
