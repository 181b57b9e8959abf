//! Automated play
//!
//! Strategies that choose guesses, and a player that drives games to the end.

pub mod candidates;
mod engine;
pub mod strategy;

pub use candidates::filter_candidates;
pub use engine::{PlayResult, PlayStep, Player};
pub use strategy::{FrequencyStrategy, GuessStrategy, RandomStrategy, StrategyType};
