//! Pokemon Hangman
//!
//! A hangman guess-resolution and scoring engine, with an in-memory game
//! service, an automated player and terminal front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use pokemon_hangman::core::{GameState, guess_letter, guess_word};
//!
//! let state = GameState::new("Pikachu").unwrap();
//!
//! let step = guess_letter(state, "p");
//! assert_eq!(step.message(), "Correct guess! Word so far: P______");
//!
//! let step = guess_word(step.state, "pikachu");
//! assert!(step.state.won());
//! assert_eq!(step.message(), "You won! Score is 8.6.");
//! ```

// Core domain types
pub mod core;

// Users, games, history and scores
pub mod league;

// Automated players
pub mod solver;

// Pokémon name lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
