//! Name list loading utilities
//!
//! Provides functions to load a Pokédex from files or from the embedded list.

use super::Pokedex;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Load a Pokédex from a file of `<number> <name>` lines
///
/// Blank lines are ignored; malformed lines are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use pokemon_hangman::wordlists::loader::load_from_file;
///
/// let pokedex = load_from_file("data/pokemon.txt").unwrap();
/// println!("Loaded {} names", pokedex.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Pokedex> {
    let content = fs::read_to_string(path)?;
    Ok(Pokedex::from_entries(parse_entries(&content)))
}

/// Parse `<number> <name>` lines
#[must_use]
pub fn parse_entries(content: &str) -> Vec<(u32, String)> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let entry = parse_line(trimmed);
            if entry.is_none() {
                warn!("skipping malformed name entry on line {}: {trimmed:?}", idx + 1);
            }
            entry
        })
        .collect()
}

fn parse_line(line: &str) -> Option<(u32, String)> {
    let mut parts = line.split_whitespace();
    let number = parts.next()?.parse().ok()?;
    let name = parts.next()?;
    if parts.next().is_some() || name.contains(crate::core::PLACEHOLDER) {
        return None;
    }
    Some((number, name.to_string()))
}

/// Convert the embedded slice to a Pokédex
///
/// # Examples
/// ```
/// use pokemon_hangman::wordlists::loader::pokedex_from_slice;
/// use pokemon_hangman::wordlists::NAMES;
///
/// let pokedex = pokedex_from_slice(NAMES);
/// assert_eq!(pokedex.len(), NAMES.len());
/// ```
#[must_use]
pub fn pokedex_from_slice(slice: &[(u32, &str)]) -> Pokedex {
    Pokedex::from_entries(
        slice
            .iter()
            .map(|&(number, name)| (number, name.to_string())),
    )
}
