//! Pokédex lookup
//!
//! Maps Pokédex numbers to names and draws random hangman targets.

use log::warn;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;

/// Numbered collection of Pokémon names
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    entries: Vec<(u32, String)>,
    by_number: FxHashMap<u32, usize>,
}

impl Pokedex {
    /// Build from `(number, name)` pairs
    ///
    /// When a number appears twice the first entry is kept.
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, String)>) -> Self {
        let mut pokedex = Self::default();
        for (number, name) in entries {
            if pokedex.by_number.contains_key(&number) {
                warn!("duplicate Pokédex number {number} ({name}), keeping first entry");
                continue;
            }
            pokedex.by_number.insert(number, pokedex.entries.len());
            pokedex.entries.push((number, name));
        }
        pokedex
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a name by Pokédex number
    #[must_use]
    pub fn get_name(&self, number: u32) -> Option<&str> {
        self.by_number
            .get(&number)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    /// Find the canonical spelling of a name, ignoring case
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&str> {
        let wanted = name.to_lowercase();
        self.names().find(|n| n.to_lowercase() == wanted)
    }

    /// Pick a random name
    ///
    /// Returns `None` if the Pokédex is empty.
    pub fn random_name<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.entries.choose(rng).map(|(_, name)| name.as_str())
    }

    /// All names in Pokédex order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, name)| name.as_str())
    }

    /// All `(number, name)` entries in Pokédex order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries
            .iter()
            .map(|(number, name)| (*number, name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Pokedex {
        Pokedex::from_entries([
            (1, "Bulbasaur".to_string()),
            (4, "Charmander".to_string()),
            (7, "Squirtle".to_string()),
        ])
    }

    #[test]
    fn get_name_by_number() {
        let pokedex = sample();
        assert_eq!(pokedex.get_name(4), Some("Charmander"));
        assert_eq!(pokedex.get_name(2), None);
    }

    #[test]
    fn duplicate_numbers_keep_first() {
        let pokedex = Pokedex::from_entries([
            (25, "Pikachu".to_string()),
            (25, "Raichu".to_string()),
        ]);
        assert_eq!(pokedex.len(), 1);
        assert_eq!(pokedex.get_name(25), Some("Pikachu"));
    }

    #[test]
    fn random_name_comes_from_pokedex() {
        let pokedex = sample();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let name = pokedex.random_name(&mut rng).unwrap();
            assert!(pokedex.names().any(|n| n == name));
        }
    }

    #[test]
    fn random_name_empty_pokedex() {
        let pokedex = Pokedex::default();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pokedex.random_name(&mut rng).is_none());
        assert!(pokedex.is_empty());
    }

    #[test]
    fn find_ignores_case() {
        let pokedex = sample();
        assert_eq!(pokedex.find("SQUIRTLE"), Some("Squirtle"));
        assert_eq!(pokedex.find("pikachu"), None);
    }

    #[test]
    fn iter_preserves_order() {
        let numbers: Vec<u32> = sample().iter().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![1, 4, 7]);
    }
}
