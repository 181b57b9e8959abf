//! Pokémon name lists
//!
//! Provides the embedded Pokédex compiled into the binary, plus loading of
//! custom name lists.

mod embedded;
pub mod loader;
mod pokedex;

pub use embedded::{NAMES, NAMES_COUNT};
pub use pokedex::Pokedex;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn names_count_matches_const() {
        assert_eq!(NAMES.len(), NAMES_COUNT);
    }

    #[test]
    fn names_are_valid_targets() {
        for &(number, name) in NAMES {
            assert!(
                GameState::new(name).is_ok(),
                "#{number} '{name}' is not a valid target"
            );
        }
    }

    #[test]
    fn numbers_are_unique() {
        let unique: std::collections::HashSet<_> = NAMES.iter().map(|(n, _)| n).collect();
        assert_eq!(unique.len(), NAMES.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(NAMES_COUNT, 151, "Expected the 151 original Pokémon");
    }
}
