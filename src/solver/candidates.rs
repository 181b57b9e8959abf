//! Candidate filtering
//!
//! Narrows a name pool to the names that could still be the target of a game.

use crate::core::{GameState, PLACEHOLDER};

/// Check whether `name` is consistent with everything `state` has revealed
///
/// A candidate must have the target's length, agree with every revealed
/// position, hold no already-guessed letter in a hidden position (a guessed
/// letter is always revealed everywhere it occurs) and not be a word that was
/// already guessed.
#[must_use]
pub fn is_consistent(state: &GameState, name: &str) -> bool {
    let revealed = state.revealed();
    if name.chars().count() != state.len() || state.has_guessed(&name.to_lowercase()) {
        return false;
    }

    name.chars().zip(revealed.chars()).all(|(c, r)| {
        if r == PLACEHOLDER {
            !state.has_guessed(&c.to_lowercase().to_string())
        } else {
            c.to_lowercase().eq(r.to_lowercase())
        }
    })
}

/// Filter `pool` to names consistent with `state`
#[must_use]
pub fn filter_candidates<'a>(state: &GameState, pool: &[&'a str]) -> Vec<&'a str> {
    pool.iter()
        .copied()
        .filter(|name| is_consistent(state, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{guess_letter, guess_word};

    const POOL: &[&str] = &["Pikachu", "Raichu", "Pidgey", "Pidgeot", "Psyduck", "Paras"];

    #[test]
    fn fresh_game_filters_by_length() {
        let state = GameState::new("Pikachu").unwrap();
        assert_eq!(
            filter_candidates(&state, POOL),
            vec!["Pikachu", "Pidgeot", "Psyduck"]
        );
    }

    #[test]
    fn revealed_letters_must_match() {
        let state = GameState::new("Pikachu").unwrap();
        let state = guess_letter(state, "u").state;
        assert_eq!(filter_candidates(&state, POOL), vec!["Pikachu"]);
    }

    #[test]
    fn missed_letters_exclude_candidates() {
        let state = GameState::new("Pikachu").unwrap();
        let state = guess_letter(state, "d").state;
        assert_eq!(filter_candidates(&state, POOL), vec!["Pikachu"]);
    }

    #[test]
    fn wrong_word_guesses_excluded() {
        let state = GameState::new("Pikachu").unwrap();
        let state = guess_word(state, "pidgeot").state;
        assert_eq!(
            filter_candidates(&state, POOL),
            vec!["Pikachu", "Psyduck"]
        );
    }

    #[test]
    fn matching_ignores_case() {
        let state = GameState::new("PIKACHU").unwrap();
        let state = guess_letter(state, "p").state;
        assert!(is_consistent(&state, "pikachu"));
        assert!(is_consistent(&state, "Pikachu"));
    }
}
