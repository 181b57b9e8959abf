//! Hangman game state
//!
//! A `GameState` stores the secret target alongside the revealed pattern, the
//! remaining attempt budget, every token guessed so far and the accumulated
//! whole-word penalty.

use std::fmt;

/// Attempt budget of a freshly created game
pub const MAX_ATTEMPTS: u32 = 6;

/// Character shown for positions not yet uncovered
pub const PLACEHOLDER: char = '_';

/// State of a single hangman game
///
/// Mutated only through the guess operations in [`crate::core::engine`].
/// Once `is_over` is set the state is frozen.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    target: Vec<char>,
    revealed: Vec<char>,
    attempts_budget: u32,
    attempts_remaining: u32,
    guessed: Vec<String>,
    penalty: f64,
    is_over: bool,
    won: bool,
}

/// Error type for invalid target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    Empty,
    ContainsWhitespace,
    ContainsPlaceholder,
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Target word must not be empty"),
            Self::ContainsWhitespace => write!(f, "Target word must not contain whitespace"),
            Self::ContainsPlaceholder => {
                write!(f, "Target word must not contain '{PLACEHOLDER}'")
            }
        }
    }
}

impl std::error::Error for TargetError {}

impl GameState {
    /// Create a new game with the default attempt budget
    ///
    /// # Errors
    /// Returns `TargetError` if the target is empty, contains whitespace, or
    /// contains the placeholder character.
    ///
    /// # Examples
    /// ```
    /// use pokemon_hangman::core::GameState;
    ///
    /// let state = GameState::new("Pikachu").unwrap();
    /// assert_eq!(state.revealed(), "_______");
    /// assert_eq!(state.attempts_remaining(), 6);
    ///
    /// assert!(GameState::new("").is_err());
    /// assert!(GameState::new("Mr Mime").is_err());
    /// ```
    pub fn new(target: &str) -> Result<Self, TargetError> {
        Self::with_attempts(target, MAX_ATTEMPTS)
    }

    /// Create a new game with a custom attempt budget
    ///
    /// # Errors
    /// Same as [`GameState::new`].
    pub fn with_attempts(target: &str, attempts: u32) -> Result<Self, TargetError> {
        if target.is_empty() {
            return Err(TargetError::Empty);
        }
        if target.chars().any(char::is_whitespace) {
            return Err(TargetError::ContainsWhitespace);
        }
        if target.contains(PLACEHOLDER) {
            return Err(TargetError::ContainsPlaceholder);
        }

        let target: Vec<char> = target.chars().collect();
        let revealed = vec![PLACEHOLDER; target.len()];

        Ok(Self {
            target,
            revealed,
            attempts_budget: attempts,
            attempts_remaining: attempts,
            guessed: Vec::new(),
            penalty: 0.0,
            is_over: false,
            won: false,
        })
    }

    /// The secret word, in its original case
    #[must_use]
    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// The revealed pattern, e.g. `P______`
    #[must_use]
    pub fn revealed(&self) -> String {
        self.revealed.iter().collect()
    }

    /// Number of characters in the target
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.target.len()
    }

    /// Always false: targets are validated to be non-empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Attempts the game started with
    #[inline]
    #[must_use]
    pub const fn attempts_budget(&self) -> u32 {
        self.attempts_budget
    }

    /// Attempts spent on wrong guesses so far
    #[inline]
    #[must_use]
    pub const fn misses(&self) -> u32 {
        self.attempts_budget - self.attempts_remaining
    }

    /// Every accepted guess, lowercased, in the order it was made
    #[inline]
    #[must_use]
    pub fn guessed_tokens(&self) -> &[String] {
        &self.guessed
    }

    /// Check whether a (lowercased) token was already guessed
    #[must_use]
    pub fn has_guessed(&self, token: &str) -> bool {
        self.guessed.iter().any(|g| g == token)
    }

    #[inline]
    #[must_use]
    pub const fn penalty(&self) -> f64 {
        self.penalty
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    /// Whether the game was won. Only meaningful once `is_over` is true.
    #[inline]
    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    /// Count of positions still showing the placeholder
    #[must_use]
    pub fn placeholders_remaining(&self) -> usize {
        self.revealed.iter().filter(|&&c| c == PLACEHOLDER).count()
    }

    /// Win condition: the revealed pattern equals the target exactly
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.revealed == self.target
    }

    /// Case-insensitive comparison of a whole word against the target
    #[must_use]
    pub fn matches_target(&self, word: &str) -> bool {
        word.to_lowercase() == self.target().to_lowercase()
    }

    /// Letters of the target that have not been revealed yet, lowercased
    #[must_use]
    pub fn hidden_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .target
            .iter()
            .zip(&self.revealed)
            .filter(|(_, r)| **r == PLACEHOLDER)
            .flat_map(|(t, _)| t.to_lowercase())
            .collect();
        letters.sort_unstable();
        letters.dedup();
        letters
    }

    pub(crate) fn record_guess(&mut self, token: String) {
        self.guessed.push(token);
    }

    /// Reveal every position whose target letter matches `letter`
    ///
    /// Returns the number of positions that match.
    pub(crate) fn reveal(&mut self, letter: &str) -> usize {
        let mut matched = 0;
        for (t, r) in self.target.iter().zip(self.revealed.iter_mut()) {
            if t.to_lowercase().eq(letter.chars()) {
                *r = *t;
                matched += 1;
            }
        }
        matched
    }

    pub(crate) fn reveal_all(&mut self) {
        self.revealed.clone_from(&self.target);
    }

    /// Spend one attempt, returning what is left
    pub(crate) fn lose_attempt(&mut self) -> u32 {
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        self.attempts_remaining
    }

    pub(crate) fn add_penalty(&mut self, amount: f64) {
        self.penalty += amount;
    }

    pub(crate) fn finish(&mut self, won: bool) {
        self.is_over = true;
        self.won = won;
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.revealed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_is_fully_hidden() {
        let state = GameState::new("Pikachu").unwrap();
        assert_eq!(state.revealed(), "_______");
        assert_eq!(state.len(), 7);
        assert_eq!(state.placeholders_remaining(), 7);
        assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS);
        assert!(state.guessed_tokens().is_empty());
        assert!((state.penalty() - 0.0).abs() < f64::EPSILON);
        assert!(!state.is_over());
        assert!(!state.won());
    }

    #[test]
    fn target_keeps_original_case() {
        let state = GameState::new("Pikachu").unwrap();
        assert_eq!(state.target(), "Pikachu");
    }

    #[test]
    fn custom_attempt_budget() {
        let state = GameState::with_attempts("Cat", 1).unwrap();
        assert_eq!(state.attempts_remaining(), 1);
        assert_eq!(state.attempts_budget(), 1);
        assert_eq!(state.misses(), 0);
    }

    #[test]
    fn invalid_targets_rejected() {
        assert_eq!(GameState::new(""), Err(TargetError::Empty));
        assert_eq!(
            GameState::new("Mr Mime"),
            Err(TargetError::ContainsWhitespace)
        );
        assert_eq!(
            GameState::new("Por_gon"),
            Err(TargetError::ContainsPlaceholder)
        );
    }

    #[test]
    fn reveal_uncovers_every_occurrence() {
        let mut state = GameState::new("Abra").unwrap();
        assert_eq!(state.reveal("a"), 2);
        assert_eq!(state.revealed(), "A__a");
    }

    #[test]
    fn reveal_missing_letter_changes_nothing() {
        let mut state = GameState::new("Abra").unwrap();
        assert_eq!(state.reveal("z"), 0);
        assert_eq!(state.revealed(), "____");
    }

    #[test]
    fn solved_only_when_pattern_matches_target() {
        let mut state = GameState::new("Mew").unwrap();
        state.reveal("m");
        state.reveal("e");
        assert!(!state.is_solved());
        state.reveal("w");
        assert!(state.is_solved());
    }

    #[test]
    fn matches_target_ignores_case() {
        let state = GameState::new("Onix").unwrap();
        assert!(state.matches_target("onix"));
        assert!(state.matches_target("ONIX"));
        assert!(!state.matches_target("onyx"));
    }

    #[test]
    fn lose_attempt_saturates_at_zero() {
        let mut state = GameState::with_attempts("Mew", 1).unwrap();
        assert_eq!(state.lose_attempt(), 0);
        assert_eq!(state.lose_attempt(), 0);
        assert_eq!(state.misses(), 1);
    }

    #[test]
    fn hidden_letters_are_unique_and_lowercase() {
        let mut state = GameState::new("Eevee").unwrap();
        assert_eq!(state.hidden_letters(), vec!['e', 'v']);
        state.reveal("e");
        assert_eq!(state.hidden_letters(), vec!['v']);
    }

    #[test]
    fn display_shows_revealed_pattern() {
        let mut state = GameState::new("Ditto").unwrap();
        state.reveal("t");
        assert_eq!(format!("{state}"), "__tt_");
    }
}
