//! Guess resolution and scoring
//!
//! Pure transitions `(GameState, guess) -> (GameState, Outcome)`. Rejected
//! guesses (repeats, malformed letters, guesses after the game ended) return
//! the state untouched with an explanatory outcome; nothing here fails.

use super::state::GameState;
use std::fmt;

/// Score awarded for winning by uncovering the final letter
pub const LETTER_WIN_SCORE: f64 = 1.0;

/// Lowest score a whole-word win can earn
pub const MIN_WIN_SCORE: f64 = 1.0;

/// Penalty added for each wrong whole-word guess
pub const WORD_PENALTY: f64 = 1.0;

/// Maximum whole-word score, earned by guessing before any letter is shown
pub const MAX_WORD_SCORE: f64 = 10.0;

/// A guess submitted by a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    /// A single letter
    Letter(String),
    /// An attempt at the whole word
    Word(String),
}

impl Guess {
    /// The raw text of the guess as entered
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Letter(text) | Self::Word(text) => text,
        }
    }

    /// Apply this guess to `state`
    #[must_use]
    pub fn apply(&self, state: GameState) -> Resolution {
        match self {
            Self::Letter(letter) => guess_letter(state, letter),
            Self::Word(word) => guess_word(state, word),
        }
    }
}

/// Result of a single guess
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    AlreadyOver,
    NotSingleLetter,
    RepeatedLetter,
    RepeatedWord,
    CorrectLetter { revealed: String },
    IncorrectLetter { revealed: String },
    IncorrectWord { penalty: f64 },
    WonByLetter,
    WonByWord { score: f64 },
    Lost,
}

impl Outcome {
    /// Score of a terminal outcome
    ///
    /// Returns `None` while the game is still open or the guess was rejected.
    #[must_use]
    pub const fn score(&self) -> Option<f64> {
        match self {
            Self::WonByLetter => Some(LETTER_WIN_SCORE),
            Self::WonByWord { score } => Some(*score),
            Self::Lost => Some(0.0),
            _ => None,
        }
    }

    /// Whether this guess ended the game
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::WonByLetter | Self::WonByWord { .. } | Self::Lost)
    }

    /// Whether this guess was refused without touching the state
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(
            self,
            Self::AlreadyOver | Self::NotSingleLetter | Self::RepeatedLetter | Self::RepeatedWord
        )
    }

    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::WonByLetter | Self::WonByWord { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyOver => write!(f, "Game is already over!"),
            Self::NotSingleLetter => write!(f, "You can only guess a single letter."),
            Self::RepeatedLetter => write!(f, "You already guessed that letter!"),
            Self::RepeatedWord => write!(f, "You already guessed that word!"),
            Self::CorrectLetter { revealed } => {
                write!(f, "Correct guess! Word so far: {revealed}")
            }
            Self::IncorrectLetter { revealed } => {
                write!(f, "Incorrect guess! Word so far: {revealed}")
            }
            Self::IncorrectWord { penalty } => {
                write!(f, "Incorrect guess! Penalty is {penalty:.1}.")
            }
            Self::WonByLetter => write!(f, "You won! Score is 1."),
            Self::WonByWord { score } => write!(f, "You won! Score is {score:.1}."),
            Self::Lost => write!(f, "Game over! Score is 0."),
        }
    }
}

/// The next state together with what happened
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub state: GameState,
    pub outcome: Outcome,
}

impl Resolution {
    const fn new(state: GameState, outcome: Outcome) -> Self {
        Self { state, outcome }
    }

    /// Human-readable outcome message
    #[must_use]
    pub fn message(&self) -> String {
        self.outcome.to_string()
    }
}

/// Guess a single letter
///
/// Every occurrence of the letter is revealed at once. A miss costs one
/// attempt; the game is lost when fewer than one attempt remains.
///
/// # Examples
/// ```
/// use pokemon_hangman::core::{GameState, guess_letter};
///
/// let state = GameState::new("PIKACHU").unwrap();
/// let resolution = guess_letter(state, "p");
/// assert_eq!(resolution.message(), "Correct guess! Word so far: P______");
/// assert_eq!(resolution.state.attempts_remaining(), 6);
/// ```
#[must_use]
pub fn guess_letter(mut state: GameState, letter: &str) -> Resolution {
    if state.is_over() {
        return Resolution::new(state, Outcome::AlreadyOver);
    }
    if letter.chars().count() != 1 {
        return Resolution::new(state, Outcome::NotSingleLetter);
    }

    let letter = letter.to_lowercase();
    if state.has_guessed(&letter) {
        return Resolution::new(state, Outcome::RepeatedLetter);
    }
    state.record_guess(letter.clone());

    if state.reveal(&letter) > 0 {
        if state.is_solved() {
            state.finish(true);
            return Resolution::new(state, Outcome::WonByLetter);
        }
        let revealed = state.revealed();
        return Resolution::new(state, Outcome::CorrectLetter { revealed });
    }

    if state.lose_attempt() < 1 {
        state.finish(false);
        return Resolution::new(state, Outcome::Lost);
    }
    let revealed = state.revealed();
    Resolution::new(state, Outcome::IncorrectLetter { revealed })
}

/// Guess the whole word
///
/// A correct guess wins with a score based on how much of the word was still
/// hidden. A wrong guess costs one attempt and, unless it ends the game, adds
/// [`WORD_PENALTY`] to the penalty.
#[must_use]
pub fn guess_word(mut state: GameState, word: &str) -> Resolution {
    if state.is_over() {
        return Resolution::new(state, Outcome::AlreadyOver);
    }

    let word = word.to_lowercase();
    if state.has_guessed(&word) {
        return Resolution::new(state, Outcome::RepeatedWord);
    }
    state.record_guess(word.clone());

    if state.matches_target(&word) {
        // Placeholders are counted before the winning reveal.
        let score = word_score(state.placeholders_remaining(), state.len(), state.penalty());
        state.reveal_all();
        state.finish(true);
        return Resolution::new(state, Outcome::WonByWord { score });
    }

    if state.lose_attempt() < 1 {
        state.finish(false);
        return Resolution::new(state, Outcome::Lost);
    }
    state.add_penalty(WORD_PENALTY);
    let penalty = state.penalty();
    Resolution::new(state, Outcome::IncorrectWord { penalty })
}

/// Apply either kind of guess
#[must_use]
pub fn apply(state: GameState, guess: &Guess) -> Resolution {
    guess.apply(state)
}

/// Score for a whole-word win
///
/// `max(1.0, round(placeholders / length * 10 - penalty, 1))`
///
/// # Examples
/// ```
/// use pokemon_hangman::core::word_score;
///
/// assert!((word_score(2, 3, 1.0) - 5.7).abs() < 1e-9);
/// assert!((word_score(7, 7, 0.0) - 10.0).abs() < 1e-9);
/// assert!((word_score(1, 7, 3.0) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn word_score(placeholders: usize, length: usize, penalty: f64) -> f64 {
    if length == 0 {
        return MIN_WIN_SCORE;
    }
    let raw = placeholders as f64 / length as f64 * MAX_WORD_SCORE - penalty;
    round_to_tenth(raw).max(MIN_WIN_SCORE)
}

/// Round to one decimal place, ties away from zero
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
