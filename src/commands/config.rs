//! Game session configuration

use crate::core::MAX_ATTEMPTS;

/// Default player name for interactive sessions
pub const DEFAULT_USER: &str = "trainer";

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Attempt budget for each new game
    pub attempts: u32,
    /// Player name used for interactive sessions
    pub user: String,
    /// Optional email registered with the player
    pub email: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            attempts: MAX_ATTEMPTS,
            user: DEFAULT_USER.to_string(),
            email: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(user: impl Into<String>, attempts: u32) -> Self {
        Self {
            attempts,
            user: user.into(),
            email: None,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }
}
