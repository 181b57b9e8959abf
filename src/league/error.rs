//! League error type

use super::GameId;
use crate::core::TargetError;
use std::fmt;

/// Error type for league operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    UserExists(String),
    EmailExists(String),
    UserNotFound(String),
    GameNotFound(GameId),
    InvalidKey(String),
    InvalidTarget(TargetError),
    NoNames,
}

impl fmt::Display for LeagueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserExists(_) => write!(f, "A User with that name already exists!"),
            Self::EmailExists(_) => write!(f, "A User with that email already exists!"),
            Self::UserNotFound(_) => write!(f, "A User with that name does not exist!"),
            Self::GameNotFound(_) => write!(f, "Game not found!"),
            Self::InvalidKey(key) => write!(f, "Invalid Key: {key}"),
            Self::InvalidTarget(e) => write!(f, "Invalid target word: {e}"),
            Self::NoNames => write!(f, "No names available to pick a target from"),
        }
    }
}

impl std::error::Error for LeagueError {}

impl From<TargetError> for LeagueError {
    fn from(e: TargetError) -> Self {
        Self::InvalidTarget(e)
    }
}
