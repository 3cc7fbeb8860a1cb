use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum length of a game identifier.
const MAX_GAME_ID_LENGTH: usize = 64;

/// Identifier of the game every legacy (unscoped) route operates on.
pub const DEFAULT_GAME_ID: &str = "project_chimera";

/// Identifies one narrative game.
///
/// A slug of ASCII alphanumerics, `-` and `_`, so it can be embedded in
/// store keys and URL paths without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GameId(String);

impl GameId {
    /// Parse and validate a game identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidId` if the id is empty, longer than 64
    /// characters, or contains characters outside `[A-Za-z0-9_-]`.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("game id cannot be empty"));
        }
        if trimmed.len() > MAX_GAME_ID_LENGTH {
            return Err(DomainError::invalid_id(format!(
                "game id cannot exceed {} characters",
                MAX_GAME_ID_LENGTH
            )));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::invalid_id(format!(
                "game id '{}' may only contain letters, digits, '-' and '_'",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// A fresh, random game id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self(DEFAULT_GAME_ID.to_string())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for GameId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<GameId> for String {
    fn from(id: GameId) -> String {
        id.0
    }
}
