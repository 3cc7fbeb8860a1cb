//! Validated request inputs.
//!
//! Both newtypes reject text that is empty after trimming, but keep the
//! original text untouched so it reaches the model exactly as typed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

// ============================================================================
// PlayerAction
// ============================================================================

/// What the player does this turn. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerAction(String);

impl PlayerAction {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the action is blank.
    pub fn new(action: impl Into<String>) -> Result<Self, DomainError> {
        let action = action.into();
        if action.trim().is_empty() {
            return Err(DomainError::validation("Player action is required."));
        }
        Ok(Self(action))
    }

    /// Validate an optional request field, treating `None` as blank.
    pub fn from_optional(action: Option<String>) -> Result<Self, DomainError> {
        Self::new(action.unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PlayerAction {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerAction> for String {
    fn from(action: PlayerAction) -> String {
        action.0
    }
}

// ============================================================================
// Prompt
// ============================================================================

/// Free-form text relayed to the model by the generation passthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Prompt(String);

impl Prompt {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the prompt is blank.
    pub fn new(prompt: impl Into<String>) -> Result<Self, DomainError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(DomainError::validation("Prompt is required."));
        }
        Ok(Self(prompt))
    }

    pub fn from_optional(prompt: Option<String>) -> Result<Self, DomainError> {
        Self::new(prompt.unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Prompt {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Prompt> for String {
    fn from(prompt: Prompt) -> String {
        prompt.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_action_rejects_blank() {
        assert_eq!(
            PlayerAction::new("").unwrap_err(),
            DomainError::validation("Player action is required.")
        );
        assert!(PlayerAction::new(" \n\t").is_err());
        assert!(PlayerAction::from_optional(None).is_err());
    }

    #[test]
    fn player_action_keeps_text_verbatim() {
        let action = PlayerAction::new("  Deploy the drone. ").expect("valid action");
        assert_eq!(action.as_str(), "  Deploy the drone. ");
    }

    #[test]
    fn prompt_rejects_blank() {
        assert_eq!(
            Prompt::from_optional(None).unwrap_err().message(),
            "Prompt is required."
        );
        assert!(Prompt::new("hello").is_ok());
    }
}
