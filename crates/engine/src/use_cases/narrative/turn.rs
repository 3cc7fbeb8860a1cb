//! Turn processing: player action in, narrative out.

use std::sync::Arc;

use chimera_domain::{DomainError, GameId, GameState, Narrative, PlayerAction};

use super::prompt::compose_turn_prompt;
use super::response_parser::parse_turn_reply;
use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest, RepoError};
use crate::prompt_templates::PromptTemplates;
use crate::repositories::GameRecords;

/// Turn behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnSettings {
    /// Persist a `<GAME_STATE>` block from the reply as the new state, and
    /// store only the `<NARRATIVE>` block as the narrative.
    ///
    /// Off by default: the stored state then never changes after the game
    /// is seeded, and the whole reply becomes the narrative.
    pub persist_state_blocks: bool,
}

pub struct ProcessTurn {
    records: Arc<GameRecords>,
    llm: Arc<dyn LlmPort>,
    templates: Arc<PromptTemplates>,
    settings: TurnSettings,
}

impl ProcessTurn {
    pub fn new(
        records: Arc<GameRecords>,
        llm: Arc<dyn LlmPort>,
        templates: Arc<PromptTemplates>,
        settings: TurnSettings,
    ) -> Self {
        Self {
            records,
            llm,
            templates,
            settings,
        }
    }

    pub async fn execute(
        &self,
        game_id: &GameId,
        action: Option<String>,
    ) -> Result<TurnProcessed, TurnError> {
        let action = PlayerAction::from_optional(action)?;

        let state = self
            .records
            .get_game_state(game_id)
            .await?
            .ok_or_else(|| TurnError::StateNotInitialized(game_id.clone()))?;

        let prompt = compose_turn_prompt(&self.templates, &state, &action);
        tracing::debug!(
            game_id = %game_id,
            prompt_chars = prompt.len(),
            "Submitting turn prompt"
        );

        let response = self.llm.generate(LlmRequest::new(prompt)).await?;
        if response.content.trim().is_empty() {
            return Err(TurnError::EmptyNarrative);
        }

        let (narrative, new_state) = self.split_reply(response.content);

        // Narrative first: a failed write must not leave the state ahead of it.
        self.records.save_narrative(game_id, &narrative).await?;
        if let Some(new_state) = &new_state {
            self.records.save_game_state(game_id, new_state).await?;
        }

        tracing::info!(
            game_id = %game_id,
            narrative_chars = narrative.as_str().len(),
            state_updated = new_state.is_some(),
            "Turn processed"
        );

        Ok(TurnProcessed {
            narrative,
            state_updated: new_state.is_some(),
        })
    }

    fn split_reply(&self, text: String) -> (Narrative, Option<GameState>) {
        if !self.settings.persist_state_blocks {
            return (Narrative::new(text), None);
        }

        let parsed = parse_turn_reply(&text);
        let Some(state) = parsed.game_state else {
            return (Narrative::new(text), None);
        };
        let narrative = parsed.narrative.unwrap_or(text);
        (Narrative::new(narrative), Some(GameState::new(state)))
    }
}

#[derive(Debug)]
pub struct TurnProcessed {
    pub narrative: Narrative,
    pub state_updated: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error(transparent)]
    Validation(#[from] DomainError),
    #[error("Game state not found for game '{0}'. Fetch the narrative first to initialize the game.")]
    StateNotInitialized(GameId),
    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),
    #[error("Model did not return a valid narrative")]
    EmptyNarrative,
    #[error("Store error: {0}")]
    Store(#[from] RepoError),
}
