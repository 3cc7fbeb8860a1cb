//! Narrative fetch with first-access initialization.

use std::sync::Arc;

use chimera_domain::{GameId, GameState, Narrative};

use crate::infrastructure::ports::RepoError;
use crate::repositories::GameRecords;

/// Returns a game's current narrative, seeding the game on first access.
pub struct FetchNarrative {
    records: Arc<GameRecords>,
    initial_state: GameState,
    initial_narrative: Narrative,
}

impl FetchNarrative {
    pub fn new(
        records: Arc<GameRecords>,
        initial_state: GameState,
        initial_narrative: Narrative,
    ) -> Self {
        Self {
            records,
            initial_state,
            initial_narrative,
        }
    }

    /// Read the narrative; if the game has none yet, write the default
    /// state and narrative (in that order) and return the default narrative.
    pub async fn execute(&self, game_id: &GameId) -> Result<NarrativeFetched, NarrativeError> {
        if let Some(narrative) = self.records.get_narrative(game_id).await? {
            return Ok(NarrativeFetched {
                narrative,
                initialized: false,
            });
        }

        tracing::info!(game_id = %game_id, "No narrative found, initializing game");
        self.records
            .save_game_state(game_id, &self.initial_state)
            .await?;
        self.records
            .save_narrative(game_id, &self.initial_narrative)
            .await?;

        Ok(NarrativeFetched {
            narrative: self.initial_narrative.clone(),
            initialized: true,
        })
    }
}

#[derive(Debug)]
pub struct NarrativeFetched {
    pub narrative: Narrative,
    /// True when this call seeded the game.
    pub initialized: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("Failed to retrieve game state: {0}")]
    Store(#[from] RepoError),
}
