//! New game creation.

use std::sync::Arc;

use chimera_domain::{GameId, Narrative};

use super::fetch::{FetchNarrative, NarrativeError};

/// Allocates a fresh game id and seeds it.
pub struct StartGame {
    fetch: Arc<FetchNarrative>,
}

impl StartGame {
    pub fn new(fetch: Arc<FetchNarrative>) -> Self {
        Self { fetch }
    }

    pub async fn execute(&self) -> Result<GameStarted, NarrativeError> {
        let game_id = GameId::generate();
        let fetched = self.fetch.execute(&game_id).await?;
        tracing::info!(game_id = %game_id, "Started new game");

        Ok(GameStarted {
            game_id,
            narrative: fetched.narrative,
        })
    }
}

#[derive(Debug)]
pub struct GameStarted {
    pub game_id: GameId,
    pub narrative: Narrative,
}
