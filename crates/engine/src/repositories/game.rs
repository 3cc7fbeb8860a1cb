//! Per-game record access.
//!
//! Maps a game's state and narrative onto its two store keys. An entry
//! holding an empty string reads as absent, so a blanked entry is
//! re-initialized on the next fetch.

use std::sync::Arc;

use chimera_domain::{GameId, GameState, Narrative};

use crate::infrastructure::ports::{GameKeys, KvStore, RepoError};

pub struct GameRecords {
    store: Arc<dyn KvStore>,
}

impl GameRecords {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn get_game_state(&self, game_id: &GameId) -> Result<Option<GameState>, RepoError> {
        let key = GameKeys::for_game(game_id).game_state;
        Ok(self.read(&key).await?.map(GameState::new))
    }

    pub async fn save_game_state(
        &self,
        game_id: &GameId,
        state: &GameState,
    ) -> Result<(), RepoError> {
        let key = GameKeys::for_game(game_id).game_state;
        self.store.set(&key, state.as_str()).await
    }

    pub async fn get_narrative(&self, game_id: &GameId) -> Result<Option<Narrative>, RepoError> {
        let key = GameKeys::for_game(game_id).narrative;
        Ok(self.read(&key).await?.map(Narrative::new))
    }

    pub async fn save_narrative(
        &self,
        game_id: &GameId,
        narrative: &Narrative,
    ) -> Result<(), RepoError> {
        let key = GameKeys::for_game(game_id).narrative;
        self.store.set(&key, narrative.as_str()).await
    }

    async fn read(&self, key: &str) -> Result<Option<String>, RepoError> {
        Ok(self.store.get(key).await?.filter(|value| !value.is_empty()))
    }
}
