//! Store port trait and key layout.

use async_trait::async_trait;
use chimera_domain::GameId;

use super::error::RepoError;

// =============================================================================
// Key-Value Storage
// =============================================================================

/// String key-value store. Get and set only, no transactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RepoError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), RepoError>;
}

/// The two store keys belonging to one game.
///
/// For the default game these are `project_chimera_game_state` and
/// `project_chimera_last_narrative`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameKeys {
    pub game_state: String,
    pub narrative: String,
}

impl GameKeys {
    pub fn for_game(game_id: &GameId) -> Self {
        Self {
            game_state: format!("{}_game_state", game_id),
            narrative: format!("{}_last_narrative", game_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_game_keys() {
        let keys = GameKeys::for_game(&GameId::default());
        assert_eq!(keys.game_state, "project_chimera_game_state");
        assert_eq!(keys.narrative, "project_chimera_last_narrative");
    }

    #[test]
    fn distinct_games_never_share_keys() {
        let a = GameKeys::for_game(&GameId::new("alpha").expect("valid id"));
        let b = GameKeys::for_game(&GameId::new("beta").expect("valid id"));
        assert_ne!(a.game_state, b.game_state);
        assert_ne!(a.narrative, b.narrative);
    }
}
