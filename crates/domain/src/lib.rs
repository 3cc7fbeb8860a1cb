//! Chimera Domain - core types for the narrative game.
//!
//! Everything here is pure: no I/O, no async, no framework types.

pub mod error;
pub mod ids;
pub mod value_objects;

pub use error::DomainError;
pub use ids::{GameId, DEFAULT_GAME_ID};
pub use value_objects::{GameState, Narrative, PlayerAction, Prompt};
