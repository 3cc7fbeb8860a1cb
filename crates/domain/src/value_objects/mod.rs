//! Value objects for the narrative game.

mod game_text;
mod player_input;

pub use game_text::{GameState, Narrative};
pub use player_input::{PlayerAction, Prompt};
