//! Narrative game use cases.

mod fetch;
mod prompt;
mod response_parser;
mod start;
mod turn;

use std::sync::Arc;

pub use fetch::{FetchNarrative, NarrativeError, NarrativeFetched};
pub use prompt::compose_turn_prompt;
pub use response_parser::{parse_turn_reply, ParsedTurnReply};
pub use start::{GameStarted, StartGame};
pub use turn::{ProcessTurn, TurnError, TurnProcessed, TurnSettings};

pub struct NarrativeUseCases {
    pub fetch: Arc<FetchNarrative>,
    pub turn: Arc<ProcessTurn>,
    pub start: Arc<StartGame>,
}

impl NarrativeUseCases {
    pub fn new(fetch: Arc<FetchNarrative>, turn: Arc<ProcessTurn>, start: Arc<StartGame>) -> Self {
        Self { fetch, turn, start }
    }
}
