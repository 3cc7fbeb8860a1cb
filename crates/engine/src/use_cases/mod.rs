//! Use cases - user story orchestration across repositories and ports.

pub mod generate;
pub mod narrative;

pub use generate::{GenerateError, GenerateText, GenerateUseCases};
pub use narrative::{
    FetchNarrative, GameStarted, NarrativeError, NarrativeFetched, NarrativeUseCases,
    ProcessTurn, StartGame, TurnError, TurnProcessed, TurnSettings,
};
