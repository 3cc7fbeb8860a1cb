//! Application state and composition.

use std::sync::Arc;

use chimera_domain::{GameState, Narrative};

use crate::infrastructure::ports::{KvStore, LlmPort};
use crate::prompt_templates::PromptTemplates;
use crate::repositories::GameRecords;
use crate::use_cases;

/// Main application state.
///
/// Holds the use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub narrative: use_cases::NarrativeUseCases,
    pub generate: use_cases::GenerateUseCases,
}

impl App {
    pub fn new(
        store: Arc<dyn KvStore>,
        llm: Arc<dyn LlmPort>,
        templates: PromptTemplates,
        settings: use_cases::TurnSettings,
    ) -> Self {
        let games = Arc::new(GameRecords::new(store));

        let fetch = Arc::new(use_cases::FetchNarrative::new(
            games.clone(),
            GameState::new(templates.initial_game_state.clone()),
            Narrative::new(templates.initial_narrative.clone()),
        ));
        let start = Arc::new(use_cases::StartGame::new(fetch.clone()));
        let turn = Arc::new(use_cases::ProcessTurn::new(
            games,
            llm.clone(),
            Arc::new(templates),
            settings,
        ));
        let text = Arc::new(use_cases::GenerateText::new(llm));

        Self {
            use_cases: UseCases {
                narrative: use_cases::NarrativeUseCases::new(fetch, turn, start),
                generate: use_cases::GenerateUseCases::new(text),
            },
        }
    }
}
