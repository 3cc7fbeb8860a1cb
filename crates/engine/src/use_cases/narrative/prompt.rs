//! Turn prompt composition.

use chimera_domain::{GameState, PlayerAction};

use crate::prompt_templates::PromptTemplates;

/// Build the prompt for one turn.
///
/// Order is fixed: behaviour instructions, world context, the current
/// state inside `<GAME_STATE>`, then the action inside `<PLAYER_ACTION>`.
pub fn compose_turn_prompt(
    templates: &PromptTemplates,
    state: &GameState,
    action: &PlayerAction,
) -> String {
    format!(
        "{system}\n\n{world}\n\n<GAME_STATE>\n{state}\n</GAME_STATE>\n\n\
         The player takes the following action:\n<PLAYER_ACTION>\n{action}\n</PLAYER_ACTION>\n",
        system = templates.system_behavior.trim(),
        world = templates.world_context.trim(),
        state = state.as_str(),
        action = action.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates() -> PromptTemplates {
        PromptTemplates {
            system_behavior: "<SYSTEM_BEHAVIOR>rules</SYSTEM_BEHAVIOR>\n".to_string(),
            world_context: "  <WORLD_CONTEXT>lore</WORLD_CONTEXT>".to_string(),
            initial_game_state: String::new(),
            initial_narrative: String::new(),
        }
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let prompt = compose_turn_prompt(
            &templates(),
            &GameState::new("clock: 1"),
            &PlayerAction::new("Open the door").expect("valid action"),
        );

        let system = prompt.find("<SYSTEM_BEHAVIOR>").expect("system");
        let world = prompt.find("<WORLD_CONTEXT>").expect("world");
        let state = prompt.find("<GAME_STATE>").expect("state");
        let action = prompt.find("<PLAYER_ACTION>").expect("action");
        assert!(system < world && world < state && state < action);
    }

    #[test]
    fn state_and_action_are_wrapped_verbatim() {
        let prompt = compose_turn_prompt(
            &templates(),
            &GameState::new("player:\n  name: \"Cipher\""),
            &PlayerAction::new("Hack the depot").expect("valid action"),
        );

        assert!(prompt.contains("<GAME_STATE>\nplayer:\n  name: \"Cipher\"\n</GAME_STATE>"));
        assert!(prompt.contains(
            "The player takes the following action:\n<PLAYER_ACTION>\nHack the depot\n</PLAYER_ACTION>"
        ));
        assert!(prompt.starts_with("<SYSTEM_BEHAVIOR>rules</SYSTEM_BEHAVIOR>\n\n<WORLD_CONTEXT>"));
    }
}
