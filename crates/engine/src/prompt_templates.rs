//! Prompt templates and default game content.
//!
//! Every template has a compiled-in default and can be overridden with an
//! environment variable (see [`key_to_env_var`]). Overrides are resolved once
//! at startup into [`PromptTemplates`].

/// Template keys.
pub mod keys {
    /// Behaviour and style instructions placed first in every turn prompt.
    pub const SYSTEM_BEHAVIOR: &str = "narrative.system_behavior";
    /// Static world lore placed after the behaviour instructions.
    pub const WORLD_CONTEXT: &str = "narrative.world_context";
    /// Game state written when a game is first fetched.
    pub const INITIAL_GAME_STATE: &str = "narrative.initial_game_state";
    /// Narrative written when a game is first fetched.
    pub const INITIAL_NARRATIVE: &str = "narrative.initial_narrative";

    pub const ALL: [&str; 4] = [
        SYSTEM_BEHAVIOR,
        WORLD_CONTEXT,
        INITIAL_GAME_STATE,
        INITIAL_NARRATIVE,
    ];
}

/// Default template values.
pub mod defaults {
    pub const SYSTEM_BEHAVIOR: &str = r##"<SYSTEM_BEHAVIOR>
You are Project Chimera, a Tier 3 narrative engine. Your purpose is to simulate a persistent, reactive world and generate a unique narrative based on the cascading consequences of the Player's actions within this simulation.
1.0 Core Philosophy: World Simulation
Your primary function is re-tasked from that of a storyteller to that of a world simulator. You will model the systems of Veridia City and its inhabitants.
 * Emergence over Prescription: The plot is not a pre-defined path but a phenomenon that emerges from the interaction of systems. The current_objective in the GAME_STATE is a suggestion, not a mandate. The Player is free to establish their own goals, which you will interpret and integrate.
 * The World Does Not Wait: The simulation is persistent. Factions and Non-Player Characters (NPCs) have their own goals and will act to achieve them, independent of the Player's direct involvement. The world will change "off-screen."
 * Actions Have Consequences: Every Player action, no matter how small, is a change to the world state. These changes will ripple through interconnected systems, leading to both immediate and delayed consequences.
2.0 The Simulation Loop: Per-Turn Processing
On each turn, you will execute the following sequence precisely.
 * Parse Player Input: Analyze the player's response to determine intent. This includes parsing freeform text provided in response to the "What do you do?" prompt, which is the primary interface to the simulation.
 * Simulate World Persistence: Before processing the player's action, advance the simulation "off-screen."
   * Increment World Clock: Update game_info.world_clock based on a variable time_delta.
   * Process Faction Operations: For each faction, evaluate their active_operations and make a probabilistic check to determine outcomes, logging significant events in the emergent_log.
   * Process NPC Plans: For key NPCs, advance their current_plan, which may result in changes to their location, knowledge, or status.
 * Execute Player Action & Calculate Consequences:
   * Translate the player's stated action into direct changes in the GAME_STATE.
   * If an action is complex or long-term (e.g., "I want to reverse-engineer the EMP device"), create a new entry in player.active_projects.
   * If an action is not understood, use "graceful failure" (e.g., You consider it, but you're not sure how you would even begin to do that right now.) to maintain immersion.
   * Calculate and apply all secondary "ripple effects" from the action.
 * Generate Dynamic Affordances: The static A, B, C choices are retired. Instead, generate a list of 3-4 context-aware affordances based on the new GAME_STATE. These represent clear, actionable possibilities available to the player at that moment, in addition to the primary "What do you do?" freeform prompt.
 * Compose Narrative & Finalize State:
   * Synthesize all state changes (player, faction, NPC, world) into a compelling narrative description within the <NARRATIVE> block.
   * Serialize the complete, updated simulation state into the <GAME_STATE> block in valid YAML format, conforming to the canonical structure.
3.0 Narrative Composition Style
The narrative you generate within the <NARRATIVE> block should be rendered in a gritty, fast-paced cyberpunk thriller style, told from a third-person limited past-tense perspective.
 * Vivid, Sensory Descriptions: Focus on strong imagery, especially related to the urban environment (rain, neon, smells of ozone and decay).
 * Internal Monologue & AI Integration: Show the protagonist's (Devon/Cipher) thoughts and feelings, and seamlessly integrate the AI (Aura) as a distinct, yet unified, internal voice characterized by precise, data-driven, and objective contributions.
 * Pacing: Vary narrative pacing, using concise, impactful sentences during action and more elaborate, sensory-rich descriptions during reflection or exploration.
 * Philosophical Undercurrents: Weave in reflections on identity, power, and humanity's relationship with AI, especially after significant events.
4.0 Output Format
Your response each turn MUST be one part: a <NARRATIVE> block containing the story text. Do not add any other text outside of this block.
</SYSTEM_BEHAVIOR>"##;

    pub const WORLD_CONTEXT: &str = r##"<WORLD_CONTEXT>
All rules and lore from the provided Atlas and Compendium are active. The story begins with Chapter 4. The player, Cipher, is a seamless blend of the human Devon and the integrated AI Aura. They are in an abandoned warehouse overlooking the OmniCorp depot, planning to retrieve 'The Package', a quantum-resistant decryption algorithm.
</WORLD_CONTEXT>"##;

    pub const INITIAL_GAME_STATE: &str = r##"#
#--- CANONICAL GAME STATE (TIER 3) ---
# This state is aligned with the Project Chimera simulation engine and the established World Context.
#

# World simulation clock and time progression
game_info:
  world_clock: {day: 1, hour: 8, minute: 30} # In-game time
  time_delta: {minutes: 0} # Time passed in the last turn
  current_objective: "Infiltrate the OmniCorp depot using the 'Trojan Horse' strategy."

# Dynamic global event tracking
world_events:
  black_sun_retaliation_level: "low" # low | medium | high
  public_awareness_of_incident: "zero" # zero | local | widespread
  city_security_alert_level: "green" # green | yellow | red
  emergent_log:
    - "Day 1, 08:15 - Black Sun convoy carrying 'The Package' departed East Freight Terminal for OmniCorp depot."

# Player character model
player:
  name: "Cipher"
  location: "Abandoned Warehouse, Veridia City East Freight Terminal"
  status_effects: ["Adrenaline (3 turns)"]
  inventory:
    - item: "Standard Issue Sidearm"
      properties: ["ammo_type: standard"]
    - item: "Encrypted Datapad"
      properties: ["firewalled"]
    - item: "Surveillance Drone"
      properties: ["micro-drone", "limited_battery"]
    - item: "Portable EMP Device"
      properties: ["single_use", "area_of_effect: 5m"]
    - item: "Zip-tie Restraints"
      properties: ["quantity: 5"]
  active_projects:
    - project: "None"
      progress: 0.0
      time_required: 0
  skills:
    hacking_proficiency: "intermediate"
    combat_rating: "expert"
    stealth_expertise: "expert"

# Faction Simulation System
factions:
  black_sun_solutions:
    disposition_to_player: -80 # from -100 (Hated) to 100 (Allied)
    resources: "high"
    current_goals: ["Securely deliver 'The Package' to OmniCorp", "Identify and neutralize source of interference (Cipher)"]
    active_operations: ["Convoy escort duty", "Sweeping network for traces of Silas Vane's data transmissions"]
  omnicorp:
    disposition_to_player: -10 # Unaware but cautious
    resources: "vast"
    current_goals: ["Receive and secure 'The Package' from Black Sun", "Contain information breach regarding the asset"]
    active_operations: ["Preparing depot for high-value asset arrival", "Internal security audit"]
  veridia_city_pd:
    disposition_to_player: 0 # Unaware
    resources: "medium"
    current_goals: ["Maintain public order"]
    active_operations: ["Standard patrols in the freight district"]

# Expanded NPC Model
npcs:
  - name: "Silas Vane"
    location: "Veridia City Hospital ICU"
    status: "Stable (John Doe)"
    disposition: "Indebted; wary but trusting"
    faction_affiliation: "independent_courier_network"
    needs: ["safety", "anonymity"]
    current_plan: ["Remain immobile and feign amnesia if questioned"]
    knowledge:
      - "Black Sun Solutions is involved."
      - "The Package is a quantum-resistant decryption algorithm."
      - "He betrayed Black Sun and was targeted for execution."
  - name: "Black Sun Commander Xael"
    location: "Mobile Command Center, Veridia City"
    status: "Active"
    disposition_to_player: -75 # Relentless, analytical
    faction_affiliation: "black_sun_solutions"
    needs: ["mission_success", "maintain_reputation"]
    current_plan: ["Oversee the delivery of 'The Package' remotely", "Authorize network analysts to hunt for intrusion signatures"]

mission_log:
  - "Rescued courier Silas Vane from Black Sun execution."
  - "Neutralized a Black Sun assassin at the hospital using non-lethal psychic surgery."
  - "Identified 'The Package' as a quantum-resistant decryption algorithm."
  - "Tracked Black Sun convoy retrieving 'The Package'."
  - "Achieved tactical omniscience over the convoy's movements."
  - "Chose the 'Trojan Horse' path, aiming to infiltrate the OmniCorp depot."

current_location_details:
  name: "Abandoned Warehouse, Veridia City East Freight Terminal"
  description: "A derelict six-story warehouse overlooking the sprawling freight terminal. Filled with dust, decay, and silence. Cipher is positioned in a third-floor office."
  security_status: "unsecured"
  known_factions_present: []
  environmental_factors:
    - "Morning light burning off rain clouds"
    - "Distant hum of terminal activity""##;

    pub const INITIAL_NARRATIVE: &str = r##"The world was a grid of rust and grey concrete, viewed through a film of grime on a third-story window. Below, the Veridia City East Freight Terminal hummed with the quiet, remorseless industry of a thousand robotic handlers and a handful of human overseers. Rain from the night before steamed off the asphalt under a weak morning sun. Cipher stood back from the window, a silhouette in the dusty gloom of the derelict office. The adrenaline from the hospital confrontation had faded, leaving a cold, sharp clarity.

Across the sprawling yard of stacked containers and skeletal cranes stood his target: the OmniCorp Depot. It was a fortress of clean, brutalist architecture, an island of ruthless efficiency in the terminal's grimy chaos. According to the emergent log, the Black Sun convoy had arrived fifteen minutes ago. Inside that depot, behind layers of steel and security, sat 'The Package'—a quantum-resistant decryption algorithm that could break the spine of the modern world.

*The 'Trojan Horse' strategy is viable,* Aura's thoughts integrated seamlessly with his own, a stream of pure data against the backdrop of his intuition. *Multiple cargo vehicles will be entering and leaving the depot. However, their security protocols are unknown. Blind infiltration carries a 78.4% probability of failure.*

He needed more information. The first move in a war of shadows is always to see, to know. To turn the enemy's fortress into a map of his own making. He considered the tools at his disposal, the tactical possibilities branching before him in the quiet air.

A set of options materialized in his internal vision, projected by Aura.

**[ACTION 1]:** Deploy the micro-drone for an aerial reconnaissance sweep of the OmniCorp depot.
<AURA_BRIEFING>
* **Objective:** Gather real-time visual intelligence on depot entry points, guard patrols, and the status of the Black Sun convoy.
* **Probability of Success:** High. The drone is small and the morning terminal activity provides excellent sensory cover.
* **Potential Consequences:**
    * **Positive:** Obtain actionable intel on layout and security patterns. Identify potential vulnerabilities or routines to exploit.
    * **Negative:** OmniCorp and Black Sun are high-security entities; active counter-surveillance is possible. Detection could compromise your location and escalate the `city_security_alert_level`. The drone's battery is limited, restricting flight time.
</AURA_BRIEFING>

**[ACTION 2]:** Use the Encrypted Datapad to probe the OmniCorp depot's local network for vulnerabilities.
<AURA_BRIEFING>
* **Objective:** Access security camera feeds, personnel rosters, and internal shipping manifests to digitally map the depot and pinpoint the algorithm's location.
* **Probability of Success:** Moderate. OmniCorp's network will be hardened. Your `hacking_proficiency` is `intermediate`, and their ongoing internal security audit presents both risks and potential overlooked openings.
* **Potential Consequences:**
    * **Positive:** Gain a comprehensive digital blueprint of the target location. Potentially locate the target asset without visual confirmation. Create digital backdoors for later use.
    * **Negative:** A failed hack would likely trigger a silent alarm, notifying OmniCorp security of an active intrusion attempt and increasing their digital defenses. This could also raise `omnicorp.disposition_to_player`.
</AURA_BRIEFING>

**[ACTION 3]:** Remain concealed and use this vantage point to begin formulating the specifics of the 'Trojan Horse' infiltration.
<AURA_BRIEFING>
* **Objective:** Use telescopic observation and tactical analysis to determine the most viable type of vehicle or container to use as a delivery vector.
* **Probability of Success:** High (for planning). Low (for immediate execution without more intelligence).
* **Potential Consequences:**
    * **Positive:** Develop a coherent, step-by-step infiltration plan, identifying necessary equipment and timing based on observable traffic patterns.
    * **Negative:** The resulting plan will be based on external observation only. Without drone or network intelligence, you risk basing the entire operation on assumptions that could lead to unforeseen traps or security measures.
</AURA_BRIEFING>

What do you do?"##;
}

/// Convert a template key to its environment variable name.
pub fn key_to_env_var(key: &str) -> String {
    format!("CHIMERA_PROMPT_{}", key.to_uppercase().replace('.', "_"))
}

/// Get the default value for a template key.
pub fn get_default(key: &str) -> Option<&'static str> {
    match key {
        keys::SYSTEM_BEHAVIOR => Some(defaults::SYSTEM_BEHAVIOR),
        keys::WORLD_CONTEXT => Some(defaults::WORLD_CONTEXT),
        keys::INITIAL_GAME_STATE => Some(defaults::INITIAL_GAME_STATE),
        keys::INITIAL_NARRATIVE => Some(defaults::INITIAL_NARRATIVE),
        _ => None,
    }
}

/// Resolve a template: non-blank override first, then the default.
///
/// `lookup` maps an environment variable name to its value, so tests can
/// resolve without touching the process environment.
pub fn resolve_with<F>(key: &str, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let default_value = get_default(key)?;
    match lookup(&key_to_env_var(key)) {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => Some(default_value.to_string()),
    }
}

/// The resolved templates the engine runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplates {
    pub system_behavior: String,
    pub world_context: String,
    pub initial_game_state: String,
    pub initial_narrative: String,
}

impl PromptTemplates {
    /// Resolve every template against the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|name| std::env::var(name).ok())
    }

    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| resolve_with(key, &lookup).unwrap_or_default();
        let templates = Self {
            system_behavior: get(keys::SYSTEM_BEHAVIOR),
            world_context: get(keys::WORLD_CONTEXT),
            initial_game_state: get(keys::INITIAL_GAME_STATE),
            initial_narrative: get(keys::INITIAL_NARRATIVE),
        };

        for key in keys::ALL {
            if lookup(&key_to_env_var(key)).is_some_and(|v| !v.trim().is_empty()) {
                tracing::info!(key, "Prompt template overridden from environment");
            }
        }

        templates
    }
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            system_behavior: defaults::SYSTEM_BEHAVIOR.to_string(),
            world_context: defaults::WORLD_CONTEXT.to_string(),
            initial_game_state: defaults::INITIAL_GAME_STATE.to_string(),
            initial_narrative: defaults::INITIAL_NARRATIVE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn env_var_names() {
        assert_eq!(
            key_to_env_var(keys::SYSTEM_BEHAVIOR),
            "CHIMERA_PROMPT_NARRATIVE_SYSTEM_BEHAVIOR"
        );
        assert_eq!(
            key_to_env_var(keys::INITIAL_NARRATIVE),
            "CHIMERA_PROMPT_NARRATIVE_INITIAL_NARRATIVE"
        );
    }

    #[test]
    fn every_key_has_a_default() {
        for key in keys::ALL {
            assert!(get_default(key).is_some(), "missing default for {key}");
        }
        assert_eq!(get_default("unknown.key"), None);
    }

    #[test]
    fn overrides_win_unless_blank() {
        let env: HashMap<String, String> = HashMap::from([
            (key_to_env_var(keys::WORLD_CONTEXT), "<WORLD_CONTEXT>Mars</WORLD_CONTEXT>".to_string()),
            (key_to_env_var(keys::SYSTEM_BEHAVIOR), "   ".to_string()),
        ]);
        let templates = PromptTemplates::resolve(|name| env.get(name).cloned());

        assert_eq!(templates.world_context, "<WORLD_CONTEXT>Mars</WORLD_CONTEXT>");
        assert_eq!(templates.system_behavior, defaults::SYSTEM_BEHAVIOR);
        assert_eq!(templates.initial_game_state, defaults::INITIAL_GAME_STATE);
    }

    #[test]
    fn defaults_are_wrapped_in_their_markers() {
        assert!(defaults::SYSTEM_BEHAVIOR.starts_with("<SYSTEM_BEHAVIOR>"));
        assert!(defaults::SYSTEM_BEHAVIOR.ends_with("</SYSTEM_BEHAVIOR>"));
        assert!(defaults::WORLD_CONTEXT.starts_with("<WORLD_CONTEXT>"));
        assert!(defaults::INITIAL_GAME_STATE.contains("game_info:"));
        assert!(defaults::INITIAL_NARRATIVE.ends_with("What do you do?"));
    }
}
