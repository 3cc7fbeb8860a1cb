//! Tagged block extraction from model replies.
//!
//! The behaviour instructions ask the model for a `<NARRATIVE>` block and
//! describe a `<GAME_STATE>` block. Only the opt-in state persistence mode
//! reads them; by default the whole reply is the narrative.

use regex_lite::Regex;
use std::sync::LazyLock;

static NARRATIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<NARRATIVE>(.*?)</NARRATIVE>").expect("valid regex"));
static GAME_STATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<GAME_STATE>(.*?)</GAME_STATE>").expect("valid regex"));

/// Blocks found in a model reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTurnReply {
    pub narrative: Option<String>,
    pub game_state: Option<String>,
}

/// Trimmed bodies of the first `<NARRATIVE>` and `<GAME_STATE>` blocks.
/// Empty blocks count as missing.
pub fn parse_turn_reply(text: &str) -> ParsedTurnReply {
    ParsedTurnReply {
        narrative: capture(&NARRATIVE_RE, text),
        game_state: capture(&GAME_STATE_RE, text),
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_both_blocks() {
        let reply = "<NARRATIVE>\n  Rain fell.\n</NARRATIVE>\n<GAME_STATE>\nclock: 2\n</GAME_STATE>";
        let parsed = parse_turn_reply(reply);
        assert_eq!(parsed.narrative.as_deref(), Some("Rain fell."));
        assert_eq!(parsed.game_state.as_deref(), Some("clock: 2"));
    }

    #[test]
    fn missing_or_empty_blocks_are_none() {
        assert_eq!(parse_turn_reply("plain prose"), ParsedTurnReply::default());
        assert_eq!(parse_turn_reply("<GAME_STATE>  </GAME_STATE>").game_state, None);
    }

    #[test]
    fn first_block_wins() {
        let parsed = parse_turn_reply("<NARRATIVE>one</NARRATIVE><NARRATIVE>two</NARRATIVE>");
        assert_eq!(parsed.narrative.as_deref(), Some("one"));
    }

    #[test]
    fn unterminated_block_is_ignored() {
        assert_eq!(parse_turn_reply("<NARRATIVE>never closed").narrative, None);
    }
}
