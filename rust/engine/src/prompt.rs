//! Text handed to a non-human seat's decision collaborator.
//!
//! The prompt is plain ASCII: suit glyphs are replaced by their letters and
//! the action transcript is capped at [`MAX_HISTORY_CHARS`]. The last data
//! line, `State: {...}`, repeats the numbers as JSON so rule-based
//! collaborators need not parse prose.

use serde::{Deserialize, Serialize};

use crate::cards::{normalize_glyphs, Card};
use crate::logger::Street;

pub const MAX_HISTORY_CHARS: usize = 1_200;

const STATE_PREFIX: &str = "State: ";

/// Everything a seat decider needs for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionRequest {
    pub player: String,
    pub prompt: String,
    /// Chips owed to match the table bet
    pub to_call: u32,
    pub stack: u32,
    /// Smallest sensible raise increment (the blind)
    pub min_raise: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub name: String,
    pub stack: u32,
    pub current_bet: u32,
    pub folded: bool,
}

/// Machine-readable half of the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptState {
    pub player: String,
    pub street: Street,
    pub hand: Vec<Card>,
    pub board: Vec<Card>,
    pub pot: u32,
    pub to_call: u32,
    pub stack: u32,
    pub current_bet: u32,
    pub min_raise: u32,
    pub seats: Vec<SeatView>,
}

fn ascii_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards.iter().map(Card::ascii).collect::<Vec<_>>().join(" ")
}

pub fn render_prompt(state: &PromptState, history: &str) -> String {
    let opponents = state.seats.iter().filter(|s| s.name != state.player).count();
    let stacks = state
        .seats
        .iter()
        .map(|s| {
            let mut entry = format!("{} {}", s.name, s.stack);
            if s.folded {
                entry.push_str(" (folded)");
            }
            entry
        })
        .collect::<Vec<_>>()
        .join(", ");
    let state_json = serde_json::to_string(state).unwrap_or_else(|err| {
        tracing::warn!(player = %state.player, %err, "prompt state not serializable, sending empty state");
        "{}".to_string()
    });

    let mut text = String::new();
    text.push_str(&format!(
        "You are {}, playing No-Limit Texas Hold'em against {} opponents.\n",
        state.player, opponents
    ));
    text.push_str(&format!("Street: {}\n", state.street));
    text.push_str(&format!("Your hand: {}\n", ascii_cards(&state.hand)));
    text.push_str(&format!("Board: {}\n", ascii_cards(&state.board)));
    text.push_str(&format!("Pot: {}\n", state.pot));
    text.push_str(&format!("To call: {}\n", state.to_call));
    text.push_str(&format!("Your stack: {}\n", state.stack));
    text.push_str(&format!("Stacks: {stacks}\n"));
    text.push_str("Action so far:\n");
    if history.is_empty() {
        text.push_str("(none)\n");
    } else {
        text.push_str(history);
        text.push('\n');
    }
    text.push_str(STATE_PREFIX);
    text.push_str(&state_json);
    text.push('\n');
    text.push_str(
        "Reply with only a JSON object: {\"action\": \"call\" | \"raise\" | \"fold\", \"amount\": <integer>}. \
         For a raise, amount is the number of chips added on top of the call.",
    );
    normalize_glyphs(&text)
}

/// Recovers the `State:` line from a rendered prompt.
pub fn parse_state_line(prompt: &str) -> Option<PromptState> {
    prompt
        .lines()
        .find_map(|line| line.strip_prefix(STATE_PREFIX))
        .and_then(|json| serde_json::from_str(json).ok())
}
