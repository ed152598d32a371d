use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use crate::cards::normalize_glyphs;
use crate::rules::ValidatedAction;

/// Represents a betting street in Texas Hold'em poker, plus the terminal
/// showdown phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
    /// Remaining hands compared
    Showdown,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Preflop => "Pre-Flop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
            Street::Showdown => "Showdown",
        };
        f.write_str(s)
    }
}

/// Records a single betting action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: String,
    /// The betting street when this action occurred
    pub street: Street,
    pub action: ValidatedAction,
    /// Net chips moved into the pot
    pub amount: u32,
    /// Acting player's hand as it stood when they acted
    pub hand: String,
}

impl ActionRecord {
    fn line(&self, with_hand: bool) -> String {
        let mut line = match self.action {
            ValidatedAction::Fold | ValidatedAction::Check | ValidatedAction::StillAllIn => {
                format!("{} {}", self.player, self.action.kind())
            }
            _ => format!("{} {} {}", self.player, self.action.kind(), self.amount),
        };
        if with_hand && !self.hand.is_empty() {
            line.push_str(&format!(" [{}]", self.hand));
        }
        line
    }
}

/// Showdown result for one participant.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub player: String,
    pub won: bool,
    pub amount: u32,
    pub hand: Option<String>,
}

/// Oldest feed lines are dropped beyond this many.
pub const MAX_MESSAGES: usize = 500;

/// History of one hand's betting plus the match-long message feed.
///
/// Actions, pot and outcomes belong to the current hand and are cleared by
/// [`ActionLog::clear_hand`]; messages survive across hands.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    actions: Vec<ActionRecord>,
    outcomes: Vec<OutcomeRecord>,
    messages: VecDeque<String>,
    /// Messages ever added, including evicted ones
    total_messages: usize,
    pot: u32,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_action(
        &mut self,
        player: &str,
        street: Street,
        action: ValidatedAction,
        hand: impl Into<String>,
    ) {
        self.actions.push(ActionRecord {
            player: player.to_string(),
            street,
            action,
            amount: action.chips(),
            hand: hand.into(),
        });
    }

    pub fn add_message(&mut self, message: impl Into<String>) {
        if self.messages.len() == MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(message.into());
        self.total_messages += 1;
    }

    pub fn add_to_pot(&mut self, amount: u32) {
        self.pot += amount;
    }

    /// Empties the committed pot, returning what it held.
    pub fn take_pot(&mut self) -> u32 {
        std::mem::take(&mut self.pot)
    }

    pub fn add_winner(&mut self, player: &str, amount: u32, hand: Option<String>) {
        self.outcomes.push(OutcomeRecord {
            player: player.to_string(),
            won: true,
            amount,
            hand,
        });
    }

    pub fn add_loser(&mut self, player: &str, hand: Option<String>) {
        self.outcomes.push(OutcomeRecord {
            player: player.to_string(),
            won: false,
            amount: 0,
            hand,
        });
    }

    pub fn clear_hand(&mut self) {
        self.actions.clear();
        self.outcomes.clear();
        self.pot = 0;
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }
    pub fn outcomes(&self) -> &[OutcomeRecord] {
        &self.outcomes
    }
    pub fn messages(&self) -> impl Iterator<Item = &String> {
        self.messages.iter()
    }
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Messages added after the first `seen` ever added, plus the new total
    /// to pass next time. Lines already evicted from the feed are skipped.
    pub fn messages_since(&self, seen: usize) -> (Vec<String>, usize) {
        let evicted = self.total_messages - self.messages.len();
        let skip = seen.saturating_sub(evicted);
        let fresh = self.messages.iter().skip(skip).cloned().collect();
        (fresh, self.total_messages)
    }

    /// One line per action, e.g. `Alice raise 20`.
    pub fn summary_lines(&self) -> Vec<String> {
        self.actions.iter().map(|a| a.line(false)).collect()
    }

    /// Transcript for a decision prompt. Suits are ASCII letters, only the
    /// viewer's own hand descriptions are included, and the oldest lines are
    /// dropped until the text fits in `max_len` characters.
    pub fn action_history_string(&self, viewer: &str, max_len: usize) -> String {
        let mut lines: VecDeque<String> = VecDeque::new();
        let mut street = None;
        for record in &self.actions {
            if street != Some(record.street) {
                street = Some(record.street);
                lines.push_back(format!("-- {} --", record.street));
            }
            lines.push_back(normalize_glyphs(&record.line(record.player == viewer)));
        }

        let mut len: usize = lines.iter().map(|l| l.chars().count() + 1).sum();
        while len > max_len {
            match lines.pop_front() {
                Some(dropped) => len -= dropped.chars().count() + 1,
                None => break,
            }
        }
        lines.into_iter().collect::<Vec<_>>().join("\n")
    }
}
