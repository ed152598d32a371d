use crate::cards::Card;
use crate::rules::ValidatedAction;
use serde::{Deserialize, Serialize};

/// Represents an action a seat asks to take during a betting round.
/// Only a raise carries an amount: the increment above what the seat owes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "amount", rename_all = "lowercase")]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (a check facing a bet is treated as a call)
    Check,
    /// Match the current bet
    Call,
    /// Call and raise the table bet by the given amount
    Raise(u32),
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// Per-seat state. Stack carries across hands; everything else is reset by
/// [`Player::reset_for_next_hand`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    stack: u32,
    current_bet: u32,
    has_folded: bool,
    hand: Vec<Card>,
    /// Decision pending for this seat (presentation hint)
    thinking: bool,
    /// Hole cards shown to everyone (set at showdown)
    revealed: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        Self {
            name: name.into(),
            stack,
            current_bet: 0,
            has_folded: false,
            hand: Vec::with_capacity(2),
            thinking: false,
            revealed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn has_folded(&self) -> bool {
        self.has_folded
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn is_thinking(&self) -> bool {
        self.thinking
    }
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Still in the hand and able to put chips in.
    pub fn can_act(&self) -> bool {
        !self.has_folded && self.stack > 0
    }

    pub fn set_thinking(&mut self, thinking: bool) {
        self.thinking = thinking;
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn win(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Applies an already-resolved action. Chip amounts are the net chips the
    /// betting round computed; they are moved as given.
    pub fn apply_action(&mut self, action: &ValidatedAction) {
        if self.has_folded {
            tracing::warn!(player = %self.name, ?action, "ignoring action for folded player");
            return;
        }

        match *action {
            ValidatedAction::Fold => self.has_folded = true,
            ValidatedAction::Check | ValidatedAction::StillAllIn => {}
            ValidatedAction::Call(chips)
            | ValidatedAction::Raise(chips)
            | ValidatedAction::AllIn(chips) => {
                debug_assert!(chips <= self.stack, "resolved amount exceeds stack");
                let chips = chips.min(self.stack);
                self.stack -= chips;
                self.current_bet += chips;
            }
        }
    }

    pub fn reset_for_street(&mut self) {
        self.current_bet = 0;
    }

    pub fn reset_for_next_hand(&mut self) {
        self.current_bet = 0;
        self.has_folded = false;
        self.hand.clear();
        self.thinking = false;
        self.revealed = false;
    }
}
