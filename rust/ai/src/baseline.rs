//! Rule-based collaborator.
//!
//! Reads the `State:` line of a decision prompt and answers in the same JSON
//! shape a language model is asked for. Decisions are deterministic: a
//! preflop chart, made-hand category after the flop, and pot odds when facing
//! a bet.

use async_trait::async_trait;
use cardroom_engine::cards::Card;
use cardroom_engine::hand::{evaluate_hand, Category};
use cardroom_engine::logger::Street;
use cardroom_engine::player::PlayerAction;
use cardroom_engine::prompt::{parse_state_line, PromptState};
use serde_json::json;

use crate::collaborator::{Collaborator, CollaboratorError};

/// Deterministic stand-in for a remote model.
///
/// # Strategy
///
/// **Preflop:**
/// - Strong hands (high pairs 77+, AK, AQ): Raise or call
/// - Medium hands (suited connectors, Ax, small pairs): Call if cheap
/// - Weak hands: Fold to raises, check if free
///
/// **Postflop:**
/// - Strong hands (Two Pair+): Bet or call
/// - Medium hands (One Pair): Check or call small bets
/// - Draws and weak hands: Calculate pot odds, fold if unfavorable
#[derive(Debug, Clone, Default)]
pub struct BaselineCollaborator;

impl BaselineCollaborator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate preflop hand strength on a scale of 0-10.
    ///
    /// - 9-10: Premium hands (AA, KK, QQ, JJ, AKs)
    /// - 7-8: Strong hands (TT-99, AK, AQ, KQ)
    /// - 5-6: Medium hands (88-77, AJ, suited connectors)
    /// - 3-4: Marginal hands (66-22, Ax, suited cards)
    /// - 0-2: Weak hands (offsuit low cards)
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        let r1 = hole[0].rank as u8;
        let r2 = hole[1].rank as u8;
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit == hole[1].suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if r1 == r2 {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            // broadway
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Made-hand strength on the same 0-10 scale; `None` before the flop.
    fn postflop_strength(hole: [Card; 2], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);
        let strength = evaluate_hand(&cards);

        let base = match strength.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush => 10,
        };
        let kicker_boost = u8::from(strength.kickers[0] >= 12);
        Some((base + kicker_boost).min(10))
    }

    fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }

    /// Picks an action for the seat described by `state`.
    pub fn decide(state: &PromptState) -> PlayerAction {
        let hole = match state.hand.as_slice() {
            [a, b] => [*a, *b],
            _ => {
                return if state.to_call == 0 {
                    PlayerAction::Check
                } else {
                    PlayerAction::Fold
                };
            }
        };
        let strength = match state.street {
            Street::Preflop => Self::preflop_strength(hole),
            _ => Self::postflop_strength(hole, &state.board)
                .unwrap_or_else(|| Self::preflop_strength(hole)),
        };
        Self::choose(strength, state.to_call, state.min_raise.max(1), state.stack, state.pot)
    }

    fn choose(strength: u8, to_call: u32, min_raise: u32, stack: u32, pot: u32) -> PlayerAction {
        if to_call == 0 {
            return match strength {
                9..=10 if stack >= min_raise => {
                    PlayerAction::Raise((pot * 2 / 3).max(min_raise).min(stack))
                }
                7..=8 if stack >= min_raise => PlayerAction::Raise((pot / 2).max(min_raise).min(stack)),
                _ => PlayerAction::Check,
            };
        }

        // can't cover the call: shove strong hands, otherwise give up
        if to_call >= stack {
            return if strength >= 7 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            };
        }

        let odds = Self::pot_odds(pot, to_call);
        match strength {
            9..=10 => {
                let room = stack - to_call;
                let raise = (pot / 2).max(min_raise).min(room);
                if raise >= min_raise {
                    PlayerAction::Raise(raise)
                } else {
                    PlayerAction::Call
                }
            }
            7..=8 => PlayerAction::Call,
            5..=6 if odds >= 0.3 || to_call <= pot / 4 => PlayerAction::Call,
            3..=4 if odds >= 0.4 || to_call <= pot / 6 => PlayerAction::Call,
            _ => PlayerAction::Fold,
        }
    }
}

/// Reply text in the format the decision prompt asks for.
pub fn reply_for(action: PlayerAction) -> String {
    let value = match action {
        PlayerAction::Fold => json!({"action": "fold", "amount": 0}),
        PlayerAction::Check => json!({"action": "check", "amount": 0}),
        PlayerAction::Call => json!({"action": "call", "amount": 0}),
        PlayerAction::Raise(n) => json!({"action": "raise", "amount": n}),
    };
    value.to_string()
}

#[async_trait]
impl Collaborator for BaselineCollaborator {
    async fn complete(&self, prompt: &str) -> Result<String, CollaboratorError> {
        let state = parse_state_line(prompt)
            .ok_or_else(|| CollaboratorError::Parse("prompt has no State line".into()))?;
        let action = Self::decide(&state);
        tracing::debug!(player = %state.player, ?action, "baseline decision");
        Ok(reply_for(action))
    }

    fn name(&self) -> &str {
        "BaselineCollaborator"
    }
}
