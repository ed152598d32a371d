use crate::player::PlayerAction as A;
use serde::{Deserialize, Serialize};

/// An action after it has been checked against the acting seat's stack.
/// Every chip amount is the net number of chips moving from stack to pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Raise(u32),
    /// Whole remaining stack; may or may not lift the table bet
    AllIn(u32),
    /// The seat is already all-in; nothing moves
    StillAllIn,
}

impl ValidatedAction {
    pub fn chips(&self) -> u32 {
        match *self {
            ValidatedAction::Call(n) | ValidatedAction::Raise(n) | ValidatedAction::AllIn(n) => n,
            _ => 0,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ValidatedAction::Fold => "fold",
            ValidatedAction::Check => "check",
            ValidatedAction::Call(_) => "call",
            ValidatedAction::Raise(_) => "raise",
            ValidatedAction::AllIn(_) => "all-in",
            ValidatedAction::StillAllIn => "all-in (no chips left)",
        }
    }
}

/// Resolves a requested action against the acting seat's stack and the amount
/// it owes to match the table bet.
///
/// Shortfalls are never errors: a call or raise the stack cannot cover becomes
/// an all-in for the whole stack, and a seat with nothing left gets the
/// [`ValidatedAction::StillAllIn`] marker.
///
/// # Examples
///
/// ```
/// use cardroom_engine::rules::{resolve_action, ValidatedAction};
/// use cardroom_engine::player::PlayerAction;
///
/// // Enough chips: pay what is owed plus the raise
/// assert_eq!(resolve_action(1000, 50, PlayerAction::Raise(100)), ValidatedAction::Raise(150));
///
/// // Raise capped at the remaining stack
/// assert_eq!(resolve_action(80, 50, PlayerAction::Raise(100)), ValidatedAction::AllIn(80));
///
/// // Can't cover the call
/// assert_eq!(resolve_action(30, 50, PlayerAction::Call), ValidatedAction::AllIn(30));
///
/// // Nothing owed: a call is a check
/// assert_eq!(resolve_action(500, 0, PlayerAction::Call), ValidatedAction::Check);
/// ```
pub fn resolve_action(stack: u32, owed: u32, action: A) -> ValidatedAction {
    match action {
        A::Fold => ValidatedAction::Fold,
        A::Check | A::Call => resolve_call(stack, owed),
        A::Raise(0) => resolve_call(stack, owed),
        A::Raise(amount) => {
            if stack == 0 {
                return ValidatedAction::StillAllIn;
            }
            let total = owed.saturating_add(amount);
            if stack <= total {
                ValidatedAction::AllIn(stack)
            } else {
                ValidatedAction::Raise(total)
            }
        }
    }
}

fn resolve_call(stack: u32, owed: u32) -> ValidatedAction {
    if owed == 0 {
        ValidatedAction::Check
    } else if stack == 0 {
        ValidatedAction::StillAllIn
    } else if stack <= owed {
        ValidatedAction::AllIn(stack)
    } else {
        ValidatedAction::Call(owed)
    }
}
