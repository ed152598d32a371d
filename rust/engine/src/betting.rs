//! Turn-order state machine for one street of betting.
//!
//! A [`BettingRound`] does not own any [`Player`]; the game passes its seat
//! list into every call. Seats are referred to by index into that list, and
//! the list must not be reordered while a round is live.

use tokio::sync::oneshot;

use crate::cards::format_cards;
use crate::errors::GameError;
use crate::logger::{ActionLog, Street};
use crate::player::{Player, PlayerAction};
use crate::rules::{resolve_action, ValidatedAction};

/// Resolves once, with the round pot, when the round completes.
pub type RoundFinish = oneshot::Receiver<u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    AwaitingAction(usize),
    Complete,
}

#[derive(Debug)]
pub struct BettingRound {
    street: Street,
    /// Seats dealt into this street, in acting order
    order: Vec<usize>,
    current_bet: u32,
    cursor: Option<usize>,
    actions: usize,
    min_actions: usize,
    pot: u32,
    finish: Option<oneshot::Sender<u32>>,
}

impl BettingRound {
    /// Opens a street. `order` lists the seats still in the hand, starting
    /// with the first seat left of the dealer. With `blind` set, the first two
    /// seats post it before anyone is asked to act.
    pub fn new(
        street: Street,
        order: Vec<usize>,
        blind: Option<u32>,
        players: &mut [Player],
        log: &mut ActionLog,
    ) -> (Self, RoundFinish) {
        let (tx, rx) = oneshot::channel();
        let order: Vec<usize> = order
            .into_iter()
            .filter(|&seat| !players[seat].has_folded())
            .collect();
        for &seat in &order {
            players[seat].reset_for_street();
        }

        let min_actions = order.iter().filter(|&&s| players[s].can_act()).count();
        let mut round = Self {
            street,
            order,
            current_bet: 0,
            cursor: None,
            actions: 0,
            min_actions,
            pot: 0,
            finish: Some(tx),
        };

        match blind {
            Some(amount) if round.order.len() >= 2 => round.post_blinds(amount, players, log),
            _ => round.cursor = round.order.first().copied(),
        }
        if round.cursor.is_some_and(|seat| !players[seat].can_act()) {
            round.cursor = round.next_actor_after(round.cursor, players);
        }

        if round.nobody_can_bet(players) {
            tracing::debug!(street = ?street, "no seat can act, round closes immediately");
            round.complete(log);
        }
        (round, rx)
    }

    fn post_blinds(&mut self, amount: u32, players: &mut [Player], log: &mut ActionLog) {
        let blinds = [self.order[0], self.order[1]];
        for seat in blinds {
            let player = &mut players[seat];
            let posted = ValidatedAction::Raise(amount.min(player.stack()));
            player.apply_action(&posted);
            self.pot += posted.chips();
            self.current_bet = self.current_bet.max(player.current_bet());
            log.add_action(player.name(), self.street, posted, format_cards(player.hand()));
            log.add_message(format!("{} posts blind {}", player.name(), posted.chips()));
        }
        self.actions = 2;
        self.cursor = self.next_actor_after(Some(blinds[1]), players);
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn actions_taken(&self) -> usize {
        self.actions
    }
    pub fn is_complete(&self) -> bool {
        self.finish.is_none()
    }

    /// Seat whose turn it is, `None` once the round is complete.
    pub fn current_actor(&self) -> Option<usize> {
        if self.is_complete() {
            None
        } else {
            self.cursor
        }
    }

    /// Chips the seat must add to match the table bet.
    pub fn owed(&self, player: &Player) -> u32 {
        self.current_bet.saturating_sub(player.current_bet())
    }

    /// Applies `action` for `name` if and only if it is that seat's turn.
    pub fn process_action(
        &mut self,
        name: &str,
        action: PlayerAction,
        players: &mut [Player],
        log: &mut ActionLog,
        hand_desc: impl FnOnce(&Player) -> String,
    ) -> Result<RoundStatus, GameError> {
        let seat = self.current_actor().ok_or(GameError::RoundAlreadyComplete)?;
        if players[seat].name() != name {
            return Err(GameError::InvalidActor {
                expected: players[seat].name().to_string(),
                actual: name.to_string(),
            });
        }

        let player = &mut players[seat];
        let owed = self.current_bet.saturating_sub(player.current_bet());
        let resolved = resolve_action(player.stack(), owed, action);
        log.add_action(player.name(), self.street, resolved, hand_desc(player));

        player.apply_action(&resolved);
        self.pot += resolved.chips();
        self.current_bet = self.current_bet.max(player.current_bet());
        log.add_message(describe(player, &resolved, self.current_bet));
        tracing::debug!(
            player = %name,
            requested = ?action,
            resolved = ?resolved,
            table_bet = self.current_bet,
            round_pot = self.pot,
            "action processed"
        );
        self.actions += 1;

        if self.is_round_over(players) {
            self.complete(log);
            Ok(RoundStatus::Complete)
        } else {
            self.cursor = self.next_actor_after(Some(seat), players);
            match self.cursor {
                Some(next) => Ok(RoundStatus::AwaitingAction(next)),
                None => {
                    // everyone left is all-in
                    self.complete(log);
                    Ok(RoundStatus::Complete)
                }
            }
        }
    }

    /// Next seat in round order after `from` that can still act.
    fn next_actor_after(&self, from: Option<usize>, players: &[Player]) -> Option<usize> {
        let n = self.order.len();
        let start = from
            .and_then(|seat| self.order.iter().position(|&s| s == seat))
            .map_or(0, |i| i + 1);
        (0..n)
            .map(|offset| self.order[(start + offset) % n])
            .find(|&seat| players[seat].can_act())
    }

    fn in_hand<'a>(&'a self, players: &'a [Player]) -> impl Iterator<Item = &'a Player> + 'a {
        self.order
            .iter()
            .map(move |&s| &players[s])
            .filter(|p| !p.has_folded())
    }

    fn is_round_over(&self, players: &[Player]) -> bool {
        if self.in_hand(players).count() <= 1 {
            return true;
        }
        let all_matched = self
            .in_hand(players)
            .filter(|p| p.stack() > 0)
            .all(|p| p.current_bet() == self.current_bet);
        all_matched && self.actions >= self.min_actions
    }

    fn nobody_can_bet(&self, players: &[Player]) -> bool {
        if self.in_hand(players).count() <= 1 {
            return true;
        }
        let mut actors = self.in_hand(players).filter(|p| p.stack() > 0);
        match (actors.next(), actors.next()) {
            (None, _) => true,
            (Some(only), None) => self.owed(only) == 0,
            _ => false,
        }
    }

    fn complete(&mut self, log: &mut ActionLog) {
        if let Some(tx) = self.finish.take() {
            log.add_to_pot(self.pot);
            tracing::info!(street = ?self.street, pot = self.pot, "betting round finished");
            // the driver may have stopped listening; the pot is already committed
            let _ = tx.send(self.pot);
        }
    }
}

fn describe(player: &Player, action: &ValidatedAction, table_bet: u32) -> String {
    let name = player.name();
    match *action {
        ValidatedAction::Fold => format!("{name} folds."),
        ValidatedAction::Check => format!("{name} checks."),
        ValidatedAction::Call(n) => format!("{name} calls {n}."),
        ValidatedAction::Raise(n) => format!("{name} raises {n}, total bet is now {table_bet}."),
        ValidatedAction::AllIn(n) => format!("{name} is all-in with {n}!"),
        ValidatedAction::StillAllIn => format!("{name} is already all-in."),
    }
}
