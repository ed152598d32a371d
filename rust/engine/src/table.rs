//! Async driver for a [`PokerGame`].
//!
//! The game sits behind a `std::sync::Mutex` that is only ever held for a
//! synchronous step; nothing awaits while holding it. Non-human seats are
//! asked through a [`SeatDecider`]. The human seat acts by calling
//! [`Table::process_action`] from any task, which wakes the driver.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::betting::RoundFinish;
use crate::errors::GameError;
use crate::game::{GameSnapshot, HandProgress, PokerGame, Step};
use crate::player::PlayerAction;
use crate::prompt::DecisionRequest;

/// Chooses an action for a non-human seat. Implementations must always
/// return an action; failures are handled on their side.
#[async_trait]
pub trait SeatDecider: Send + Sync {
    async fn decide(&self, request: DecisionRequest) -> PlayerAction;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Last seat standing
    Won(String),
    HumanEliminated,
    HandLimitReached,
}

pub struct Table<D> {
    game: Mutex<PokerGame>,
    decider: D,
    turn_changed: Notify,
    hand_pause: Duration,
}

impl<D: SeatDecider> Table<D> {
    pub fn new(game: PokerGame, decider: D) -> Self {
        Self {
            game: Mutex::new(game),
            decider,
            turn_changed: Notify::new(),
            hand_pause: Duration::ZERO,
        }
    }

    /// Sleep between hands so a watcher can follow the feed.
    pub fn with_hand_pause(mut self, pause: Duration) -> Self {
        self.hand_pause = pause;
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, PokerGame>, GameError> {
        self.game.lock().map_err(|_| GameError::StatePoisoned)
    }

    /// Human entry point. Returns `false`, changing nothing, when `name` is
    /// not the seat to act or no round is live.
    pub fn process_action(&self, name: &str, action: PlayerAction) -> bool {
        let result = match self.lock() {
            Ok(mut game) => game.process_action(name, action),
            Err(err) => Err(err),
        };
        match result {
            Ok(status) => {
                tracing::debug!(player = %name, ?action, ?status, "external action accepted");
                self.turn_changed.notify_one();
                true
            }
            Err(err) => {
                tracing::debug!(player = %name, ?action, %err, "external action ignored");
                false
            }
        }
    }

    pub fn snapshot(&self, viewer: Option<&str>) -> Result<GameSnapshot, GameError> {
        Ok(self.lock()?.snapshot(viewer))
    }

    /// Runs `f` against the game under the lock.
    pub fn with_game<R>(&self, f: impl FnOnce(&PokerGame) -> R) -> Result<R, GameError> {
        let game = self.lock()?;
        Ok(f(&game))
    }

    /// Plays hands until the human seat is out, one seat remains, or the hand
    /// limit is hit.
    pub async fn run_match(&self) -> Result<MatchOutcome, GameError> {
        loop {
            let finished = {
                let mut game = self.lock()?;
                if game.is_match_over() {
                    break;
                }
                game.start_hand()?
            };
            self.play_hand(finished).await?;

            let over = self.lock()?.is_match_over();
            if !over && !self.hand_pause.is_zero() {
                tokio::time::sleep(self.hand_pause).await;
            }
        }

        let game = self.lock()?;
        let outcome = match game.human() {
            Some(h) if game.player(h).is_none() => MatchOutcome::HumanEliminated,
            _ if game.players().len() == 1 => {
                MatchOutcome::Won(game.players()[0].name().to_string())
            }
            _ => MatchOutcome::HandLimitReached,
        };
        tracing::info!(?outcome, hands = game.hand_number(), "match finished");
        Ok(outcome)
    }

    async fn play_hand(&self, first: RoundFinish) -> Result<(), GameError> {
        let mut finished = first;
        loop {
            let pot = self.drive_round(finished).await?;
            tracing::debug!(pot, "round pot collected");
            let progress = self.lock()?.advance_street()?;
            match progress {
                HandProgress::NextStreet(next) => finished = next,
                HandProgress::Finished => return Ok(()),
            }
        }
    }

    /// Feeds actions into the live round until its completion signal fires.
    async fn drive_round(&self, mut finished: RoundFinish) -> Result<u32, GameError> {
        loop {
            let step = self.lock()?.next_step();
            match step {
                Step::Complete => {
                    return finished.await.map_err(|_| GameError::RoundAbandoned);
                }
                Step::Bot(request) => {
                    let name = request.player.clone();
                    let action = self.decider.decide(request).await;
                    let mut game = self.lock()?;
                    game.clear_thinking(&name);
                    if let Err(err) = game.process_action(&name, action) {
                        tracing::debug!(player = %name, %err, "decision no longer applicable");
                    }
                }
                Step::Human(name) => {
                    tracing::debug!(player = %name, "waiting for human action");
                    tokio::select! {
                        pot = &mut finished => {
                            return pot.map_err(|_| GameError::RoundAbandoned);
                        }
                        _ = self.turn_changed.notified() => {}
                    }
                }
            }
        }
    }
}
