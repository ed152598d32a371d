use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::betting::{BettingRound, RoundFinish, RoundStatus};
use crate::cards::{format_cards, Card};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::logger::{ActionLog, ActionRecord, Street};
use crate::player::{Player, PlayerAction, STARTING_STACK};
use crate::prompt::{render_prompt, DecisionRequest, PromptState, SeatView, MAX_HISTORY_CHARS};
use crate::showdown::{resolve, split_pot, Contender, HandEvaluator, StandardEvaluator};

pub const DEFAULT_BLIND: u32 = 5;

/// Table stakes and match limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub starting_stack: u32,
    pub blind: u32,
    /// Deck seed; `None` draws one from OS randomness
    pub seed: Option<u64>,
    /// Stop after this many hands even if several seats remain
    pub max_hands: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            blind: DEFAULT_BLIND,
            seed: None,
            max_hands: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.blind == 0 {
            return Err(GameError::InvalidConfig("blind must be positive".into()));
        }
        if self.starting_stack <= self.blind {
            return Err(GameError::InvalidConfig(format!(
                "starting stack {} must exceed the blind {}",
                self.starting_stack, self.blind
            )));
        }
        if self.max_hands == Some(0) {
            return Err(GameError::InvalidConfig("max_hands must be positive".into()));
        }
        Ok(())
    }
}

/// What the driver should do next in the current betting round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// No action pending; collect the round's completion signal
    Complete,
    /// A non-human seat must be asked for a decision
    Bot(DecisionRequest),
    /// Waiting on the human seat's entry point
    Human(String),
}

/// Result of moving past a finished betting round.
#[derive(Debug)]
pub enum HandProgress {
    NextStreet(RoundFinish),
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub stack: u32,
    pub current_bet: u32,
    pub folded: bool,
    pub hand: Vec<Card>,
    pub thinking: bool,
    pub revealed: bool,
    pub is_dealer: bool,
}

/// Read-only, serializable view of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub hand_number: u32,
    pub street: Street,
    pub players: Vec<PlayerView>,
    pub board: Vec<Card>,
    /// Committed hand pot plus chips in the live round
    pub pot: u32,
    pub current_bet: u32,
    pub current_actor: Option<String>,
    pub actions: Vec<ActionRecord>,
    pub messages: Vec<String>,
    pub win_message: Option<String>,
}

/// Sequences streets within a hand and hands within a match.
pub struct PokerGame {
    players: Vec<Player>,
    deck: Deck,
    board: Vec<Card>,
    street: Street,
    dealer_index: usize,
    round: Option<BettingRound>,
    log: ActionLog,
    blind: u32,
    human: Option<String>,
    hand_number: u32,
    max_hands: Option<u32>,
    win_message: Option<String>,
    match_over: bool,
    evaluator: Box<dyn HandEvaluator>,
}

impl std::fmt::Debug for PokerGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokerGame")
            .field("players", &self.players)
            .field("board", &self.board)
            .field("street", &self.street)
            .field("dealer_index", &self.dealer_index)
            .field("hand_number", &self.hand_number)
            .field("match_over", &self.match_over)
            .finish_non_exhaustive()
    }
}

impl PokerGame {
    /// Seats `names` in order with the first seat holding the button.
    /// `human`, when given, must be one of `names`; the match is lost as soon
    /// as that seat is eliminated.
    pub fn new<S: AsRef<str>>(
        names: &[S],
        human: Option<&str>,
        config: &GameConfig,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if names.len() < 2 {
            return Err(GameError::NotEnoughPlayers(names.len()));
        }
        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(name.as_ref()) {
                return Err(GameError::DuplicatePlayer(name.as_ref().to_string()));
            }
        }
        let total = u64::from(config.starting_stack) * names.len() as u64;
        if total > u64::from(u32::MAX) {
            return Err(GameError::InvalidConfig(format!(
                "{} seats of {} chips exceed the chip limit of {}",
                names.len(),
                config.starting_stack,
                u32::MAX
            )));
        }
        if let Some(h) = human {
            if !seen.contains(h) {
                return Err(GameError::UnknownPlayer(h.to_string()));
            }
        }

        let deck = match config.seed {
            Some(seed) => Deck::new_with_seed(seed),
            None => Deck::new(),
        };
        Ok(Self {
            players: names
                .iter()
                .map(|n| Player::new(n.as_ref(), config.starting_stack))
                .collect(),
            deck,
            board: Vec::with_capacity(5),
            street: Street::Preflop,
            dealer_index: 0,
            round: None,
            log: ActionLog::new(),
            blind: config.blind,
            human: human.map(str::to_string),
            hand_number: 0,
            max_hands: config.max_hands,
            win_message: None,
            match_over: false,
            evaluator: Box::new(StandardEvaluator),
        })
    }

    pub fn with_evaluator(mut self, evaluator: Box<dyn HandEvaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn dealer_index(&self) -> usize {
        self.dealer_index
    }
    pub fn log(&self) -> &ActionLog {
        &self.log
    }
    pub fn blind(&self) -> u32 {
        self.blind
    }
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }
    pub fn human(&self) -> Option<&str> {
        self.human.as_deref()
    }
    pub fn win_message(&self) -> Option<&str> {
        self.win_message.as_deref()
    }
    pub fn is_match_over(&self) -> bool {
        self.match_over
    }
    pub fn round(&self) -> Option<&BettingRound> {
        self.round.as_ref()
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Committed hand pot plus whatever the live round holds.
    pub fn pot(&self) -> u32 {
        let live = match &self.round {
            Some(r) if !r.is_complete() => r.pot(),
            _ => 0,
        };
        self.log.pot() + live
    }

    /// Every chip at the table: stacks plus pots.
    pub fn total_chips(&self) -> u32 {
        self.players.iter().map(Player::stack).sum::<u32>() + self.pot()
    }

    pub fn current_actor(&self) -> Option<&Player> {
        self.round
            .as_ref()
            .and_then(BettingRound::current_actor)
            .map(|seat| &self.players[seat])
    }

    /// Seats still in the hand, starting left of the button.
    fn hand_order(&self) -> Vec<usize> {
        let n = self.players.len();
        (1..=n)
            .map(|offset| (self.dealer_index + offset) % n)
            .filter(|&seat| !self.players[seat].has_folded())
            .collect()
    }

    fn in_hand_count(&self) -> usize {
        self.players.iter().filter(|p| !p.has_folded()).count()
    }

    /// Shuffles, deals two hole cards to each seat and opens the pre-flop
    /// round with blinds posted.
    pub fn start_hand(&mut self) -> Result<RoundFinish, GameError> {
        if self.match_over {
            return Err(GameError::MatchOver);
        }
        self.hand_number += 1;
        self.log.clear_hand();
        self.board.clear();
        self.street = Street::Preflop;
        self.deck.shuffle();
        for p in &mut self.players {
            p.reset_for_next_hand();
        }

        let order = self.hand_order();
        for _ in 0..2 {
            for &seat in &order {
                let card = self.deck.draw()?;
                self.players[seat].receive_card(card);
            }
        }
        tracing::info!(
            hand = self.hand_number,
            dealer = %self.players[self.dealer_index].name(),
            seats = self.players.len(),
            "hand started"
        );
        self.log.add_message(format!(
            "Hand #{} begins. {} has the button.",
            self.hand_number,
            self.players[self.dealer_index].name()
        ));
        if let Some(human) = self.human.as_deref().and_then(|h| self.player(h)) {
            self.log.add_message(format!(
                "You are dealt {}.",
                format_cards(human.hand())
            ));
        }

        let (round, finish) = BettingRound::new(
            Street::Preflop,
            order,
            Some(self.blind),
            &mut self.players,
            &mut self.log,
        );
        self.round = Some(round);
        Ok(finish)
    }

    /// Routes an action to the live betting round.
    pub fn process_action(
        &mut self,
        name: &str,
        action: PlayerAction,
    ) -> Result<RoundStatus, GameError> {
        let round = self.round.as_mut().ok_or(GameError::NoRoundInProgress)?;
        let status = round.process_action(name, action, &mut self.players, &mut self.log, |p| {
            format_cards(p.hand())
        })?;
        if let Some(p) = self.players.iter_mut().find(|p| p.name() == name) {
            p.set_thinking(false);
        }
        Ok(status)
    }

    /// Inspects the live round. A bot seat is marked as thinking and gets its
    /// decision request built.
    pub fn next_step(&mut self) -> Step {
        let Some(seat) = self.round.as_ref().and_then(BettingRound::current_actor) else {
            return Step::Complete;
        };
        let name = self.players[seat].name().to_string();
        if self.human.as_deref() == Some(name.as_str()) {
            return Step::Human(name);
        }
        self.players[seat].set_thinking(true);
        Step::Bot(self.decision_request(seat))
    }

    pub fn clear_thinking(&mut self, name: &str) {
        if let Some(p) = self.players.iter_mut().find(|p| p.name() == name) {
            p.set_thinking(false);
        }
    }

    pub fn decision_request(&self, seat: usize) -> DecisionRequest {
        let player = &self.players[seat];
        let (to_call, current_bet) = match &self.round {
            Some(r) => (r.owed(player), r.current_bet()),
            None => (0, 0),
        };
        let state = PromptState {
            player: player.name().to_string(),
            street: self.street,
            hand: player.hand().to_vec(),
            board: self.board.clone(),
            pot: self.pot(),
            to_call,
            stack: player.stack(),
            current_bet,
            min_raise: self.blind,
            seats: self
                .players
                .iter()
                .map(|p| SeatView {
                    name: p.name().to_string(),
                    stack: p.stack(),
                    current_bet: p.current_bet(),
                    folded: p.has_folded(),
                })
                .collect(),
        };
        let history = self
            .log
            .action_history_string(player.name(), MAX_HISTORY_CHARS);
        DecisionRequest {
            player: player.name().to_string(),
            prompt: render_prompt(&state, &history),
            to_call,
            stack: player.stack(),
            min_raise: self.blind,
        }
    }

    /// Moves past a completed betting round: deals the next street, or
    /// settles the hand when one seat remains or the river is done.
    pub fn advance_street(&mut self) -> Result<HandProgress, GameError> {
        match &self.round {
            None => return Err(GameError::NoRoundInProgress),
            Some(r) if !r.is_complete() => return Err(GameError::RoundAbandoned),
            Some(_) => {}
        }
        self.round = None;

        if self.in_hand_count() <= 1 {
            self.award_last_survivor();
            self.finish_hand();
            return Ok(HandProgress::Finished);
        }

        let (next, cards) = match self.street {
            Street::Preflop => (Street::Flop, 3),
            Street::Flop => (Street::Turn, 1),
            Street::Turn => (Street::River, 1),
            Street::River | Street::Showdown => {
                self.showdown();
                self.finish_hand();
                return Ok(HandProgress::Finished);
            }
        };
        let dealt = self.deck.draw_n(cards)?;
        self.board.extend_from_slice(&dealt);
        self.street = next;
        tracing::debug!(street = ?next, board = %format_cards(&self.board), "street dealt");
        self.log.add_message(format!(
            "{}: {} (board {})",
            next,
            format_cards(&dealt),
            format_cards(&self.board)
        ));

        let order = self.hand_order();
        let (round, finish) =
            BettingRound::new(next, order, None, &mut self.players, &mut self.log);
        self.round = Some(round);
        Ok(HandProgress::NextStreet(finish))
    }

    fn award_last_survivor(&mut self) {
        let pot = self.log.take_pot();
        let Some(winner) = self.players.iter_mut().find(|p| !p.has_folded()) else {
            return;
        };
        winner.win(pot);
        let name = winner.name().to_string();
        tracing::info!(winner = %name, pot, "everyone else folded");
        self.log.add_winner(&name, pot, None);
        self.log
            .add_message(format!("{name} wins {pot}! Everyone else folded."));
    }

    fn showdown(&mut self) {
        self.street = Street::Showdown;
        let order = self.hand_order();
        for &seat in &order {
            self.players[seat].reveal();
        }

        let result = {
            let contenders: Vec<Contender<'_>> = order
                .iter()
                .map(|&seat| Contender {
                    seat,
                    hole: self.players[seat].hand(),
                })
                .collect();
            resolve(self.evaluator.as_ref(), &self.board, &contenders)
        };

        let pot = self.log.take_pot();
        let shares = split_pot(pot, result.winners.len());
        for (seat, strength) in &result.hands {
            let player = &self.players[*seat];
            let desc = format!(
                "{} ({})",
                strength.category.name(),
                format_cards(player.hand())
            );
            self.log
                .add_message(format!("{} shows {}", player.name(), desc));
            match result.winners.iter().position(|w| w == seat) {
                Some(i) => {
                    let amount = shares[i];
                    let name = player.name().to_string();
                    self.players[*seat].win(amount);
                    self.log.add_winner(&name, amount, Some(desc.clone()));
                    self.log
                        .add_message(format!("{name} wins {amount} with {desc}!"));
                    tracing::info!(winner = %name, amount, hand = %desc, "showdown won");
                }
                None => {
                    let name = player.name().to_string();
                    self.log.add_loser(&name, Some(desc));
                }
            }
        }
    }

    /// Removes busted seats, moves the button and decides whether the match
    /// continues.
    fn finish_hand(&mut self) {
        let n = self.players.len();
        let next_dealer = (1..=n)
            .map(|offset| (self.dealer_index + offset) % n)
            .find(|&seat| self.players[seat].stack() > 0)
            .map(|seat| self.players[seat].name().to_string());

        let busted: Vec<String> = self
            .players
            .iter()
            .filter(|p| p.stack() == 0)
            .map(|p| p.name().to_string())
            .collect();
        for name in &busted {
            tracing::info!(player = %name, "player eliminated");
            self.log.add_message(format!("{name} has been eliminated."));
        }
        self.players.retain(|p| p.stack() > 0);
        self.dealer_index = next_dealer
            .and_then(|name| self.players.iter().position(|p| p.name() == name))
            .unwrap_or(0);

        let human_out = self
            .human
            .as_deref()
            .is_some_and(|h| self.player(h).is_none());
        if human_out {
            self.match_over = true;
            self.win_message = Some("You were eliminated. Better luck next time!".into());
        } else if self.players.len() <= 1 {
            self.match_over = true;
            let msg = match (self.players.first(), self.human.as_deref()) {
                (Some(p), Some(h)) if p.name() == h => "You win the match! Everyone else is out of chips.".to_string(),
                (Some(p), _) => format!("{} wins the match!", p.name()),
                (None, _) => "No players remain.".to_string(),
            };
            self.win_message = Some(msg);
        } else if self.max_hands.is_some_and(|limit| self.hand_number >= limit) {
            self.match_over = true;
            self.win_message = Some(format!(
                "Hand limit of {} reached with {} players remaining.",
                self.hand_number,
                self.players.len()
            ));
        }
        if let Some(msg) = self.win_message.clone().filter(|_| self.match_over) {
            tracing::info!(hands = self.hand_number, result = %msg, "match over");
            self.log.add_message(msg);
        }
    }

    /// Feed-style recap of the hand for one viewer.
    pub fn summary(&self, viewer: &str) -> Vec<String> {
        let mut lines = vec![
            "--- Hand Summary ---".to_string(),
            format!("Current Stage: {}", self.street),
            format!("Pot: {}", self.pot()),
            format!("Community cards: {}", format_cards(&self.board)),
        ];
        if let Some(p) = self.player(viewer) {
            lines.push(format!("{}'s hand: {}", p.name(), format_cards(p.hand())));
        }
        lines.push("Actions:".to_string());
        lines.extend(self.log.summary_lines());
        lines.push("Player stacks:".to_string());
        for p in &self.players {
            let folded = if p.has_folded() { " (Folded)" } else { "" };
            lines.push(format!("{}: {}{}", p.name(), p.stack(), folded));
        }
        lines
    }

    /// Serializable view. Hole cards are included only for `viewer` and for
    /// seats revealed at showdown; `None` shows every hand.
    pub fn snapshot(&self, viewer: Option<&str>) -> GameSnapshot {
        GameSnapshot {
            hand_number: self.hand_number,
            street: self.street,
            players: self
                .players
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let visible = viewer.is_none_or(|v| v == p.name()) || p.is_revealed();
                    PlayerView {
                        name: p.name().to_string(),
                        stack: p.stack(),
                        current_bet: p.current_bet(),
                        folded: p.has_folded(),
                        hand: if visible { p.hand().to_vec() } else { Vec::new() },
                        thinking: p.is_thinking(),
                        revealed: p.is_revealed(),
                        is_dealer: i == self.dealer_index,
                    }
                })
                .collect(),
            board: self.board.clone(),
            pot: self.pot(),
            current_bet: self.round.as_ref().map_or(0, BettingRound::current_bet),
            current_actor: self.current_actor().map(|p| p.name().to_string()),
            actions: self.log.actions().to_vec(),
            messages: self.log.messages().cloned().collect(),
            win_message: self.win_message.clone(),
        }
    }
}
