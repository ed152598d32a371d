//! # cardroom-engine: Multi-seat Texas Hold'em Match Engine
//!
//! Runs a Texas Hold'em match from the first deal to the last seat standing:
//! betting across four streets, showdown comparison, pot splitting and
//! elimination. Non-human seats are asked for decisions through an async
//! seam so a slow or failing decision service never stalls the table.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and formatting
//! - [`deck`] - Seedable 52-card deck with ChaCha20 shuffling
//! - [`player`] - Per-seat state and requested actions
//! - [`rules`] - Resolution of a requested action against stack and amount owed
//! - [`betting`] - Turn-order state machine for one betting street
//! - [`logger`] - Action history, hand pot and message feed
//! - [`hand`] - Poker hand evaluation and strength comparison
//! - [`showdown`] - Evaluator seam, winner selection and pot splitting
//! - [`game`] - Street and hand sequencing, button rotation, elimination
//! - [`prompt`] - Decision prompts for non-human seats
//! - [`table`] - Async match driver and the human action entry point
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cardroom_engine::cards::{Card, Rank, Suit};
//! use cardroom_engine::hand::{evaluate_hand, Category};
//!
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Hearts),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Ten, Suit::Hearts),
//!     Card::new(Rank::Two, Suit::Clubs),
//!     Card::new(Rank::Three, Suit::Diamonds),
//! ];
//!
//! assert_eq!(evaluate_hand(&cards).category, Category::StraightFlush);
//! ```
//!
//! ## Driving a Hand
//!
//! ```rust
//! use cardroom_engine::game::{GameConfig, HandProgress, PokerGame};
//! use cardroom_engine::player::PlayerAction;
//!
//! let config = GameConfig { seed: Some(7), ..GameConfig::default() };
//! let mut game = PokerGame::new(&["Alice", "Bob"], None, &config).unwrap();
//! let _finished = game.start_hand().unwrap();
//!
//! // Bob (left of the button) acts first after both blinds are posted
//! game.process_action("Bob", PlayerAction::Fold).unwrap();
//! assert!(matches!(game.advance_street().unwrap(), HandProgress::Finished));
//! assert_eq!(game.total_chips(), 2_000);
//! ```

pub mod betting;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod prompt;
pub mod rules;
pub mod showdown;
pub mod table;
