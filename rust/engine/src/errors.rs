use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No more cards in the deck")]
    EmptyDeck,
    #[error("It's not {actual}'s turn (expected {expected})")]
    InvalidActor { expected: String, actual: String },
    #[error("No betting round in progress")]
    NoRoundInProgress,
    #[error("Betting round already complete")]
    RoundAlreadyComplete,
    #[error("Unknown player: {0}")]
    UnknownPlayer(String),
    #[error("At least two players are required, got {0}")]
    NotEnoughPlayers(usize),
    #[error("Duplicate player name: {0}")]
    DuplicatePlayer(String),
    #[error("Invalid game configuration: {0}")]
    InvalidConfig(String),
    #[error("The match is already over")]
    MatchOver,
    #[error("Betting round was abandoned before completing")]
    RoundAbandoned,
    #[error("Game state lock poisoned")]
    StatePoisoned,
}
