//! Error types for the CLI application.

use cardroom_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::exit_code;

/// Everything a command handler can fail with. Each variant maps to one
/// process exit code through [`CliError::exit_code`].
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, stdin reads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Engine error: {0}")]
    Engine(String),

    /// The player left the table (quit command or closed stdin)
    #[error("Interrupted: {0}")]
    Interrupted(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Interrupted(_) => exit_code::INTERRUPTED,
            _ => exit_code::ERROR,
        }
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::InvalidConfig(msg) => CliError::InvalidInput(msg),
            dup @ GameError::DuplicatePlayer(_) => CliError::InvalidInput(dup.to_string()),
            other => CliError::Engine(other.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}
