//! Decision requests for non-human seats.
//!
//! One turn runs through: request, then on failure retry with exponential
//! backoff, then a fallback action once retries are exhausted. Each attempt
//! races the collaborator against a timeout; a call that loses the race is
//! dropped, so a late reply can never be applied.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cardroom_engine::player::PlayerAction;
use cardroom_engine::prompt::DecisionRequest;
use cardroom_engine::table::SeatDecider;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collaborator::{Collaborator, CollaboratorError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionConfig {
    /// Per-attempt limit
    pub timeout: Duration,
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub backoff_multiplier: u32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
            backoff_multiplier: 2,
        }
    }
}

impl DecisionConfig {
    /// Sleep before retry `retry` (1-based): `initial * multiplier^(retry-1)`.
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let factor = self
            .backoff_multiplier
            .saturating_pow(retry.saturating_sub(1));
        self.initial_backoff.saturating_mul(factor)
    }
}

/// How a turn's action was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: PlayerAction,
    /// Collaborator calls made, including failed ones
    pub attempts: u32,
    pub fell_back: bool,
}

/// Extracts `{"action": ..., "amount": ...}` from free-form reply text.
///
/// `amount` must be a non-negative integer that fits in `u32` whenever it is
/// present, and is required for a raise.
///
/// ```
/// use cardroom_ai::decision::parse_decision;
/// use cardroom_engine::player::PlayerAction;
///
/// let reply = "Sure! {\"action\": \"raise\", \"amount\": 40} Good luck.";
/// assert_eq!(parse_decision(reply), Ok(PlayerAction::Raise(40)));
/// assert!(parse_decision("{\"action\": \"raise\"}").is_err());
/// ```
pub fn parse_decision(text: &str) -> Result<PlayerAction, CollaboratorError> {
    let parse_err = |msg: &str| CollaboratorError::Parse(msg.to_string());

    let start = text.find('{').ok_or_else(|| parse_err("no JSON object in reply"))?;
    let end = text.rfind('}').ok_or_else(|| parse_err("no JSON object in reply"))?;
    if end < start {
        return Err(parse_err("no JSON object in reply"));
    }
    let value: Value = serde_json::from_str(&text[start..=end])
        .map_err(|e| CollaboratorError::Parse(format!("invalid JSON: {e}")))?;

    let action = value
        .get("action")
        .and_then(Value::as_str)
        .ok_or_else(|| parse_err("missing action"))?
        .trim()
        .to_ascii_lowercase();

    let amount = match value.get("amount") {
        None | Some(Value::Null) => None,
        Some(v) => {
            let n = v
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| CollaboratorError::Parse(format!("amount {v} is not a valid chip count")))?;
            Some(n)
        }
    };

    match action.as_str() {
        "fold" => Ok(PlayerAction::Fold),
        "check" => Ok(PlayerAction::Check),
        "call" => Ok(PlayerAction::Call),
        "raise" => amount
            .map(PlayerAction::Raise)
            .ok_or_else(|| parse_err("raise without amount")),
        other => Err(CollaboratorError::Parse(format!("unknown action {other:?}"))),
    }
}

/// Check when nothing is owed, otherwise a coin flip between fold and call.
pub fn fallback_action(to_call: u32) -> PlayerAction {
    if to_call == 0 {
        PlayerAction::Check
    } else if rand::random::<bool>() {
        PlayerAction::Call
    } else {
        PlayerAction::Fold
    }
}

pub struct DecisionRequester {
    collaborator: Arc<dyn Collaborator>,
    config: DecisionConfig,
}

impl DecisionRequester {
    pub fn new(collaborator: Arc<dyn Collaborator>, config: DecisionConfig) -> Self {
        Self {
            collaborator,
            config,
        }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    async fn attempt(&self, request: &DecisionRequest) -> Result<PlayerAction, CollaboratorError> {
        let reply = tokio::time::timeout(self.config.timeout, self.collaborator.complete(&request.prompt))
            .await
            .map_err(|_| CollaboratorError::Timeout(self.config.timeout))??;
        parse_decision(&reply)
    }

    /// Always yields exactly one action.
    pub async fn request(&self, request: &DecisionRequest) -> Decision {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match self.attempt(request).await {
                Ok(action) => {
                    tracing::info!(
                        player = %request.player,
                        collaborator = self.collaborator.name(),
                        attempts,
                        ?action,
                        "decision received"
                    );
                    return Decision {
                        action,
                        attempts,
                        fell_back: false,
                    };
                }
                Err(err) => {
                    tracing::warn!(player = %request.player, attempt = attempts, %err, "decision attempt failed");
                }
            }

            if attempts > self.config.max_retries {
                break;
            }
            let delay = self.config.backoff_for(attempts);
            tracing::warn!(player = %request.player, retry = attempts, ?delay, "retrying decision");
            tokio::time::sleep(delay).await;
        }

        let action = fallback_action(request.to_call);
        tracing::error!(
            player = %request.player,
            attempts,
            ?action,
            to_call = request.to_call,
            "decision retries exhausted, using fallback"
        );
        Decision {
            action,
            attempts,
            fell_back: true,
        }
    }
}

#[async_trait]
impl SeatDecider for DecisionRequester {
    async fn decide(&self, request: DecisionRequest) -> PlayerAction {
        self.request(&request).await.action
    }
}
