//! Layered configuration: built-in defaults, then the TOML file named by
//! `CARDROOM_CONFIG`, then `CARDROOM_*` environment variables. Command-line
//! flags are applied on top by each command.

use std::fs;
use std::time::Duration;

use cardroom_ai::decision::DecisionConfig;
use cardroom_engine::game::{DEFAULT_BLIND, GameConfig};
use cardroom_engine::player::STARTING_STACK;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PLAYER_NAME: &str = "Player";
pub const DEFAULT_DECISION_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub player_name: String,
    pub starting_stack: u32,
    pub blind: u32,
    pub seed: Option<u64>,
    pub decision_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.into(),
            starting_stack: STARTING_STACK,
            blind: DEFAULT_BLIND,
            seed: None,
            decision_timeout_ms: DEFAULT_DECISION_TIMEOUT_MS,
        }
    }
}

impl Config {
    pub fn game_config(&self, max_hands: Option<u32>) -> GameConfig {
        GameConfig {
            starting_stack: self.starting_stack,
            blind: self.blind,
            seed: self.seed,
            max_hands,
        }
    }

    pub fn decision_config(&self) -> DecisionConfig {
        DecisionConfig {
            timeout: Duration::from_millis(self.decision_timeout_ms),
            ..DecisionConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub player_name: ValueSource,
    pub starting_stack: ValueSource,
    pub blind: ValueSource,
    pub seed: ValueSource,
    pub decision_timeout_ms: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            player_name: ValueSource::Default,
            starting_stack: ValueSource::Default,
            blind: ValueSource::Default,
            seed: ValueSource::Default,
            decision_timeout_ms: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("CARDROOM_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.player_name {
            cfg.player_name = v;
            sources.player_name = ValueSource::File;
        }
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.blind {
            cfg.blind = v;
            sources.blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.decision_timeout_ms {
            cfg.decision_timeout_ms = v;
            sources.decision_timeout_ms = ValueSource::File;
        }
    }

    if let Some(name) = env_value("CARDROOM_PLAYER_NAME") {
        cfg.player_name = name;
        sources.player_name = ValueSource::Env;
    }
    if let Some(seed) = env_value("CARDROOM_SEED") {
        cfg.seed = Some(parse_env(&seed, "seed")?);
        sources.seed = ValueSource::Env;
    }
    if let Some(blind) = env_value("CARDROOM_BLIND") {
        cfg.blind = parse_env(&blind, "blind")?;
        sources.blind = ValueSource::Env;
    }
    if let Some(stack) = env_value("CARDROOM_STARTING_STACK") {
        cfg.starting_stack = parse_env(&stack, "starting_stack")?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(ms) = env_value("CARDROOM_DECISION_TIMEOUT_MS") {
        cfg.decision_timeout_ms = parse_env(&ms, "decision_timeout_ms")?;
        sources.decision_timeout_ms = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    player_name: Option<String>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    decision_timeout_ms: Option<u64>,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(raw: &str, field: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {field}: {raw:?}")))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.player_name.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player_name must not be empty".into(),
        ));
    }
    if cfg.decision_timeout_ms == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: decision_timeout_ms must be >0".into(),
        ));
    }
    cfg.game_config(None)
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {e}")))
}
