use serde::{Deserialize, Serialize};
use std::fs;

use handlog_engine::hand::{MAX_PLAYERS, MIN_PLAYERS};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub roster: Option<String>,
    pub min_players: usize,
    pub max_players: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub roster: ValueSource,
    pub min_players: ValueSource,
    pub max_players: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            roster: ValueSource::Default,
            min_players: ValueSource::Default,
            max_players: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: None,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HANDLOG_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.roster {
            cfg.roster = Some(v);
            sources.roster = ValueSource::File;
        }
        if let Some(v) = f.min_players {
            cfg.min_players = v;
            sources.min_players = ValueSource::File;
        }
        if let Some(v) = f.max_players {
            cfg.max_players = v;
            sources.max_players = ValueSource::File;
        }
    }

    if let Ok(roster) = std::env::var("HANDLOG_ROSTER")
        && !roster.is_empty()
    {
        cfg.roster = Some(roster);
        sources.roster = ValueSource::Env;
    }
    if let Ok(min) = std::env::var("HANDLOG_MIN_PLAYERS")
        && !min.is_empty()
    {
        cfg.min_players = min
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid min_players".into()))?;
        sources.min_players = ValueSource::Env;
    }
    if let Ok(max) = std::env::var("HANDLOG_MAX_PLAYERS")
        && !max.is_empty()
    {
        cfg.max_players = max
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max_players".into()))?;
        sources.max_players = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    roster: Option<String>,
    #[serde(default)]
    min_players: Option<usize>,
    #[serde(default)]
    max_players: Option<usize>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.min_players < MIN_PLAYERS || cfg.max_players > MAX_PLAYERS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: player bounds must lie within {}..={}",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }
    if cfg.min_players > cfg.max_players {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_players must be <= max_players".into(),
        ));
    }
    Ok(())
}
