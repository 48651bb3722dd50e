use racing_suits_engine::deck::DEFAULT_COPIES_PER_SUIT;
use racing_suits_engine::race::DEFAULT_TRACK_LENGTH;
use racing_suits_engine::rules::STARTING_CHIPS;
use racing_suits_engine::session::DEFAULT_REPLAY_ARCHIVE;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "RACING_SUITS_CONFIG";
pub const SEED_ENV: &str = "RACING_SUITS_SEED";
pub const TRACK_LENGTH_ENV: &str = "RACING_SUITS_TRACK_LENGTH";
pub const CHECKPOINTS_ENV: &str = "RACING_SUITS_CHECKPOINTS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_chips: u32,
    pub track_length: u32,
    pub copies_per_suit: usize,
    pub checkpoints: bool,
    pub seed: Option<String>,
    pub replay_archive: usize,
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
    pub starting_chips: ValueSource,
    pub track_length: ValueSource,
    pub copies_per_suit: ValueSource,
    pub checkpoints: ValueSource,
    pub seed: ValueSource,
    pub replay_archive: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_chips: ValueSource::Default,
            track_length: ValueSource::Default,
            copies_per_suit: ValueSource::Default,
            checkpoints: ValueSource::Default,
            seed: ValueSource::Default,
            replay_archive: ValueSource::Default,
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
            starting_chips: STARTING_CHIPS,
            track_length: DEFAULT_TRACK_LENGTH,
            copies_per_suit: DEFAULT_COPIES_PER_SUIT,
            checkpoints: true,
            seed: None,
            replay_archive: DEFAULT_REPLAY_ARCHIVE,
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
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.track_length {
            cfg.track_length = v;
            sources.track_length = ValueSource::File;
        }
        if let Some(v) = f.copies_per_suit {
            cfg.copies_per_suit = v;
            sources.copies_per_suit = ValueSource::File;
        }
        if let Some(v) = f.checkpoints {
            cfg.checkpoints = v;
            sources.checkpoints = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.replay_archive {
            cfg.replay_archive = v;
            sources.replay_archive = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Env;
    }
    if let Ok(len) = std::env::var(TRACK_LENGTH_ENV)
        && !len.is_empty()
    {
        cfg.track_length = len
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid track length: {}", len)))?;
        sources.track_length = ValueSource::Env;
    }
    if let Ok(flag) = std::env::var(CHECKPOINTS_ENV)
        && !flag.is_empty()
    {
        cfg.checkpoints = parse_bool(&flag)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid checkpoints flag: {}", flag)))?;
        sources.checkpoints = ValueSource::Env;
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
    starting_chips: Option<u32>,
    #[serde(default)]
    track_length: Option<u32>,
    #[serde(default)]
    copies_per_suit: Option<usize>,
    #[serde(default)]
    checkpoints: Option<bool>,
    #[serde(default)]
    seed: Option<String>,
    #[serde(default)]
    replay_archive: Option<usize>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.track_length == 0 {
        return Err(ConfigError::Invalid("track_length must be >= 1".into()));
    }
    if cfg.copies_per_suit == 0 {
        return Err(ConfigError::Invalid("copies_per_suit must be >= 1".into()));
    }
    if cfg.starting_chips == 0 {
        return Err(ConfigError::Invalid("starting_chips must be > 0".into()));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_constants() {
        let cfg = Config::default();
        assert_eq!(cfg.starting_chips, 200);
        assert_eq!(cfg.track_length, 10);
        assert_eq!(cfg.copies_per_suit, 13);
        assert!(cfg.checkpoints);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn bool_spellings() {
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn zero_track_is_rejected() {
        let cfg = Config {
            track_length: 0,
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }
}
