//! Command handler modules for the Racing Suits CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers for that command
//! - Output streams (`&mut dyn Write`) passed in by `run`
//! - Errors propagated as `CliError`; `run` prints them and picks the exit code
//!
//! Helpers shared by several commands (config loading, race option
//! resolution, race printing) live in this module.

pub mod cfg;
pub mod play;
pub mod race;
pub mod replay;
pub mod rng;
pub mod verify;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use race::handle_race_command;
pub use replay::handle_replay_command;
pub use rng::handle_rng_command;
pub use verify::handle_verify_command;

use std::io::Write;

use racing_suits_engine::race::RaceConfig;
use racing_suits_engine::replay::Replay;
use racing_suits_engine::rng::Seed;
use racing_suits_engine::suits::all_suits;

use crate::cli::RaceArgs;
use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use crate::formatters::{format_lanes, format_suit, format_turn};
use crate::validation::{validate_copies, validate_track_length};

pub(crate) fn load_config() -> Result<ConfigResolved, CliError> {
    config::load_with_sources().map_err(CliError::from)
}

/// Flag value, then config value, then a fresh random seed.
pub(crate) fn resolve_seed(flag: Option<&str>, configured: Option<&str>) -> Seed {
    flag.or(configured)
        .map(Seed::from)
        .unwrap_or_else(|| Seed::from(rand::random::<u64>()))
}

/// Merges command-line race options over the resolved configuration.
pub(crate) fn resolve_race(
    args: &RaceArgs,
    cfg: &config::Config,
) -> Result<(Seed, RaceConfig), CliError> {
    let track_length = validate_track_length(args.track_length.unwrap_or(cfg.track_length))
        .map_err(CliError::InvalidInput)?;
    let copies_per_suit =
        validate_copies(args.copies.unwrap_or(cfg.copies_per_suit)).map_err(CliError::InvalidInput)?;
    let competitors = if args.suits.is_empty() {
        all_suits().to_vec()
    } else {
        args.suits.clone()
    };
    let race = RaceConfig {
        track_length,
        competitors,
        copies_per_suit,
        checkpoints_enabled: cfg.checkpoints && !args.no_checkpoints,
    };
    race.validate()?;
    let seed = resolve_seed(args.seed.as_deref(), cfg.seed.as_deref());
    Ok((seed, race))
}

/// Header, turn log, final lanes and winner line for one replay.
pub(crate) fn write_race(out: &mut dyn Write, replay: &Replay) -> Result<(), CliError> {
    let config = replay.config();
    let field: Vec<&str> = config.competitors.iter().map(|s| s.id()).collect();
    writeln!(
        out,
        "race: seed={} track={} field={} checkpoints={}",
        replay.seed(),
        config.track_length,
        field.join(","),
        if config.checkpoints_enabled { "on" } else { "off" }
    )?;
    for event in replay.events() {
        writeln!(out, "{}", format_turn(event))?;
    }
    if let Some(last) = replay.frames().last() {
        writeln!(out, "{}", format_lanes(last, config.track_length))?;
    }
    writeln!(
        out,
        "Winner: {} after {} turns ({})",
        format_suit(replay.winner()),
        replay.turn_count(),
        replay.id()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use racing_suits_engine::suits::Suit;

    #[test]
    fn flags_override_config() {
        let cfg = config::Config {
            track_length: 7,
            seed: Some("from-config".into()),
            ..config::Config::default()
        };
        let args = RaceArgs {
            seed: Some("from-flag".into()),
            track_length: Some(4),
            no_checkpoints: true,
            suits: vec![Suit::Spades, Suit::Hearts],
            ..RaceArgs::default()
        };
        let (seed, race) = resolve_race(&args, &cfg).unwrap();
        assert_eq!(seed.as_str(), "from-flag");
        assert_eq!(race.track_length, 4);
        assert!(!race.checkpoints_enabled);
        assert_eq!(race.competitors, vec![Suit::Spades, Suit::Hearts]);
        assert_eq!(race.copies_per_suit, 13);
    }

    #[test]
    fn config_fills_unset_flags() {
        let cfg = config::Config {
            track_length: 7,
            checkpoints: false,
            seed: Some("from-config".into()),
            ..config::Config::default()
        };
        let (seed, race) = resolve_race(&RaceArgs::default(), &cfg).unwrap();
        assert_eq!(seed.as_str(), "from-config");
        assert_eq!(race.track_length, 7);
        assert!(!race.checkpoints_enabled);
        assert_eq!(race.competitors.len(), 4);
    }

    #[test]
    fn duplicate_suits_are_invalid_input() {
        let args = RaceArgs {
            suits: vec![Suit::Clubs, Suit::Clubs],
            ..RaceArgs::default()
        };
        let err = resolve_race(&args, &config::Config::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[test]
    fn missing_seed_is_random() {
        let a = resolve_seed(None, None);
        let b = resolve_seed(None, None);
        assert_ne!(a, b);
    }
}
