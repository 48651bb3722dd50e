//! # Play Command
//!
//! Backs one suit over a series of races. Each race is opened from the
//! session, simulated with its own seed (`{seed}:{race number}`), settled,
//! and archived. The settlement after every race and both leaderboards at the
//! end are printed.
//!
//! The requested ante is re-applied before every race, so it recovers once
//! the stack can cover it again after a losing run.

use std::io::Write;

use racing_suits_engine::session::{SessionConfig, SessionState};
use racing_suits_engine::suits::Suit;

use super::{load_config, resolve_race};
use crate::cli::RaceArgs;
use crate::error::CliError;
use crate::formatters::{format_leaderboards, format_settlement, format_suit};
use crate::ui;
use crate::validation::validate_races;

pub fn handle_play_command(
    suit: Suit,
    ante: Option<u32>,
    races: Option<u32>,
    race: RaceArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = load_config()?;
    let races = validate_races(races, 1).map_err(CliError::InvalidInput)?;
    let (seed, race_config) = resolve_race(&race, &resolved.config)?;

    let session_config = SessionConfig {
        starting_chips: resolved.config.starting_chips,
        replay_archive: resolved.config.replay_archive,
        race: race_config,
        ..SessionConfig::default()
    };
    let mut session = SessionState::with_config(session_config)?;
    session.select_competitor(suit);

    let requested = ante.unwrap_or_else(|| session.min_ante());
    let applied = session.set_ante(requested);
    if applied != requested {
        ui::warn_ante_adjusted(err, requested, applied)?;
    }

    writeln!(
        out,
        "play: suit={} ante={} races={} seed={}",
        suit.id(),
        applied,
        races,
        seed
    )?;
    writeln!(out, "Stack: {}", session.chips())?;

    for i in 1..=races {
        session.set_ante(requested);
        let race_seed = format!("{}:{}", seed, i);
        let opened = session.open_race(race_seed)?;
        writeln!(
            out,
            "Race {}: ante {} on {}, {} wins in {} turns",
            i,
            opened.ante(),
            format_suit(opened.backed()),
            format_suit(opened.winner()),
            opened.replay().turn_count()
        )?;
        let settlement = session.close_race(opened);
        writeln!(out, "  {}", format_settlement(&settlement))?;
    }

    writeln!(out)?;
    write!(out, "{}", format_leaderboards(&session.leaderboards()))?;
    let streak = session.streak();
    writeln!(
        out,
        "Session: games={} wins={} best_streak={} chips={} net={:+} won={}",
        session.total_games(),
        session.wins(),
        streak.best,
        session.chips(),
        session.total_chip_delta(),
        session.total_chips_won()
    )?;
    Ok(())
}
