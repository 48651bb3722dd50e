//! Race command handler.
//!
//! Simulates one race and prints the turn-by-turn log, the final lanes and
//! the winner. With `--ghost-out` the ghost payload (seed plus config) is
//! written as JSON so the race can be regenerated later by `replay`.

use std::io::Write;

use racing_suits_engine::replay::{build_replay_from_seed, to_ghost_payload};

use super::{load_config, resolve_race, write_race};
use crate::cli::RaceArgs;
use crate::error::CliError;
use crate::io_utils::write_text_auto;

pub fn handle_race_command(
    race: RaceArgs,
    ghost_out: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = load_config()?;
    let (seed, config) = resolve_race(&race, &resolved.config)?;
    let replay = build_replay_from_seed(seed, config)?;
    write_race(out, &replay)?;

    if let Some(path) = ghost_out {
        let json = to_ghost_payload(&replay).to_json()?;
        write_text_auto(&path, &json)
            .map_err(|e| CliError::InvalidInput(format!("Failed to write {}: {}", path, e)))?;
        writeln!(out, "Ghost payload written to {}", path)?;
    }
    Ok(())
}
