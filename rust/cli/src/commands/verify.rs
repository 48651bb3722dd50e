//! Verify command handler.
//!
//! Re-simulates a batch of seeds (`{seed}:{index}`) and checks, per race:
//!
//! - two runs of the same seed produce identical traces
//! - trace lengths match the turn count
//! - positions stay within `[0, track_length]`, exactly one suit finishes
//! - checkpoint assignments never change, revealed checkpoints form a prefix
//!   and never hide again
//! - the ghost payload regenerates the same trace
//!
//! Every failing race is reported; the command fails if any did.

use std::io::Write;

use racing_suits_engine::engine::RaceEngine;
use racing_suits_engine::race::{RaceConfig, RaceResult};
use racing_suits_engine::replay::{Replay, from_ghost_payload, to_ghost_payload};
use racing_suits_engine::rng::Seed;

use super::{load_config, resolve_race};
use crate::cli::RaceArgs;
use crate::error::{BatchValidationError, CliError};
use crate::ui;
use crate::validation::validate_races;

const DEFAULT_VERIFY_RACES: u32 = 100;

pub fn handle_verify_command(
    races: Option<u32>,
    race: RaceArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = load_config()?;
    let races = validate_races(races, DEFAULT_VERIFY_RACES).map_err(CliError::InvalidInput)?;
    let (base, config) = resolve_race(&race, &resolved.config)?;

    let mut failures: Vec<BatchValidationError<String>> = Vec::new();
    let mut total_turns = 0u64;
    for i in 0..races {
        let seed = Seed::from(format!("{}:{}", base, i));
        match verify_one(&seed, &config) {
            Ok(turns) => total_turns += u64::from(turns),
            Err(message) => failures.push(BatchValidationError {
                item_context: seed.to_string(),
                message,
            }),
        }
    }

    if failures.is_empty() {
        writeln!(
            out,
            "Verify: OK ({} races, {} turns, seed base {})",
            races, total_turns, base
        )?;
        return Ok(());
    }

    for failure in &failures {
        ui::write_error(err, &failure.to_string())?;
    }
    Err(CliError::InvalidInput(format!(
        "{} of {} races failed verification",
        failures.len(),
        races
    )))
}

fn verify_one(seed: &Seed, config: &RaceConfig) -> Result<u32, String> {
    let first = RaceEngine::run(seed.clone(), config.clone()).map_err(|e| e.to_string())?;
    let second = RaceEngine::run(seed.clone(), config.clone()).map_err(|e| e.to_string())?;
    if first != second {
        return Err("trace differs between runs".into());
    }
    check_trace(&first)?;

    let replay = Replay::from_result(&first);
    let rebuilt = from_ghost_payload(&to_ghost_payload(&replay)).map_err(|e| e.to_string())?;
    if !rebuilt.same_trace(&replay) {
        return Err("ghost payload does not regenerate the trace".into());
    }
    Ok(first.turn_count)
}

fn check_trace(result: &RaceResult) -> Result<(), String> {
    let track = result.config.track_length;
    if result.frames.len() != result.turn_count as usize + 1 {
        return Err(format!(
            "{} frames for {} turns",
            result.frames.len(),
            result.turn_count
        ));
    }
    if result.events.len() != result.turn_count as usize {
        return Err(format!(
            "{} events for {} turns",
            result.events.len(),
            result.turn_count
        ));
    }

    for frame in &result.frames {
        if let Some((suit, pos)) = frame.positions.iter().find(|(_, p)| **p > track) {
            return Err(format!(
                "turn {}: {} at {} beyond track {}",
                frame.turn_count,
                suit.id(),
                pos,
                track
            ));
        }
        let first_hidden = frame
            .checkpoints
            .iter()
            .position(|c| !c.revealed)
            .unwrap_or(frame.checkpoints.len());
        if frame.checkpoints[first_hidden..].iter().any(|c| c.revealed) {
            return Err(format!(
                "turn {}: checkpoint revealed out of order",
                frame.turn_count
            ));
        }
    }

    for pair in result.frames.windows(2) {
        for (before, after) in pair[0].checkpoints.iter().zip(&pair[1].checkpoints) {
            if before.length != after.length || before.competitor != after.competitor {
                return Err(format!(
                    "turn {}: checkpoint {} changed assignment",
                    pair[1].turn_count, before.length
                ));
            }
            if before.revealed && !after.revealed {
                return Err(format!(
                    "turn {}: checkpoint {} hidden again",
                    pair[1].turn_count, before.length
                ));
            }
        }
    }

    let last = result
        .final_frame()
        .ok_or_else(|| "race has no frames".to_string())?;
    let finishers = last.positions.values().filter(|p| **p == track).count();
    if finishers != 1 || last.positions.get(&result.winner) != Some(&track) {
        return Err(format!(
            "{} finishers; winner {} at {:?}",
            finishers,
            result.winner.id(),
            last.positions.get(&result.winner)
        ));
    }
    Ok(())
}
