//! Replay command handler.
//!
//! Reads a ghost payload (plain JSON or `.zst`), regenerates the race from
//! its seed and configuration, and prints it exactly as `race` did.
//! Payloads written under another schema version are rejected, never
//! migrated. The payload's race options go through the same bounds as
//! command-line flags.

use std::io::Write;

use racing_suits_engine::errors::ReplayError;
use racing_suits_engine::replay::{GhostPayload, from_ghost_payload};

use super::write_race;
use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;
use crate::validation::{validate_copies, validate_track_length};

pub fn handle_replay_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(&input)
        .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", input, e)))?;

    let payload = match GhostPayload::from_json(&content) {
        Ok(p) => p,
        Err(e @ ReplayError::UnsupportedVersion { .. }) => {
            ui::display_warning(err, "Discarding ghost payload; start a fresh race instead.")?;
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    validate_track_length(payload.config.track_length).map_err(CliError::InvalidInput)?;
    validate_copies(payload.config.copies_per_suit).map_err(CliError::InvalidInput)?;

    let replay = from_ghost_payload(&payload)?;
    if replay.id() != payload.replay_id {
        ui::display_warning(
            err,
            &format!(
                "Payload id {} does not match regenerated id {}",
                payload.replay_id,
                replay.id()
            ),
        )?;
    }
    writeln!(out, "Replaying {}", payload.replay_id)?;
    write_race(out, &replay)?;
    Ok(())
}
