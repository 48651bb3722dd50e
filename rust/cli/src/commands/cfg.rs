//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of every value
//! (default, environment, or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "track_length": {
//!     "value": 10,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": "nightly",
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use super::load_config;
use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = load_config()?;
    let display = serde_json::json!({
        "starting_chips": {
            "value": config.starting_chips,
            "source": sources.starting_chips,
        },
        "track_length": {
            "value": config.track_length,
            "source": sources.track_length,
        },
        "copies_per_suit": {
            "value": config.copies_per_suit,
            "source": sources.copies_per_suit,
        },
        "checkpoints": {
            "value": config.checkpoints,
            "source": sources.checkpoints,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "replay_archive": {
            "value": config.replay_archive,
            "source": sources.replay_archive,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
