//! # Racing Suits CLI Library
//!
//! Command-line front end for the Racing Suits engine: simulate and replay
//! races, run wagering sessions, and check determinism.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a subcommand. Output streams
//! are injected so that tests can capture them.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["racing-suits", "play", "--suit", "hearts", "--races", "5"];
//! let code = racing_suits_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `race`: Simulate one race; `--ghost-out` saves the ghost payload
//! - `replay`: Regenerate a race from a ghost payload file
//! - `play`: Back a suit over several races and show settlements and leaderboards
//! - `verify`: Re-simulate many seeds and check determinism and invariants
//! - `rng`: Print samples from a seeded stream
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;
#[macro_use]
mod macros;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, RacingSuitsCli};
use commands::{
    handle_cfg_command, handle_play_command, handle_race_command, handle_replay_command,
    handle_rng_command, handle_verify_command,
};

pub use error::{BatchValidationError, CliError};

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success (including `--help` and `--version`), `2` for
/// parse errors and failed commands.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["racing-suits", "rng", "--seed", "42"];
/// let code = racing_suits_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match RacingSuitsCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version print to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "");
            write_or_exit!(err, "Racing Suits CLI");
            write_or_exit!(err, "Usage: racing-suits <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in Commands::NAMES {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: racing-suits --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Race { race, ghost_out } => handle_race_command(race, ghost_out, out),
        Commands::Replay { input } => handle_replay_command(input, out, err),
        Commands::Play {
            suit,
            ante,
            races,
            race,
        } => handle_play_command(suit, ante, races, race, out, err),
        Commands::Verify { races, race } => handle_verify_command(races, race, out, err),
        Commands::Rng { seed, fork, count } => handle_rng_command(seed, fork, count, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
