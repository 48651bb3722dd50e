//! Command-line argument definitions.
//!
//! Parsing lives here so that `run` and the tests can share the same
//! [`RacingSuitsCli`] type.

use clap::{Args, Parser, Subcommand};
use racing_suits_engine::suits::Suit;

#[derive(Parser, Debug)]
#[command(
    name = "racing-suits",
    version,
    about = "Racing Suits: deterministic suit races, replays and wagering sessions"
)]
pub struct RacingSuitsCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Race options shared by every command that simulates races.
///
/// Unset values fall back to the resolved configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct RaceArgs {
    /// Seed for the race RNG (random when neither flag nor config sets one)
    #[arg(long)]
    pub seed: Option<String>,
    /// Lengths from start to finish
    #[arg(long)]
    pub track_length: Option<u32>,
    /// Tokens of each suit in one shoe load
    #[arg(long)]
    pub copies: Option<usize>,
    /// Race without checkpoint side cards
    #[arg(long)]
    pub no_checkpoints: bool,
    /// Comma-separated field, e.g. `hearts,spades` (default: all four)
    #[arg(long, value_delimiter = ',')]
    pub suits: Vec<Suit>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate one race and print the turn log
    Race {
        #[command(flatten)]
        race: RaceArgs,
        /// Write the ghost payload to this file (`.zst` is compressed)
        #[arg(long)]
        ghost_out: Option<String>,
    },
    /// Regenerate a race from a ghost payload file
    Replay {
        #[arg(long)]
        input: String,
    },
    /// Back a suit over a series of races
    Play {
        #[arg(long)]
        suit: Suit,
        /// Requested ante; adjusted to an allowed, affordable amount
        #[arg(long)]
        ante: Option<u32>,
        #[arg(long)]
        races: Option<u32>,
        #[command(flatten)]
        race: RaceArgs,
    },
    /// Re-simulate a batch of seeds and check determinism and invariants
    Verify {
        #[arg(long)]
        races: Option<u32>,
        #[command(flatten)]
        race: RaceArgs,
    },
    /// Print samples from a seeded stream
    Rng {
        #[arg(long)]
        seed: Option<String>,
        /// Fork the stream under this namespace first
        #[arg(long)]
        fork: Option<String>,
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    /// Subcommand names, in help order.
    pub const NAMES: &'static [&'static str] = &["race", "replay", "play", "verify", "rng", "cfg"];
}
