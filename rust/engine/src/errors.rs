use thiserror::Error;

use crate::rng::Seed;
use crate::suits::Suit;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RaceError {
    #[error("Invalid race configuration: {0}")]
    InvalidConfig(String),
    /// The turn cap was hit without a finisher. Every draw moves someone
    /// forward, so this points at an engine defect rather than bad luck.
    #[error("Race for seed \"{seed}\" produced no winner within {max_turns} turns")]
    SimulationExhausted { seed: Seed, max_turns: u32 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid session configuration: {0}")]
    InvalidConfig(String),
    #[error("No competitor selected; select one before settling a race")]
    NoCompetitorSelected,
    #[error("{0} is not part of the configured field")]
    NotRacing(Suit),
    #[error(transparent)]
    Race(#[from] RaceError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Unsupported replay payload version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("Malformed replay payload: {0}")]
    Malformed(String),
    #[error(transparent)]
    Race(#[from] RaceError),
}
