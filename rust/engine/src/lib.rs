//! # racing-suits-engine: Suit Racing Core
//!
//! A deterministic race between the four card suits. Each turn a card is
//! drawn from a seeded shoe and its suit advances one step; face-down
//! checkpoint cards along the track send a suit back once the whole field
//! has passed them. Replays are regenerated from `(seed, config)` alone.
//!
//! ## Core Modules
//!
//! - [`suits`] - Suit identity, symbols and canonical ordering
//! - [`rng`] - Seeded, forkable random streams
//! - [`deck`] - Self-refilling shoe and the draw-source seam
//! - [`race`] - Race configuration, state, frames and results
//! - [`engine`] - Turn resolution and full-race simulation
//! - [`replay`] - Versioned replays and ghost payloads
//! - [`rules`] - Ante options and normalization
//! - [`session`] - Chips, settlement, statistics and leaderboards
//! - [`streak`] - Consecutive-win counter
//! - [`errors`] - Error types for races, sessions and replays
//!
//! ## Quick Start
//!
//! ```rust
//! use racing_suits_engine::engine::RaceEngine;
//! use racing_suits_engine::race::RaceConfig;
//!
//! let result = RaceEngine::run("quick-start", RaceConfig::default()).unwrap();
//! println!("{} wins after {} turns", result.winner, result.turn_count);
//! ```
//!
//! ## Deterministic Replays
//!
//! The same seed and configuration always produce the same trace:
//!
//! ```rust
//! use racing_suits_engine::race::RaceConfig;
//! use racing_suits_engine::replay::build_replay_from_seed;
//!
//! let a = build_replay_from_seed("ghost", RaceConfig::default()).unwrap();
//! let b = build_replay_from_seed("ghost", RaceConfig::default()).unwrap();
//! assert!(a.same_trace(&b));
//! assert_eq!(a.id(), b.id());
//! ```
//!
//! ## Settling a Race
//!
//! ```rust
//! use racing_suits_engine::session::SessionState;
//! use racing_suits_engine::suits::Suit;
//!
//! let mut session = SessionState::new();
//! session.select_competitor(Suit::Hearts);
//! session.set_ante(50);
//!
//! let race = session.open_race("evening").unwrap();
//! let settlement = session.close_race(race);
//! assert_eq!(settlement.total_games, 1);
//! ```

pub mod deck;
pub mod engine;
pub mod errors;
pub mod race;
pub mod replay;
pub mod rules;
pub mod rng;
pub mod session;
pub mod streak;
pub mod suits;
