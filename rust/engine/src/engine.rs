use crate::deck::{DrawSource, Shoe};
use crate::errors::RaceError;
use crate::race::{
    Checkpoint, CheckpointEvent, Positions, RaceConfig, RaceResult, RaceState, TurnEvent,
};
use crate::rng::{Seed, SeededRng};
use crate::suits::Suit;

/// Fork namespace feeding the movement shoe.
pub const MOVEMENT_STREAM: &str = "race-deck";
/// Fork namespace feeding the checkpoint (side card) shoe.
pub const CHECKPOINT_STREAM: &str = "checkpoint-deck";

/// Turn-by-turn race state machine.
///
/// Holds two independent draw sources: one decides who moves each turn, the
/// other deals the side cards before the race starts. With the default
/// [`Shoe`] sources both are forked from the race seed, so a seed and a
/// config fully determine the outcome.
///
/// # Examples
///
/// ```
/// use racing_suits_engine::engine::RaceEngine;
/// use racing_suits_engine::race::RaceConfig;
///
/// let a = RaceEngine::run("derby", RaceConfig::default()).unwrap();
/// let b = RaceEngine::run("derby", RaceConfig::default()).unwrap();
/// assert_eq!(a.winner, b.winner);
/// assert_eq!(a.frames.len(), a.turn_count as usize + 1);
/// assert_eq!(a.events, b.events);
/// ```
#[derive(Debug)]
pub struct RaceEngine<M: DrawSource = Shoe, C: DrawSource = Shoe> {
    seed: Seed,
    config: RaceConfig,
    /// Decides which competitor advances each turn
    movement: M,
    /// Deals the checkpoint assignments
    side_cards: C,
}

impl RaceEngine<Shoe, Shoe> {
    pub fn new(seed: impl Into<Seed>, config: RaceConfig) -> Result<Self, RaceError> {
        config.validate()?;
        let seed = seed.into();
        let rng = SeededRng::new(seed.clone());
        let movement = Shoe::new(
            &config.competitors,
            config.copies_per_suit,
            rng.fork(MOVEMENT_STREAM),
        )?;
        let side_cards = Shoe::new(
            &config.competitors,
            config.copies_per_suit,
            rng.fork(CHECKPOINT_STREAM),
        )?;
        Ok(Self {
            seed,
            config,
            movement,
            side_cards,
        })
    }

    /// Builds an engine for `(seed, config)` and simulates the whole race.
    pub fn run(seed: impl Into<Seed>, config: RaceConfig) -> Result<RaceResult, RaceError> {
        Self::new(seed, config)?.simulate()
    }
}

impl<M: DrawSource, C: DrawSource> RaceEngine<M, C> {
    /// Builds an engine around caller-supplied draw sources. Sources must
    /// only produce configured competitors.
    pub fn with_sources(
        seed: impl Into<Seed>,
        config: RaceConfig,
        movement: M,
        side_cards: C,
    ) -> Result<Self, RaceError> {
        config.validate()?;
        Ok(Self {
            seed: seed.into(),
            config,
            movement,
            side_cards,
        })
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    /// Starting grid: everyone at zero and, when enabled, one face-down
    /// checkpoint per interior length dealt from the side shoe.
    pub fn initial_state(&mut self) -> RaceState {
        let positions: Positions = self.config.competitors.iter().map(|s| (*s, 0)).collect();
        let checkpoints = if self.config.checkpoints_enabled {
            (1..self.config.track_length)
                .map(|length| Checkpoint {
                    length,
                    competitor: self.side_cards.draw(),
                    revealed: false,
                })
                .collect()
        } else {
            Vec::new()
        };
        RaceState {
            turn_count: 0,
            positions,
            checkpoints,
        }
    }

    fn all_passed(&self, length: u32, positions: &Positions) -> bool {
        self.config
            .competitors
            .iter()
            .all(|s| positions.get(s).copied().unwrap_or(0) > length)
    }

    /// Plays one turn from `state` and returns the next state and its event.
    /// `state` itself is never modified.
    pub fn play_turn(&mut self, state: &RaceState) -> (RaceState, TurnEvent) {
        let mut next = state.clone();
        next.turn_count += 1;

        let drawn: Suit = self.movement.draw();
        let track_length = self.config.track_length;
        let position = next.positions.entry(drawn).or_insert(0);
        let moved_from = *position;
        let moved_to = (moved_from + 1).min(track_length);
        *position = moved_to;

        let mut checkpoint_events = Vec::new();
        // A finishing move wins outright; no setback can land on the same tick.
        if moved_to < track_length {
            for index in 0..next.checkpoints.len() {
                let checkpoint = next.checkpoints[index];
                if checkpoint.revealed {
                    continue;
                }
                if !self.all_passed(checkpoint.length, &next.positions) {
                    break;
                }
                next.checkpoints[index].revealed = true;

                let slot = next.positions.entry(checkpoint.competitor).or_insert(0);
                let from = *slot;
                let to = from.min(checkpoint.length);
                *slot = to;

                tracing::trace!(
                    seed = %self.seed,
                    turn = next.turn_count,
                    length = checkpoint.length,
                    competitor = checkpoint.competitor.id(),
                    from,
                    to,
                    "checkpoint revealed"
                );
                checkpoint_events.push(CheckpointEvent {
                    length: checkpoint.length,
                    competitor: checkpoint.competitor,
                    from,
                    to,
                });
            }
        }

        let winner = (moved_to >= track_length).then_some(drawn);
        let event = TurnEvent {
            turn_count: next.turn_count,
            drawn,
            moved_from,
            moved_to,
            checkpoint_events,
            winner,
        };
        (next, event)
    }

    /// Runs turns until someone finishes.
    ///
    /// # Errors
    ///
    /// [`RaceError::SimulationExhausted`] if the turn cap from
    /// [`RaceConfig::max_turns`] is reached without a winner. This indicates a
    /// defect in the engine and should not be retried.
    pub fn simulate(mut self) -> Result<RaceResult, RaceError> {
        let max_turns = self.config.max_turns();
        tracing::debug!(
            seed = %self.seed,
            track_length = self.config.track_length,
            competitors = self.config.competitors.len(),
            checkpoints = self.config.checkpoints_enabled,
            "race started"
        );

        let mut state = self.initial_state();
        let mut frames = vec![state.frame()];
        let mut events = Vec::new();

        for _ in 0..max_turns {
            let (next, event) = self.play_turn(&state);
            state = next;
            frames.push(state.frame());
            let winner = event.winner;
            events.push(event);

            if let Some(winner) = winner {
                tracing::debug!(
                    seed = %self.seed,
                    winner = winner.id(),
                    turns = state.turn_count,
                    "race finished"
                );
                return Ok(RaceResult {
                    seed: self.seed,
                    config: self.config,
                    winner,
                    turn_count: state.turn_count,
                    frames,
                    events,
                });
            }
        }

        tracing::error!(seed = %self.seed, max_turns, "race exhausted turn cap without a winner");
        Err(RaceError::SimulationExhausted {
            seed: self.seed,
            max_turns,
        })
    }
}
