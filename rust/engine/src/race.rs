use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::deck::DEFAULT_COPIES_PER_SUIT;
use crate::errors::RaceError;
use crate::rng::Seed;
use crate::suits::{all_suits, Suit};

/// Default number of lengths between the start and the finish line.
pub const DEFAULT_TRACK_LENGTH: u32 = 10;
/// Turns allowed per track length before a race is declared exhausted.
pub const MAX_TURNS_MULTIPLIER: u32 = 250;
/// Lower bound on the turn cap for very short tracks.
pub const MIN_TURN_CAP: u32 = 30;

/// Distance travelled by each configured competitor.
pub type Positions = BTreeMap<Suit, u32>;

/// Race rules shared by every run with the same seed.
///
/// Missing fields take their defaults when deserialized, so a payload written
/// with only `trackLength` still describes a full configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RaceConfig {
    /// Lengths from start to finish (at least 1)
    pub track_length: u32,
    /// Ordered, non-empty set of racers
    pub competitors: Vec<Suit>,
    /// Tokens per competitor in each shoe load
    pub copies_per_suit: usize,
    /// Whether side cards are dealt at every interior length
    pub checkpoints_enabled: bool,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            track_length: DEFAULT_TRACK_LENGTH,
            competitors: all_suits().to_vec(),
            copies_per_suit: DEFAULT_COPIES_PER_SUIT,
            checkpoints_enabled: true,
        }
    }
}

impl RaceConfig {
    pub fn validate(&self) -> Result<(), RaceError> {
        if self.track_length == 0 {
            return Err(RaceError::InvalidConfig(
                "track_length must be >= 1".into(),
            ));
        }
        if self.competitors.is_empty() {
            return Err(RaceError::InvalidConfig(
                "at least one competitor is required".into(),
            ));
        }
        for (i, suit) in self.competitors.iter().enumerate() {
            if self.competitors[..i].contains(suit) {
                return Err(RaceError::InvalidConfig(format!(
                    "competitor {} listed more than once",
                    suit.id()
                )));
            }
        }
        if self.copies_per_suit == 0 {
            return Err(RaceError::InvalidConfig(
                "copies_per_suit must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Hard cap on turns: `max(30, track_length * 250)`.
    pub fn max_turns(&self) -> u32 {
        MIN_TURN_CAP.max(self.track_length.saturating_mul(MAX_TURNS_MULTIPLIER))
    }
}

/// A side card sitting at one interior length of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    pub length: u32,
    /// Competitor sent back to this length once the card is revealed
    pub competitor: Suit,
    pub revealed: bool,
}

/// A setback applied while resolving checkpoints. `from == to` when the
/// assigned competitor was already at or behind the checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointEvent {
    pub length: u32,
    pub competitor: Suit,
    pub from: u32,
    pub to: u32,
}

/// Everything that happened during one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnEvent {
    pub turn_count: u32,
    pub drawn: Suit,
    pub moved_from: u32,
    pub moved_to: u32,
    pub checkpoint_events: Vec<CheckpointEvent>,
    pub winner: Option<Suit>,
}

/// Working state of a race between turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceState {
    pub turn_count: u32,
    pub positions: Positions,
    pub checkpoints: Vec<Checkpoint>,
}

impl RaceState {
    /// Owned snapshot of this state.
    pub fn frame(&self) -> Frame {
        Frame {
            turn_count: self.turn_count,
            positions: self.positions.clone(),
            checkpoints: self.checkpoints.clone(),
        }
    }
}

/// Snapshot of the race, taken before the first turn and after every turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub turn_count: u32,
    pub positions: Positions,
    pub checkpoints: Vec<Checkpoint>,
}

impl Frame {
    /// Competitors ordered by distance (furthest first), ties broken by the
    /// stable suit order.
    pub fn standings(&self) -> Vec<(Suit, u32)> {
        let mut order: Vec<(Suit, u32)> = self.positions.iter().map(|(s, p)| (*s, *p)).collect();
        order.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.order().cmp(&b.0.order())));
        order
    }

    /// 1-based place of `suit` in [`Frame::standings`].
    pub fn placement_of(&self, suit: Suit) -> Option<usize> {
        self.standings()
            .iter()
            .position(|(s, _)| *s == suit)
            .map(|i| i + 1)
    }
}

/// Full trace of one simulated race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceResult {
    pub seed: Seed,
    pub config: RaceConfig,
    pub winner: Suit,
    pub turn_count: u32,
    /// `turn_count + 1` frames; frame 0 is the starting grid
    pub frames: Vec<Frame>,
    /// `turn_count` events, one per turn
    pub events: Vec<TurnEvent>,
}

impl RaceResult {
    pub fn final_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = RaceConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.track_length, 10);
        assert_eq!(cfg.copies_per_suit, 13);
        assert_eq!(cfg.competitors.len(), 4);
        assert_eq!(cfg.max_turns(), 2500);
    }

    #[test]
    fn short_tracks_keep_minimum_turn_cap() {
        let cfg = RaceConfig {
            track_length: 1,
            ..RaceConfig::default()
        };
        assert_eq!(cfg.max_turns(), 30);
    }

    #[test]
    fn rejects_bad_configs() {
        let zero_track = RaceConfig {
            track_length: 0,
            ..RaceConfig::default()
        };
        assert!(matches!(zero_track.validate(), Err(RaceError::InvalidConfig(_))));

        let nobody = RaceConfig {
            competitors: vec![],
            ..RaceConfig::default()
        };
        assert!(nobody.validate().is_err());

        let dup = RaceConfig {
            competitors: vec![Suit::Hearts, Suit::Hearts],
            ..RaceConfig::default()
        };
        assert!(dup.validate().is_err());

        let no_copies = RaceConfig {
            copies_per_suit: 0,
            ..RaceConfig::default()
        };
        assert!(no_copies.validate().is_err());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: RaceConfig = serde_json::from_str(r#"{"trackLength":4}"#).unwrap();
        assert_eq!(cfg.track_length, 4);
        assert_eq!(cfg.copies_per_suit, 13);
        assert!(cfg.checkpoints_enabled);
    }

    #[test]
    fn standings_break_ties_by_suit_order() {
        let mut positions = Positions::new();
        positions.insert(Suit::Spades, 3);
        positions.insert(Suit::Hearts, 1);
        positions.insert(Suit::Clubs, 3);
        positions.insert(Suit::Diamonds, 0);
        let frame = Frame {
            turn_count: 7,
            positions,
            checkpoints: vec![],
        };
        let order: Vec<Suit> = frame.standings().into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            order,
            vec![Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds]
        );
        assert_eq!(frame.placement_of(Suit::Spades), Some(2));
    }
}
