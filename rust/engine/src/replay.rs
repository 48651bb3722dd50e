use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::RaceEngine;
use crate::errors::{RaceError, ReplayError};
use crate::race::{Frame, RaceConfig, RaceResult, TurnEvent};
use crate::rng::Seed;
use crate::suits::Suit;

/// Version tag carried by every replay and ghost payload.
pub const REPLAY_SCHEMA_VERSION: u32 = 1;

pub fn format_replay_id(seed: &Seed, turn_count: u32) -> String {
    format!("replay:{}:{}", seed, turn_count)
}

/// Complete, versioned record of one race.
/// Built once from a [`RaceResult`] and read-only afterwards. Serializes
/// for export only; ghost payloads are the format that is read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Replay {
    /// Stable identifier (format: `replay:{seed}:{turnCount}`)
    id: String,
    schema_version: u32,
    /// Creation time (RFC3339)
    created_at: String,
    seed: Seed,
    config: RaceConfig,
    winner: Suit,
    turn_count: u32,
    frames: Vec<Frame>,
    events: Vec<TurnEvent>,
}

impl Replay {
    /// Wraps a race trace. The result is copied, never shared.
    pub fn from_result(result: &RaceResult) -> Self {
        Self {
            id: format_replay_id(&result.seed, result.turn_count),
            schema_version: REPLAY_SCHEMA_VERSION,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            seed: result.seed.clone(),
            config: result.config.clone(),
            winner: result.winner,
            turn_count: result.turn_count,
            frames: result.frames.clone(),
            events: result.events.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }
    pub fn created_at(&self) -> &str {
        &self.created_at
    }
    pub fn seed(&self) -> &Seed {
        &self.seed
    }
    pub fn config(&self) -> &RaceConfig {
        &self.config
    }
    pub fn winner(&self) -> Suit {
        self.winner
    }
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
    pub fn events(&self) -> &[TurnEvent] {
        &self.events
    }

    /// Finishing place of `suit` in the last frame.
    pub fn placement_of(&self, suit: Suit) -> Option<usize> {
        self.frames.last().and_then(|f| f.placement_of(suit))
    }

    /// True when both replays carry the same trace, ignoring id metadata
    /// such as the creation time.
    pub fn same_trace(&self, other: &Replay) -> bool {
        self.seed == other.seed
            && self.config == other.config
            && self.winner == other.winner
            && self.turn_count == other.turn_count
            && self.frames == other.frames
            && self.events == other.events
    }
}

/// Re-runs the engine for `(seed, config)` and wraps the trace.
pub fn build_replay_from_seed(seed: impl Into<Seed>, config: RaceConfig) -> Result<Replay, RaceError> {
    let result = RaceEngine::run(seed, config)?;
    Ok(Replay::from_result(&result))
}

/// Minimal transmitted form of a replay: enough to regenerate the trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GhostPayload {
    pub schema_version: u32,
    pub replay_id: String,
    pub seed: Seed,
    pub config: RaceConfig,
}

impl GhostPayload {
    pub fn to_json(&self) -> Result<String, ReplayError> {
        serde_json::to_string(self).map_err(|e| ReplayError::Malformed(e.to_string()))
    }

    /// Parses a payload. The version is checked before the body so that a
    /// newer layout is reported as a version mismatch rather than garbage.
    pub fn from_json(s: &str) -> Result<Self, ReplayError> {
        let value: serde_json::Value =
            serde_json::from_str(s).map_err(|e| ReplayError::Malformed(e.to_string()))?;
        let found = value
            .get("schemaVersion")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| ReplayError::Malformed("missing schemaVersion".into()))?;
        check_version(u32::try_from(found).unwrap_or(u32::MAX))?;
        serde_json::from_value(value).map_err(|e| ReplayError::Malformed(e.to_string()))
    }
}

fn check_version(found: u32) -> Result<(), ReplayError> {
    if found != REPLAY_SCHEMA_VERSION {
        tracing::warn!(
            found,
            expected = REPLAY_SCHEMA_VERSION,
            "rejecting replay payload with unsupported schema version"
        );
        return Err(ReplayError::UnsupportedVersion {
            found,
            expected: REPLAY_SCHEMA_VERSION,
        });
    }
    Ok(())
}

pub fn to_ghost_payload(replay: &Replay) -> GhostPayload {
    GhostPayload {
        schema_version: REPLAY_SCHEMA_VERSION,
        replay_id: replay.id.clone(),
        seed: replay.seed.clone(),
        config: replay.config.clone(),
    }
}

/// Regenerates the full replay described by a ghost payload.
///
/// # Errors
///
/// [`ReplayError::UnsupportedVersion`] when the payload was written under a
/// different schema. Payloads are never migrated; discard it and start a
/// fresh race instead.
pub fn from_ghost_payload(payload: &GhostPayload) -> Result<Replay, ReplayError> {
    check_version(payload.schema_version)?;
    Ok(build_replay_from_seed(
        payload.seed.clone(),
        payload.config.clone(),
    )?)
}
