//! Wallet and statistics for one play session.
//!
//! [`SessionState`] is the single writer for chips, ante, selection and
//! per-suit statistics. Its only mutators are [`SessionState::select_competitor`],
//! [`SessionState::set_ante`], [`SessionState::settle_race`] and
//! [`SessionState::close_race`]; session totals and leaderboards are derived
//! from the per-suit records on every read.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

use crate::errors::SessionError;
use crate::race::RaceConfig;
use crate::replay::{build_replay_from_seed, Replay};
use crate::rng::Seed;
use crate::rules::{self, AnteBounds, ANTE_OPTIONS, STARTING_CHIPS};
use crate::streak::Streak;
use crate::suits::{all_suits, Suit};

/// Most recent replays kept by a session.
pub const DEFAULT_REPLAY_ARCHIVE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// Opening stack, also the refill amount
    pub starting_chips: u32,
    /// Allowed ante amounts, strictly ascending
    pub ante_options: Vec<u32>,
    /// Capacity of the replay archive
    pub replay_archive: usize,
    /// Rules for races opened by this session
    pub race: RaceConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            ante_options: ANTE_OPTIONS.to_vec(),
            replay_archive: DEFAULT_REPLAY_ARCHIVE,
            race: RaceConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), SessionError> {
        let Some(&minimum) = self.ante_options.first() else {
            return Err(SessionError::InvalidConfig(
                "ante_options must not be empty".into(),
            ));
        };
        if minimum == 0 {
            return Err(SessionError::InvalidConfig(
                "ante options must be positive".into(),
            ));
        }
        if self.ante_options.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SessionError::InvalidConfig(
                "ante_options must be strictly ascending".into(),
            ));
        }
        if self.starting_chips < minimum {
            return Err(SessionError::InvalidConfig(format!(
                "starting_chips ({}) must cover the minimum ante ({})",
                self.starting_chips, minimum
            )));
        }
        self.race.validate()?;
        Ok(())
    }
}

/// Running record for races where the player backed one suit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitStats {
    pub games: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    /// Sum of signed chip deltas
    pub chips_net: i64,
    /// Sum of antes staked
    pub chips_risked: u64,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl SuitStats {
    /// Win percentage rounded to one decimal; zero before the first game.
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        round1(f64::from(self.wins) / f64::from(self.games) * 100.0)
    }

    /// Return on chips risked, as a percentage rounded to one decimal.
    pub fn roi(&self) -> f64 {
        if self.chips_risked == 0 {
            return 0.0;
        }
        round1(self.chips_net as f64 / self.chips_risked as f64 * 100.0)
    }

    /// Chips collected from winning races. Every game stakes its ante and
    /// moves the net by exactly that amount, so this is `(net + risked) / 2`.
    pub fn chips_won(&self) -> u64 {
        (self.chips_net + self.chips_risked as i64).max(0) as u64 / 2
    }

    fn record(&mut self, won: bool, ante: u32, delta: i64) {
        self.games += 1;
        if won {
            self.wins += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
        self.chips_net += delta;
        self.chips_risked += u64::from(ante);
    }
}

/// Outcome of settling one race, handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub won: bool,
    pub chip_delta: i64,
    pub chips_remaining: u32,
    pub refill_applied: bool,
    pub wins: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_games: u32,
    pub total_chip_delta: i64,
    pub total_chips_won: u64,
}

/// One suit's row on a leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub suit: Suit,
    pub games: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub chips_net: i64,
    pub chips_risked: u64,
    pub win_rate: f64,
    pub roi: f64,
}

impl LeaderboardEntry {
    fn new(suit: Suit, stats: &SuitStats) -> Self {
        Self {
            suit,
            games: stats.games,
            wins: stats.wins,
            current_streak: stats.current_streak,
            best_streak: stats.best_streak,
            chips_net: stats.chips_net,
            chips_risked: stats.chips_risked,
            win_rate: stats.win_rate(),
            roi: stats.roi(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboards {
    /// By wins, best streak, win rate, then suit order
    pub wins_leaderboard: Vec<LeaderboardEntry>,
    /// By ROI, net chips, games, then suit order
    pub chip_leaderboard: Vec<LeaderboardEntry>,
}

/// A simulated race waiting to be settled.
///
/// Captures the backed suit and ante at the moment the race was opened.
/// Dropping it without calling [`SessionState::close_race`] discards the race
/// and leaves the session untouched.
#[derive(Debug, Clone)]
pub struct RaceSession {
    replay: Replay,
    backed: Suit,
    ante: u32,
}

impl RaceSession {
    pub fn replay(&self) -> &Replay {
        &self.replay
    }
    pub fn backed(&self) -> Suit {
        self.backed
    }
    pub fn ante(&self) -> u32 {
        self.ante
    }
    pub fn winner(&self) -> Suit {
        self.replay.winner()
    }
}

/// Long-lived wallet, selection and statistics for one player.
///
/// # Examples
///
/// ```
/// use racing_suits_engine::session::SessionState;
/// use racing_suits_engine::suits::Suit;
///
/// let mut session = SessionState::new();
/// session.select_competitor(Suit::Spades);
/// assert_eq!(session.set_ante(20), 20);
///
/// let settlement = session.settle_race(Suit::Spades).unwrap();
/// assert!(settlement.won);
/// assert_eq!(settlement.chips_remaining, 220);
/// assert_eq!(session.total_games(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SessionState {
    config: SessionConfig,
    chips: u32,
    selected: Option<Suit>,
    ante: u32,
    stats: BTreeMap<Suit, SuitStats>,
    streak: Streak,
    archive: VecDeque<Replay>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::build(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SessionConfig) -> Self {
        let minimum = config.ante_options.first().copied().unwrap_or(0);
        Self {
            chips: config.starting_chips,
            selected: None,
            ante: minimum,
            stats: all_suits().iter().map(|s| (*s, SuitStats::default())).collect(),
            streak: Streak::default(),
            archive: VecDeque::with_capacity(config.replay_archive),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn ante(&self) -> u32 {
        self.ante
    }
    pub fn selected_competitor(&self) -> Option<Suit> {
        self.selected
    }
    pub fn starting_chips(&self) -> u32 {
        self.config.starting_chips
    }
    pub fn min_ante(&self) -> u32 {
        self.config.ante_options.first().copied().unwrap_or(0)
    }
    pub fn available_antes(&self) -> Vec<u32> {
        rules::available_antes(&self.config.ante_options, self.chips)
    }
    pub fn ante_bounds(&self) -> AnteBounds {
        rules::ante_bounds(&self.config.ante_options, self.chips)
    }

    pub fn select_competitor(&mut self, suit: Suit) {
        self.selected = Some(suit);
    }

    /// Normalizes and stores the ante; returns the amount actually set.
    pub fn set_ante(&mut self, requested: u32) -> u32 {
        self.ante = rules::normalize_ante(&self.config.ante_options, requested, self.chips);
        self.ante
    }

    /// Settles a finished race for the currently selected suit and ante.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoCompetitorSelected`] when nothing is selected. The
    /// session is left unchanged in that case.
    pub fn settle_race(&mut self, winner: Suit) -> Result<Settlement, SessionError> {
        let backed = self.selected.ok_or(SessionError::NoCompetitorSelected)?;
        Ok(self.apply_settlement(backed, self.ante, winner))
    }

    fn apply_settlement(&mut self, backed: Suit, ante: u32, winner: Suit) -> Settlement {
        let won = backed == winner;
        let chip_delta = if won { i64::from(ante) } else { -i64::from(ante) };
        self.chips = if won {
            self.chips.saturating_add(ante)
        } else {
            self.chips.saturating_sub(ante)
        };
        self.streak.record(won);

        let minimum = self.min_ante();
        let mut refill_applied = false;
        if self.chips < minimum {
            self.chips = self.config.starting_chips;
            refill_applied = true;
            tracing::info!(
                chips = self.chips,
                "chip stack fell below the minimum ante; refilled"
            );
        }
        self.ante = self.ante.max(minimum).min(self.chips);

        self.stats
            .entry(backed)
            .or_default()
            .record(won, ante, chip_delta);

        tracing::info!(
            backed = backed.id(),
            winner = winner.id(),
            ante,
            chip_delta,
            chips = self.chips,
            "race settled"
        );

        Settlement {
            won,
            chip_delta,
            chips_remaining: self.chips,
            refill_applied,
            wins: self.wins(),
            current_streak: self.streak.current,
            best_streak: self.streak.best,
            total_games: self.total_games(),
            total_chip_delta: self.total_chip_delta(),
            total_chips_won: self.total_chips_won(),
        }
    }

    /// Simulates a race for the current selection and ante.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoCompetitorSelected`] without a selection,
    /// [`SessionError::NotRacing`] when the selected suit is not in the
    /// configured field, or a wrapped race error from the engine.
    pub fn open_race(&self, seed: impl Into<Seed>) -> Result<RaceSession, SessionError> {
        let backed = self.selected.ok_or(SessionError::NoCompetitorSelected)?;
        if !self.config.race.competitors.contains(&backed) {
            return Err(SessionError::NotRacing(backed));
        }
        let replay = build_replay_from_seed(seed, self.config.race.clone())?;
        Ok(RaceSession {
            replay,
            backed,
            ante: self.ante,
        })
    }

    /// Settles a race opened with [`SessionState::open_race`] and files its
    /// replay in the archive.
    pub fn close_race(&mut self, race: RaceSession) -> Settlement {
        let RaceSession {
            replay,
            backed,
            ante,
        } = race;
        let settlement = self.apply_settlement(backed, ante, replay.winner());
        if self.config.replay_archive > 0 {
            if self.archive.len() == self.config.replay_archive {
                self.archive.pop_front();
            }
            self.archive.push_back(replay);
        }
        settlement
    }

    /// Archived replays, oldest first.
    pub fn replays(&self) -> impl Iterator<Item = &Replay> {
        self.archive.iter()
    }

    pub fn stats(&self, suit: Suit) -> SuitStats {
        self.stats.get(&suit).copied().unwrap_or_default()
    }

    pub fn streak(&self) -> Streak {
        self.streak.snapshot()
    }

    pub fn total_games(&self) -> u32 {
        self.stats.values().map(|s| s.games).sum()
    }

    pub fn wins(&self) -> u32 {
        self.stats.values().map(|s| s.wins).sum()
    }

    pub fn total_chip_delta(&self) -> i64 {
        self.stats.values().map(|s| s.chips_net).sum()
    }

    pub fn total_chips_won(&self) -> u64 {
        self.stats.values().map(|s| s.chips_won()).sum()
    }

    pub fn leaderboards(&self) -> Leaderboards {
        let entries: Vec<LeaderboardEntry> = self
            .stats
            .iter()
            .map(|(suit, stats)| LeaderboardEntry::new(*suit, stats))
            .collect();

        let mut wins_leaderboard = entries.clone();
        wins_leaderboard.sort_by(|a, b| {
            b.wins
                .cmp(&a.wins)
                .then(b.best_streak.cmp(&a.best_streak))
                .then(b.win_rate.total_cmp(&a.win_rate))
                .then(a.suit.order().cmp(&b.suit.order()))
        });

        let mut chip_leaderboard = entries;
        chip_leaderboard.sort_by(|a, b| {
            b.roi
                .total_cmp(&a.roi)
                .then(b.chips_net.cmp(&a.chips_net))
                .then(b.games.cmp(&a.games))
                .then(a.suit.order().cmp(&b.suit.order()))
        });

        Leaderboards {
            wins_leaderboard,
            chip_leaderboard,
        }
    }
}
