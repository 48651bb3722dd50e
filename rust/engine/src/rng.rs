//! Seeded random source with derivable sub-streams.
//!
//! Every generator is a ChaCha20 stream keyed by a SHA-256 digest of its seed
//! label. Forking hashes the parent key together with a namespace, so a child
//! stream depends only on `(parent seed, namespace)` and never on how far the
//! parent has been advanced.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Seed label used when no seed (or an empty one) is supplied.
pub const DEFAULT_SEED: &str = "racing-suits-default-seed";

const SEED_DOMAIN: &[u8] = b"racing-suits/seed\0";
const FORK_DOMAIN: &[u8] = b"racing-suits/fork\0";

/// A normalized, never-empty seed label.
///
/// Numbers and strings both normalize to their text form, so `Seed::from(42)`
/// and `Seed::from("42")` describe the same race.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Seed(String);

impl Seed {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed(DEFAULT_SEED.to_string())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Seed::default()
        } else {
            Seed(value)
        }
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::from(value.to_string())
    }
}

impl From<&String> for Seed {
    fn from(value: &String) -> Self {
        Seed::from(value.clone())
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed(value.to_string())
    }
}

impl<T: Into<Seed>> From<Option<T>> for Seed {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl From<Seed> for String {
    fn from(value: Seed) -> Self {
        value.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hashes a seed label into a stream key.
pub fn seed_key(seed: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(SEED_DOMAIN);
    hasher.update(seed.as_bytes());
    hasher.finalize().into()
}

/// Derives a child stream key from a parent key and a namespace.
///
/// The namespace is length-prefixed so that no two `(parent, namespace)`
/// pairs can share an input.
pub fn derive_stream_key(parent: &[u8; 32], namespace: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(FORK_DOMAIN);
    hasher.update(parent);
    hasher.update((namespace.len() as u64).to_le_bytes());
    hasher.update(namespace.as_bytes());
    hasher.finalize().into()
}

/// Deterministic pseudo-random generator.
///
/// # Examples
///
/// ```
/// use racing_suits_engine::rng::SeededRng;
///
/// let mut a = SeededRng::new("photo-finish");
/// let mut b = SeededRng::new("photo-finish");
/// assert_eq!(a.next_int(100), b.next_int(100));
///
/// // Forks are independent of how far the parent advanced.
/// let mut moved = SeededRng::new("photo-finish");
/// moved.next();
/// let mut fresh = SeededRng::new("photo-finish");
/// assert_eq!(moved.fork("race-deck").next(), fresh.fork("race-deck").next());
/// ```
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: Seed,
    key: [u8; 32],
    rng: ChaCha20Rng,
}

impl SeededRng {
    pub fn new(seed: impl Into<Seed>) -> Self {
        let seed = seed.into();
        let key = seed_key(seed.as_str());
        Self::from_key(seed, key)
    }

    fn from_key(seed: Seed, key: [u8; 32]) -> Self {
        Self {
            seed,
            key,
            rng: ChaCha20Rng::from_seed(key),
        }
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Uniform float in `[0, 1)` built from the top 53 bits of the stream.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
        (self.rng.next_u64() >> 11) as f64 * SCALE
    }

    /// Integer in `[0, max_exclusive)`; zero when the bound is zero.
    pub fn next_int(&mut self, max_exclusive: usize) -> usize {
        if max_exclusive == 0 {
            return 0;
        }
        let v = (self.next() * max_exclusive as f64).floor() as usize;
        v.min(max_exclusive - 1)
    }

    /// Independent child stream named by `namespace`.
    pub fn fork(&self, namespace: &str) -> SeededRng {
        let label = Seed::from(format!("{}:{}", self.seed, namespace));
        Self::from_key(label, derive_stream_key(&self.key, namespace))
    }

    /// Fisher-Yates shuffle driven by [`SeededRng::next_int`].
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        for index in (1..items.len()).rev() {
            let swap_index = self.next_int(index + 1);
            items.swap(index, swap_index);
        }
    }
}
