use std::collections::VecDeque;

use crate::errors::RaceError;
use crate::rng::SeededRng;
use crate::suits::Suit;

/// Default number of tokens per competitor in a freshly loaded shoe.
pub const DEFAULT_COPIES_PER_SUIT: usize = 13;

/// An endless supply of competitor draws.
///
/// The race engine pulls movement and checkpoint outcomes through this seam so
/// that tests and what-if tooling can script the exact order of draws.
pub trait DrawSource {
    fn draw(&mut self) -> Suit;
}

/// Reshuffling draw deck holding `copies_per_suit` tokens of each competitor.
///
/// Within one load of the shoe, draws are a uniform permutation of the
/// multiset. When the shoe runs dry it is rebuilt and reshuffled from the same
/// stream, so consecutive loads are independent of each other.
///
/// # Examples
///
/// ```
/// use racing_suits_engine::deck::{DrawSource, Shoe};
/// use racing_suits_engine::rng::SeededRng;
/// use racing_suits_engine::suits::all_suits;
///
/// let mut a = Shoe::new(&all_suits(), 13, SeededRng::new(7)).unwrap();
/// let mut b = Shoe::new(&all_suits(), 13, SeededRng::new(7)).unwrap();
/// assert_eq!(a.remaining(), 52);
/// assert_eq!(a.draw(), b.draw());
/// assert_eq!(a.remaining(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct Shoe {
    competitors: Vec<Suit>,
    copies_per_suit: usize,
    tokens: Vec<Suit>,
    rng: SeededRng,
}

impl Shoe {
    /// Loads and shuffles the first shoe.
    ///
    /// # Errors
    ///
    /// `RaceError::InvalidConfig` when `competitors` is empty or
    /// `copies_per_suit` is zero.
    pub fn new(
        competitors: &[Suit],
        copies_per_suit: usize,
        rng: SeededRng,
    ) -> Result<Self, RaceError> {
        if competitors.is_empty() {
            return Err(RaceError::InvalidConfig(
                "a shoe needs at least one competitor".into(),
            ));
        }
        if copies_per_suit == 0 {
            return Err(RaceError::InvalidConfig(
                "a shoe needs at least one copy per suit".into(),
            ));
        }
        let mut shoe = Self {
            competitors: competitors.to_vec(),
            copies_per_suit,
            tokens: Vec::with_capacity(competitors.len() * copies_per_suit),
            rng,
        };
        shoe.reset();
        Ok(shoe)
    }

    /// Rebuilds the full multiset and shuffles it.
    pub fn reset(&mut self) {
        self.tokens.clear();
        for &suit in &self.competitors {
            self.tokens
                .extend(std::iter::repeat(suit).take(self.copies_per_suit));
        }
        self.rng.shuffle_in_place(&mut self.tokens);
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    /// Size of one full load.
    pub fn capacity(&self) -> usize {
        self.competitors.len() * self.copies_per_suit
    }
}

impl DrawSource for Shoe {
    fn draw(&mut self) -> Suit {
        if self.tokens.is_empty() {
            self.reset();
        }
        // `new` guarantees a non-empty load.
        self.tokens.pop().unwrap_or(self.competitors[0])
    }
}

/// Draws from a fixed script, starting over once it is used up.
///
/// # Examples
///
/// ```
/// use racing_suits_engine::deck::{DrawSource, ScriptedDraws};
/// use racing_suits_engine::suits::Suit;
///
/// let mut draws = ScriptedDraws::new([Suit::Hearts, Suit::Spades]).unwrap();
/// assert_eq!(draws.draw(), Suit::Hearts);
/// assert_eq!(draws.draw(), Suit::Spades);
/// assert_eq!(draws.draw(), Suit::Hearts);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedDraws {
    script: Vec<Suit>,
    pending: VecDeque<Suit>,
}

impl ScriptedDraws {
    /// # Errors
    ///
    /// `RaceError::InvalidConfig` for an empty script.
    pub fn new(script: impl IntoIterator<Item = Suit>) -> Result<Self, RaceError> {
        let script: Vec<Suit> = script.into_iter().collect();
        if script.is_empty() {
            return Err(RaceError::InvalidConfig("draw script is empty".into()));
        }
        Ok(Self {
            pending: script.iter().copied().collect(),
            script,
        })
    }
}

impl DrawSource for ScriptedDraws {
    fn draw(&mut self) -> Suit {
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        self.pending.pop_front().unwrap_or(self.script[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suits::all_suits;

    #[test]
    fn load_has_exact_multiset() {
        let mut shoe = Shoe::new(&all_suits(), 13, SeededRng::new("multiset")).unwrap();
        let mut counts = [0usize; 4];
        for _ in 0..52 {
            counts[shoe.draw().order()] += 1;
        }
        assert_eq!(counts, [13, 13, 13, 13]);
        assert_eq!(shoe.remaining(), 0);
    }

    #[test]
    fn draw_reshuffles_when_empty() {
        let mut shoe = Shoe::new(&[Suit::Clubs, Suit::Spades], 1, SeededRng::new("reload")).unwrap();
        shoe.draw();
        shoe.draw();
        assert_eq!(shoe.remaining(), 0);
        shoe.draw();
        assert_eq!(shoe.remaining(), 1);
    }

    #[test]
    fn capacity_counts_every_token() {
        let shoe = Shoe::new(&[Suit::Hearts, Suit::Diamonds], 3, SeededRng::new("cap")).unwrap();
        assert_eq!(shoe.capacity(), 6);
        assert_eq!(shoe.remaining(), 6);
    }

    #[test]
    fn shoe_rejects_an_empty_field() {
        let err = Shoe::new(&[], 13, SeededRng::new("empty")).unwrap_err();
        assert!(matches!(err, RaceError::InvalidConfig(_)));
    }

    #[test]
    fn shoe_rejects_zero_copies() {
        let err = Shoe::new(&all_suits(), 0, SeededRng::new("zero")).unwrap_err();
        assert!(matches!(err, RaceError::InvalidConfig(_)));
    }

    #[test]
    fn empty_script_is_rejected() {
        assert!(ScriptedDraws::new(Vec::new()).is_err());
    }
}
