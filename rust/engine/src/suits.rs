use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four racers. Declaration order is the stable tie-break order
/// used by standings and leaderboards; it never grants a gameplay advantage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Hearts (♥)
    Hearts,
    /// Clubs (♣)
    Clubs,
    /// Diamonds (♦)
    Diamonds,
    /// Spades (♠)
    Spades,
}

impl Suit {
    /// Stable lowercase identifier, also the serialized form.
    pub fn id(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Spades => "spades",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '\u{2665}',
            Suit::Clubs => '\u{2663}',
            Suit::Diamonds => '\u{2666}',
            Suit::Spades => '\u{2660}',
        }
    }

    /// Index in the stable competitor order.
    pub fn order(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known suit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown suit: {0}")]
pub struct UnknownSuit(pub String);

impl FromStr for Suit {
    type Err = UnknownSuit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hearts" | "h" => Ok(Suit::Hearts),
            "clubs" | "c" => Ok(Suit::Clubs),
            "diamonds" | "d" => Ok(Suit::Diamonds),
            "spades" | "s" => Ok(Suit::Spades),
            _ => Err(UnknownSuit(s.to_string())),
        }
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_declaration() {
        let order: Vec<usize> = all_suits().iter().map(|s| s.order()).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn parses_ids_and_short_forms() {
        assert_eq!("hearts".parse::<Suit>(), Ok(Suit::Hearts));
        assert_eq!("SPADES".parse::<Suit>(), Ok(Suit::Spades));
        assert_eq!("d".parse::<Suit>(), Ok(Suit::Diamonds));
        assert!("stars".parse::<Suit>().is_err());
    }

    #[test]
    fn serializes_as_id() {
        let s = serde_json::to_string(&Suit::Clubs).unwrap();
        assert_eq!(s, "\"clubs\"");
        let back: Suit = serde_json::from_str("\"diamonds\"").unwrap();
        assert_eq!(back, Suit::Diamonds);
    }
}
