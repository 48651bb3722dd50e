//! Suit, turn, settlement and leaderboard formatters for terminal display.
//!
//! Suits are rendered with Unicode symbols (♥ ♣ ♦ ♠) where the terminal is
//! expected to support them, otherwise with their initial letter.
//!
//! ## Example
//!
//! ```rust
//! use racing_suits_engine::suits::Suit;
//! use racing_suits_cli::formatters::format_suit;
//!
//! let s = format_suit(Suit::Spades);
//! assert!(s == "♠ Spades" || s == "s Spades");
//! ```

use racing_suits_engine::race::{Frame, TurnEvent};
use racing_suits_engine::session::{LeaderboardEntry, Leaderboards, Settlement};
use racing_suits_engine::suits::Suit;

/// Check if the terminal supports Unicode suit symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere assumes support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn suit_glyph(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        suit.id()[..1].to_string()
    }
}

/// Glyph followed by the display name, e.g. `♥ Hearts`.
pub fn format_suit(suit: Suit) -> String {
    format!("{} {}", suit_glyph(suit), suit.name())
}

/// One line per turn plus one indented line per checkpoint reveal.
pub fn format_turn(event: &TurnEvent) -> String {
    let mut line = format!(
        "Turn {:>3}: {} {} -> {}",
        event.turn_count,
        format_suit(event.drawn),
        event.moved_from,
        event.moved_to
    );
    for cp in &event.checkpoint_events {
        line.push_str(&format!(
            "\n          checkpoint {} revealed {}: {} -> {}",
            cp.length,
            format_suit(cp.competitor),
            cp.from,
            cp.to
        ));
    }
    if let Some(winner) = event.winner {
        line.push_str(&format!("  [{} finishes]", format_suit(winner)));
    }
    line
}

/// Lane view of a frame: one row per competitor in standings order.
///
/// ```text
/// 1. ♣ Clubs     |=====C     | 5
/// ```
pub fn format_lanes(frame: &Frame, track_length: u32) -> String {
    let mut rows = Vec::new();
    for (place, (suit, pos)) in frame.standings().into_iter().enumerate() {
        let marker = suit.id()[..1].to_ascii_uppercase();
        let mut lane = String::with_capacity(track_length as usize + 1);
        for step in 0..=track_length {
            if step == pos {
                lane.push_str(&marker);
            } else if step < pos {
                lane.push('=');
            } else {
                lane.push(' ');
            }
        }
        rows.push(format!(
            "{}. {:<10} |{}| {}",
            place + 1,
            format_suit(suit),
            lane,
            pos
        ));
    }
    rows.join("\n")
}

pub fn format_settlement(s: &Settlement) -> String {
    let outcome = if s.won { "WON" } else { "LOST" };
    let mut line = format!(
        "{} {:+} chips, stack {} | wins {}/{} streak {} (best {}) | net {:+}, won {}",
        outcome,
        s.chip_delta,
        s.chips_remaining,
        s.wins,
        s.total_games,
        s.current_streak,
        s.best_streak,
        s.total_chip_delta,
        s.total_chips_won
    );
    if s.refill_applied {
        line.push_str(" | stack refilled");
    }
    line
}

fn format_entry(rank: usize, e: &LeaderboardEntry) -> String {
    format!(
        "{:>2}. {:<10} games {:>3}  wins {:>3}  best {:>2}  win% {:>5.1}  roi% {:>6.1}  net {:+}",
        rank,
        format_suit(e.suit),
        e.games,
        e.wins,
        e.best_streak,
        e.win_rate,
        e.roi,
        e.chips_net
    )
}

pub fn format_leaderboards(boards: &Leaderboards) -> String {
    let mut out = String::from("Wins leaderboard:\n");
    for (i, e) in boards.wins_leaderboard.iter().enumerate() {
        out.push_str(&format_entry(i + 1, e));
        out.push('\n');
    }
    out.push_str("Chip leaderboard:\n");
    for (i, e) in boards.chip_leaderboard.iter().enumerate() {
        out.push_str(&format_entry(i + 1, e));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use racing_suits_engine::race::{CheckpointEvent, Positions};

    #[test]
    fn suit_includes_name() {
        for suit in racing_suits_engine::suits::all_suits() {
            assert!(format_suit(suit).ends_with(suit.name()));
        }
    }

    #[test]
    fn turn_lists_setbacks_and_finish() {
        let event = TurnEvent {
            turn_count: 12,
            drawn: Suit::Clubs,
            moved_from: 3,
            moved_to: 4,
            checkpoint_events: vec![CheckpointEvent {
                length: 2,
                competitor: Suit::Spades,
                from: 5,
                to: 2,
            }],
            winner: None,
        };
        let text = format_turn(&event);
        assert!(text.starts_with("Turn  12:"));
        assert!(text.contains("3 -> 4"));
        assert!(text.contains("checkpoint 2 revealed"));
        assert!(text.contains("5 -> 2"));
        assert!(!text.contains("finishes"));
    }

    #[test]
    fn lanes_follow_standings() {
        let mut positions = Positions::new();
        positions.insert(Suit::Hearts, 1);
        positions.insert(Suit::Clubs, 3);
        let frame = Frame {
            turn_count: 4,
            positions,
            checkpoints: vec![],
        };
        let text = format_lanes(&frame, 4);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. "));
        assert!(lines[0].contains("|===C |"));
        assert!(lines[1].contains("|=H   |"));
    }

    #[test]
    fn settlement_marks_refill() {
        let s = Settlement {
            won: false,
            chip_delta: -200,
            chips_remaining: 200,
            refill_applied: true,
            wins: 0,
            current_streak: 0,
            best_streak: 0,
            total_games: 1,
            total_chip_delta: -200,
            total_chips_won: 0,
        };
        let text = format_settlement(&s);
        assert!(text.starts_with("LOST -200 chips, stack 200"));
        assert!(text.ends_with("stack refilled"));
    }
}
