/// Allowed ante amounts, ascending.
pub const ANTE_OPTIONS: [u32; 6] = [5, 10, 20, 50, 100, 200];
/// Chips a fresh session starts with, and the refill amount.
pub const STARTING_CHIPS: u32 = 200;

/// Ante amounts from `options` the player can currently cover.
pub fn available_antes(options: &[u32], chips: u32) -> Vec<u32> {
    options.iter().copied().filter(|&a| a <= chips).collect()
}

/// Resolves a requested ante against the allowed options and the stack.
///
/// Rules, in order:
/// 1. the request itself when it is an allowed, affordable amount;
/// 2. the largest affordable amount not above the request;
/// 3. the smallest affordable amount;
/// 4. the minimum option when nothing is affordable.
///
/// Never fails: every request maps to some allowed amount.
///
/// # Examples
///
/// ```
/// use racing_suits_engine::rules::{normalize_ante, ANTE_OPTIONS};
///
/// assert_eq!(normalize_ante(&ANTE_OPTIONS, 20, 200), 20);
/// // 30 is not an option: round down to 20
/// assert_eq!(normalize_ante(&ANTE_OPTIONS, 30, 200), 20);
/// // 100 is not affordable with 60 chips: largest affordable below it
/// assert_eq!(normalize_ante(&ANTE_OPTIONS, 100, 60), 50);
/// // below every option: smallest affordable
/// assert_eq!(normalize_ante(&ANTE_OPTIONS, 1, 60), 5);
/// // nothing affordable: the minimum anyway
/// assert_eq!(normalize_ante(&ANTE_OPTIONS, 50, 3), 5);
/// ```
pub fn normalize_ante(options: &[u32], requested: u32, chips: u32) -> u32 {
    let minimum = options.first().copied().unwrap_or(0);
    let available = available_antes(options, chips);
    if available.is_empty() {
        return minimum;
    }
    if available.contains(&requested) {
        return requested;
    }
    available
        .iter()
        .copied()
        .rfind(|&a| a <= requested)
        .unwrap_or(available[0])
}

/// Inclusive range of ante amounts offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnteBounds {
    pub min: u32,
    pub max: u32,
}

/// `min` is always the minimum option; `max` is the largest affordable
/// option, or the minimum when nothing is affordable.
pub fn ante_bounds(options: &[u32], chips: u32) -> AnteBounds {
    let min = options.first().copied().unwrap_or(0);
    let max = available_antes(options, chips).last().copied().unwrap_or(min);
    AnteBounds { min, max }
}
