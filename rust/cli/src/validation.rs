//! Validation of numeric command-line arguments.
//!
//! Each validator returns the value to use (with its default applied) or a
//! message suitable for `ui::write_error`.

/// Most races a single `play` or `verify` invocation will run.
pub const MAX_RACES: u32 = 10_000;
/// Longest track the CLI accepts.
pub const MAX_TRACK_LENGTH: u32 = 1_000;

/// Resolve a `--races` value: defaults to `default`, must be in `1..=MAX_RACES`.
///
/// # Example
///
/// ```rust
/// # use racing_suits_cli::validation::validate_races;
/// assert_eq!(validate_races(None, 3), Ok(3));
/// assert!(validate_races(Some(0), 3).is_err());
/// ```
pub fn validate_races(races: Option<u32>, default: u32) -> Result<u32, String> {
    let races = races.unwrap_or(default);
    if races == 0 {
        return Err("races must be >= 1".into());
    }
    if races > MAX_RACES {
        return Err(format!("races must be <= {}", MAX_RACES));
    }
    Ok(races)
}

pub fn validate_track_length(track_length: u32) -> Result<u32, String> {
    if track_length == 0 {
        return Err("track length must be >= 1".into());
    }
    if track_length > MAX_TRACK_LENGTH {
        return Err(format!("track length must be <= {}", MAX_TRACK_LENGTH));
    }
    Ok(track_length)
}

pub fn validate_copies(copies: usize) -> Result<usize, String> {
    if copies == 0 {
        return Err("copies must be >= 1".into());
    }
    Ok(copies)
}
