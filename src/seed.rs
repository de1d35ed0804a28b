//! Seed <-> shareable fragment conversion.
//!
//! A seed is shared as a decimal string zero-padded to three digits, for
//! example the `#007` fragment of a URL.

use crate::error::ConfigError;

/// Seed used when no fragment is present.
pub const DEFAULT_SEED: u64 = 1;

/// Renders `seed` zero-padded to at least three digits.
#[must_use]
pub fn format_seed(seed: u64) -> String {
    format!("{seed:03}")
}

/// Reads a seed back from a fragment, ignoring every non-digit character.
///
/// An empty fragment yields [`DEFAULT_SEED`]; a fragment without digits
/// yields 0.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSeed`] if the digits overflow a `u64`.
pub fn parse_seed(fragment: &str) -> Result<u64, ConfigError> {
    if fragment.is_empty() {
        return Ok(DEFAULT_SEED);
    }
    let digits: String = fragment.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse()
        .map_err(|_| ConfigError::InvalidSeed(fragment.to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_three_digits() {
        assert_eq!(format_seed(0), "000");
        assert_eq!(format_seed(1), "001");
        assert_eq!(format_seed(42), "042");
        assert_eq!(format_seed(1234), "1234");
    }

    #[test]
    fn strips_non_digits() {
        assert_eq!(parse_seed("#007").unwrap(), 7);
        assert_eq!(parse_seed("seed-1a2").unwrap(), 12);
        assert_eq!(parse_seed("#").unwrap(), 0);
    }

    #[test]
    fn empty_fragment_uses_default() {
        assert_eq!(parse_seed("").unwrap(), DEFAULT_SEED);
    }

    #[test]
    fn round_trips_through_fragment() {
        for seed in [0, 5, 99, 100, 65_535] {
            assert_eq!(parse_seed(&format!("#{}", format_seed(seed))).unwrap(), seed);
        }
    }

    #[test]
    fn overflow_is_rejected() {
        assert!(parse_seed("#99999999999999999999999").is_err());
    }
}
