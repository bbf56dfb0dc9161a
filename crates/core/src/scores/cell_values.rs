//! Coercion of raw sheet cells.
//!
//! None of these functions fail: a cell that cannot be coerced becomes `None`
//! (or `false` for flags) and a warning is logged.

use log::warn;

/// Parses a decimal cell. Commas are read as decimal separators.
///
/// Blank cells and unparsable or non-finite values yield `None`.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Some(parsed),
        _ => {
            warn!("Could not parse value: {}", value);
            None
        }
    }
}

/// Parses a whole-number cell. Decimal notation such as `"3.0"` is rejected.
pub fn parse_integer(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<i32>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Could not parse integer value: {}", value);
            None
        }
    }
}

/// `true` iff the trimmed cell is `1` or `true` in any case.
pub fn parse_boolean(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed == "1" || trimmed.eq_ignore_ascii_case("true")
}
