//! Brute-force crack time estimation.
//!
//! The search space is `charset ^ length`. It is computed in log10 space so
//! long passwords never overflow; only the display bucket matters, so the
//! mantissa precision of `f64` is plenty.

use crate::sections::{has_digit, has_lowercase, has_symbol, has_uppercase};

const LOWERCASE_SIZE: u32 = 26;
const UPPERCASE_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SYMBOL_SIZE: u32 = 32;
const FALLBACK_SIZE: u32 = 26;

/// Assumed attack rate: 10 billion guesses per second.
pub const GUESSES_PER_SECOND: f64 = 10_000_000_000.0;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0;
const DAY: f64 = 24.0;
const MONTH: f64 = 30.0;
const YEAR: f64 = 12.0;

// 10^20 s is past the last finite bucket (10^12 years ~ 3.1 * 10^19 s).
const CENTURIES_LOG10_SECONDS: f64 = 20.0;

/// Sum of the sizes of the character classes present in `password`.
///
/// Falls back to 26 when no class is recognised.
pub fn charset_size(password: &str) -> u32 {
    let classes = [
        (has_lowercase(password), LOWERCASE_SIZE),
        (has_uppercase(password), UPPERCASE_SIZE),
        (has_digit(password), DIGIT_SIZE),
        (has_symbol(password), SYMBOL_SIZE),
    ];
    let size: u32 = classes
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, size)| size)
        .sum();
    if size == 0 { FALLBACK_SIZE } else { size }
}

/// `log10` of the seconds needed to exhaust the search space.
///
/// `None` for the empty password.
pub fn log10_seconds(password: &str) -> Option<f64> {
    let length = password.chars().count();
    if length == 0 {
        return None;
    }
    let log10_combinations = length as f64 * f64::from(charset_size(password)).log10();
    Some(log10_combinations - GUESSES_PER_SECOND.log10())
}

/// Human-readable crack time for `password`.
pub fn estimate(password: &str) -> String {
    let Some(log10_seconds) = log10_seconds(password) else {
        return "Instantly".to_string();
    };
    if log10_seconds >= CENTURIES_LOG10_SECONDS {
        return "Centuries".to_string();
    }
    format_duration(10f64.powf(log10_seconds))
}

/// Formats a duration in seconds into the coarsest fitting unit.
///
/// Each tier is selected on the unrounded value, then rounded in its own unit.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 1.0 {
        return "Less than a second".to_string();
    }
    if seconds < 60.0 {
        return format!("{} seconds", seconds.round());
    }

    let minutes = seconds / MINUTE;
    if minutes < 60.0 {
        return format!("{} minutes", minutes.round());
    }

    let hours = minutes / HOUR;
    if hours < 24.0 {
        return format!("{} hours", hours.round());
    }

    let days = hours / DAY;
    if days < 30.0 {
        return format!("{} days", days.round());
    }

    let months = days / MONTH;
    if months < 12.0 {
        return format!("{} months", months.round());
    }

    let years = months / YEAR;
    if years < 1_000.0 {
        return format!("{} years", years.round());
    }
    if years < 1_000_000.0 {
        return format!("{}K years", (years / 1_000.0).round());
    }
    if years < 1_000_000_000.0 {
        return format!("{}M years", (years / 1_000_000.0).round());
    }
    if years < 1_000_000_000_000.0 {
        return format!("{}B years", (years / 1_000_000_000.0).round());
    }

    "Centuries".to_string()
}
