//! Score and strength tier from check results.

use crate::types::{Criterion, PasswordScore, PasswordStrength};

const MEDIUM_THRESHOLD: u8 = 50;
const STRONG_THRESHOLD: u8 = 75;

/// Percentage of passed checks, rounded half up.
///
/// An empty check list scores 0.
pub fn score_checks(checks: &[Criterion]) -> PasswordScore {
    let total = checks.len();
    if total == 0 {
        return PasswordScore::new(0);
    }
    let passed = checks.iter().filter(|c| c.passed).count();
    // round(passed * 100 / total) without going through floats
    let rounded = (passed * 200 + total) / (2 * total);
    PasswordScore::new(rounded.min(100) as u8)
}

/// Maps a score onto its tier: below 50 weak, below 75 medium, else strong.
pub fn strength_for(score: PasswordScore) -> PasswordStrength {
    match score.value() {
        s if s < MEDIUM_THRESHOLD => PasswordStrength::Weak,
        s if s < STRONG_THRESHOLD => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}
