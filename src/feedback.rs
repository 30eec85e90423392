//! Suggestions and explanation derived from check results.

use crate::sections::suggestion_for;
use crate::types::{Criterion, PasswordStrength};

/// One suggestion per failed check, in check order.
///
/// Ids without a known suggestion are skipped.
pub fn suggestions(checks: &[Criterion]) -> Vec<String> {
    checks
        .iter()
        .filter(|c| !c.passed)
        .filter_map(|c| suggestion_for(&c.id))
        .map(str::to_string)
        .collect()
}

/// Educational summary for the given tier and pass count.
pub fn explanation(strength: PasswordStrength, passed: usize, total: usize) -> String {
    match strength {
        PasswordStrength::Weak => format!(
            "Your password meets only {passed} of {total} security checks. \
             Weak passwords can be cracked in minutes or seconds by automated tools. \
             Hackers use \"dictionary attacks\" that try millions of common passwords and patterns."
        ),
        PasswordStrength::Medium => format!(
            "Your password meets {passed} of {total} security checks. \
             It's better than average, but could still be vulnerable to determined attackers. \
             Adding more variety will make it much stronger."
        ),
        PasswordStrength::Strong => format!(
            "Excellent! Your password meets {passed} of {total} security checks. \
             It uses a good mix of characters and length, making it very difficult \
             for attackers to guess or crack using automated tools."
        ),
    }
}
