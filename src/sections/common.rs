//! Common pattern section - rejects passwords built around well-known tokens.

use super::SectionInput;

/// Passes when none of the common patterns occur in the password.
pub fn no_common_section(input: &SectionInput<'_>) -> bool {
    !input.patterns.matches(input.password)
}
