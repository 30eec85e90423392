//! Length sections - minimum and recommended character counts.

use super::SectionInput;

const MIN_LENGTH: usize = 8;
const STRONG_LENGTH: usize = 12;

fn char_count(password: &str) -> usize {
    password.chars().count()
}

/// Passes when the password has at least 8 characters.
pub fn length_section(input: &SectionInput<'_>) -> bool {
    char_count(input.password) >= MIN_LENGTH
}

/// Passes when the password has at least 12 characters.
pub fn length_strong_section(input: &SectionInput<'_>) -> bool {
    char_count(input.password) >= STRONG_LENGTH
}
