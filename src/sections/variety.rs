//! Character variety sections - uppercase, lowercase, numbers, symbols.
//!
//! All classes are ASCII ranges; other characters never count towards any
//! of them.

use super::SectionInput;

/// Punctuation recognised as a symbol.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| SYMBOLS.contains(c))
}

pub fn uppercase_section(input: &SectionInput<'_>) -> bool {
    has_uppercase(input.password)
}

pub fn lowercase_section(input: &SectionInput<'_>) -> bool {
    has_lowercase(input.password)
}

pub fn number_section(input: &SectionInput<'_>) -> bool {
    has_digit(input.password)
}

pub fn symbol_section(input: &SectionInput<'_>) -> bool {
    has_symbol(input.password)
}
