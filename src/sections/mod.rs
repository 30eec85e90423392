//! Password check sections
//!
//! Each section tests one security requirement. [`SECTIONS`] is the single
//! ordered table the evaluator runs and the feedback generator reads
//! suggestions from.

mod common;
mod length;
mod variety;

pub use common::no_common_section;
pub use length::{length_section, length_strong_section};
pub use variety::{
    has_digit, has_lowercase, has_symbol, has_uppercase, lowercase_section, number_section,
    symbol_section, uppercase_section,
};

use crate::patterns::CommonPatterns;

/// What a section gets to look at.
pub struct SectionInput<'a> {
    pub password: &'a str,
    pub patterns: &'a CommonPatterns,
}

/// Returns `true` when the requirement is met.
pub type SectionFn = fn(&SectionInput<'_>) -> bool;

/// One row of the check table.
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub suggestion: &'static str,
    pub check: SectionFn,
}

pub static SECTIONS: [Section; 7] = [
    Section {
        id: "length",
        label: "At least 8 characters",
        description: "Longer passwords are harder to guess",
        suggestion: "Add more characters to reach at least 8",
        check: length_section,
    },
    Section {
        id: "length-strong",
        label: "At least 12 characters",
        description: "Very long passwords are extremely secure",
        suggestion: "Try to use 12 or more characters for maximum security",
        check: length_strong_section,
    },
    Section {
        id: "uppercase",
        label: "Contains uppercase letter",
        description: "Mix of upper and lowercase increases complexity",
        suggestion: "Add an uppercase letter (A-Z)",
        check: uppercase_section,
    },
    Section {
        id: "lowercase",
        label: "Contains lowercase letter",
        description: "Lowercase letters are essential",
        suggestion: "Add a lowercase letter (a-z)",
        check: lowercase_section,
    },
    Section {
        id: "number",
        label: "Contains a number",
        description: "Numbers add another layer of complexity",
        suggestion: "Include at least one number (0-9)",
        check: number_section,
    },
    Section {
        id: "symbol",
        label: "Contains a symbol",
        description: "Symbols like !@#$% make passwords much stronger",
        suggestion: "Add a special character like !@#$%^&*",
        check: symbol_section,
    },
    Section {
        id: "no-common",
        label: "Avoids common patterns",
        description: "Avoid \"123\", \"abc\", \"password\", etc.",
        suggestion: "Avoid common words and patterns",
        check: no_common_section,
    },
];

/// Looks up the suggestion text for a check id.
pub fn suggestion_for(id: &str) -> Option<&'static str> {
    SECTIONS.iter().find(|s| s.id == id).map(|s| s.suggestion)
}
