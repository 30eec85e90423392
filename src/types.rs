//! Report types produced by the analyzer.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strength tier derived from a [`PasswordScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage of passed criteria, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 100;

    /// Creates a score, clamping anything above 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PasswordScore {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX {
            return Err(format!("score {} exceeds {}", value, Self::MAX));
        }
        Ok(Self(value))
    }
}

impl From<PasswordScore> for u8 {
    fn from(score: PasswordScore) -> Self {
        score.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one security check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Criterion {
    pub id: String,
    pub label: String,
    pub passed: bool,
    pub description: String,
}

/// Complete result of analysing one password.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnalysisReport {
    pub strength: PasswordStrength,
    pub score: PasswordScore,
    /// Check results in evaluation order.
    pub checks: Vec<Criterion>,
    pub crack_time: String,
    /// One entry per failed check, in the same order as `checks`.
    pub suggestions: Vec<String>,
    pub explanation: String,
}

impl AnalysisReport {
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn total_count(&self) -> usize {
        self.checks.len()
    }

    /// `true` when every check passed, i.e. there is nothing left to suggest.
    pub fn all_passed(&self) -> bool {
        self.suggestions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_ordering() {
        assert!(PasswordStrength::Weak < PasswordStrength::Medium);
        assert!(PasswordStrength::Medium < PasswordStrength::Strong);
    }

    #[test]
    fn test_strength_display() {
        assert_eq!(PasswordStrength::Weak.to_string(), "weak");
        assert_eq!(PasswordStrength::Medium.to_string(), "medium");
        assert_eq!(PasswordStrength::Strong.to_string(), "strong");
    }

    #[test]
    fn test_score_clamps_to_max() {
        assert_eq!(PasswordScore::new(250).value(), 100);
        assert_eq!(PasswordScore::new(42).value(), 42);
    }

    #[test]
    fn test_score_try_from_rejects_out_of_range() {
        assert!(PasswordScore::try_from(101).is_err());
        assert_eq!(PasswordScore::try_from(100), Ok(PasswordScore::new(100)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_serializes_with_camel_case_fields() {
        let report = AnalysisReport {
            strength: PasswordStrength::Medium,
            score: PasswordScore::new(57),
            checks: vec![Criterion {
                id: "length".to_string(),
                label: "At least 8 characters".to_string(),
                passed: true,
                description: "Longer passwords are harder to guess".to_string(),
            }],
            crack_time: "3 hours".to_string(),
            suggestions: Vec::new(),
            explanation: String::new(),
        };

        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["strength"], "medium");
        assert_eq!(json["score"], 57);
        assert_eq!(json["crackTime"], "3 hours");
        assert_eq!(json["checks"][0]["id"], "length");

        let back: AnalysisReport = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, report);
    }
}
