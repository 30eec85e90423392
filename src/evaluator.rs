//! Password analyzer - runs the check table and assembles the report.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::crack_time;
use crate::feedback;
use crate::patterns::CommonPatterns;
use crate::scorer::{score_checks, strength_for};
use crate::sections::{SectionInput, SECTIONS};
use crate::types::{AnalysisReport, Criterion};

/// How long the async path waits for further keystrokes before analysing.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Runs the password checks against a configurable common-pattern list.
///
/// `Analyzer::default()` uses the built-in list and behaves exactly like
/// [`analyze_password`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analyzer {
    patterns: CommonPatterns,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patterns(patterns: CommonPatterns) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &CommonPatterns {
        &self.patterns
    }

    /// Evaluates every check in table order.
    pub fn checks(&self, password: &SecretString) -> Vec<Criterion> {
        let input = SectionInput {
            password: password.expose_secret(),
            patterns: &self.patterns,
        };

        SECTIONS
            .iter()
            .map(|section| Criterion {
                id: section.id.to_string(),
                label: section.label.to_string(),
                passed: (section.check)(&input),
                description: section.description.to_string(),
            })
            .collect()
    }

    /// Analyzes password strength and returns the full report.
    pub fn analyze(&self, password: &SecretString) -> AnalysisReport {
        let checks = self.checks(password);

        let score = score_checks(&checks);
        let strength = strength_for(score);

        let passed = checks.iter().filter(|c| c.passed).count();
        let suggestions = feedback::suggestions(&checks);
        let explanation = feedback::explanation(strength, passed, checks.len());
        let crack_time = crack_time::estimate(password.expose_secret());

        #[cfg(feature = "tracing")]
        tracing::debug!(score = score.value(), %strength, passed, "password analyzed");

        AnalysisReport {
            strength,
            score,
            checks,
            crack_time,
            suggestions,
            explanation,
        }
    }

    /// Debounces, then sends the report via channel unless cancelled.
    ///
    /// Meant for live-typing callers: cancel the previous token on each
    /// keystroke and only the last analysis is delivered.
    #[cfg(feature = "async")]
    pub async fn analyze_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<AnalysisReport>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::debug!("analysis is about to start...");

        tokio::time::sleep(DEBOUNCE).await;

        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("analysis cancelled");
            return;
        }

        let report = self.analyze(password);

        if let Err(e) = tx.send(report).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password analysis report: {}", e);
            #[cfg(not(feature = "tracing"))]
            let _ = e;
        }
    }
}

/// Analyzes a password against the built-in checks.
///
/// # Arguments
/// * `password` - The password to analyze
///
/// # Returns
/// An `AnalysisReport` with strength, score, checks, crack time,
/// suggestions and explanation. Every input, including the empty string,
/// yields a complete report.
pub fn analyze_password(password: &SecretString) -> AnalysisReport {
    Analyzer::default().analyze(password)
}

/// Estimated brute-force crack time, e.g. `"16K years"`.
pub fn estimate_crack_time(password: &SecretString) -> String {
    crack_time::estimate(password.expose_secret())
}

/// Async version of [`analyze_password`] that sends the report via channel.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<AnalysisReport>,
) {
    Analyzer::default().analyze_tx(password, token, tx).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PasswordStrength;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    fn ids(report: &AnalysisReport) -> Vec<&str> {
        report.checks.iter().map(|c| c.id.as_str()).collect()
    }

    fn failed_ids(report: &AnalysisReport) -> Vec<&str> {
        report
            .checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.id.as_str())
            .collect()
    }

    #[test]
    fn test_analyze_common_password() {
        let report = analyze_password(&secret("password"));

        assert_eq!(report.score.value(), 29);
        assert_eq!(report.strength, PasswordStrength::Weak);
        assert_eq!(
            failed_ids(&report),
            vec!["length-strong", "uppercase", "number", "symbol", "no-common"]
        );
        assert_eq!(
            report.suggestions,
            vec![
                "Try to use 12 or more characters for maximum security",
                "Add an uppercase letter (A-Z)",
                "Include at least one number (0-9)",
                "Add a special character like !@#$%^&*",
                "Avoid common words and patterns",
            ]
        );
        assert!(report.explanation.starts_with("Your password meets only 2 of 7"));
    }

    #[test]
    fn test_analyze_empty_password() {
        let report = analyze_password(&secret(""));

        assert_eq!(report.checks.len(), 7);
        // Only the common-pattern check passes on empty input
        assert_eq!(report.passed_count(), 1);
        assert_eq!(report.score.value(), 14);
        assert_eq!(report.strength, PasswordStrength::Weak);
        assert_eq!(report.crack_time, "Instantly");
        assert_eq!(report.suggestions.len(), 6);
    }

    #[test]
    fn test_analyze_medium_password() {
        // length, uppercase, lowercase, no-common pass
        let report = analyze_password(&secret("Sunflower"));
        assert_eq!(report.score.value(), 57);
        assert_eq!(report.strength, PasswordStrength::Medium);
        assert!(report.explanation.starts_with("Your password meets 4 of 7"));
    }

    #[test]
    fn test_analyze_strong_password() {
        let report = analyze_password(&secret("Vx9#mQ2!rLp7&zKw"));

        assert_eq!(report.score.value(), 100);
        assert_eq!(report.strength, PasswordStrength::Strong);
        assert!(report.all_passed());
        assert!(report.suggestions.is_empty());
        assert_eq!(report.crack_time, "Centuries");
        assert!(report.explanation.starts_with("Excellent!"));
    }

    #[test]
    fn test_analyze_six_of_seven_is_strong() {
        // 11 chars: misses only length-strong
        let report = analyze_password(&secret("Vx9#mQ2!rLp"));
        assert_eq!(report.score.value(), 86);
        assert_eq!(report.strength, PasswordStrength::Strong);
        assert_eq!(failed_ids(&report), vec!["length-strong"]);
    }

    #[test]
    fn test_check_order_is_fixed() {
        let expected = vec![
            "length",
            "length-strong",
            "uppercase",
            "lowercase",
            "number",
            "symbol",
            "no-common",
        ];
        for pwd in ["", "a", "password", "Tr0ub4dor&3", "日本語のパスワード"] {
            assert_eq!(ids(&analyze_password(&secret(pwd))), expected, "{pwd:?}");
        }
    }

    #[test]
    fn test_check_labels_and_descriptions() {
        let report = analyze_password(&secret("x"));
        let length = &report.checks[0];
        assert_eq!(length.label, "At least 8 characters");
        assert_eq!(length.description, "Longer passwords are harder to guess");
        let common = &report.checks[6];
        assert_eq!(common.label, "Avoids common patterns");
    }

    #[test]
    fn test_estimate_crack_time() {
        assert_eq!(estimate_crack_time(&secret("")), "Instantly");
        assert_eq!(estimate_crack_time(&secret("a")), "Less than a second");
        assert_eq!(estimate_crack_time(&secret("Tr0ub4dor&3")), "16K years");
    }

    #[test]
    fn test_custom_patterns() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "sunflower").expect("Failed to write");
        let patterns = CommonPatterns::from_path(file.path()).expect("load");

        let analyzer = Analyzer::with_patterns(patterns);
        let report = analyzer.analyze(&secret("Sunflower"));
        assert_eq!(failed_ids(&report).last(), Some(&"no-common"));
        assert_eq!(report.score.value(), 43);

        // Built-in tokens no longer apply
        let report = analyzer.analyze(&secret("password"));
        assert!(report.checks[6].passed);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let analyzer = Analyzer::new();
        let pwd = secret("Tr0ub4dor&3");
        assert_eq!(analyzer.analyze(&pwd), analyzer.analyze(&pwd));
    }
}
