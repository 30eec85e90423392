//! Password strength analysis library
//!
//! Runs a fixed table of security checks against a password and returns a
//! report with a score, a strength tier, an estimated brute-force crack time
//! and suggestions for improvement.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable delivery over a channel
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize`/`Deserialize` on the report types
//!
//! # Environment Variables
//!
//! - `PWD_PATTERNS_PATH`: Custom common-pattern file read by
//!   [`CommonPatterns::from_env`] (default: built-in list)
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::{analyze_password, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Tr0ub4dor&3".to_string().into());
//! let report = analyze_password(&password);
//!
//! assert_eq!(report.strength, PasswordStrength::Strong);
//! assert_eq!(report.crack_time, "16K years");
//! println!("Score: {}", report.score);
//! for suggestion in &report.suggestions {
//!     println!("- {suggestion}");
//! }
//! ```

// Internal modules
mod crack_time;
mod evaluator;
mod feedback;
mod patterns;
mod scorer;
mod sections;
mod types;

// Public API
pub use crack_time::{format_duration, GUESSES_PER_SECOND};
pub use evaluator::{analyze_password, estimate_crack_time, Analyzer};
pub use patterns::{patterns_path, CommonPatterns, PatternListError, PATTERNS_PATH_ENV};
pub use types::{AnalysisReport, Criterion, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
pub use evaluator::{analyze_password_tx, DEBOUNCE};
