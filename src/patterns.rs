//! Common pattern list
//!
//! Holds the weak tokens the `no-common` check looks for, either the
//! built-in list or one loaded from a file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at a custom pattern file.
pub const PATTERNS_PATH_ENV: &str = "PWD_PATTERNS_PATH";

const BUILTIN_PATTERNS: [&str; 15] = [
    "password", "123456", "qwerty", "abc123", "letmein", "111111", "123123", "admin", "welcome",
    "monkey", "1234", "pass", "test", "guest", "master",
];

#[derive(Error, Debug)]
pub enum PatternListError {
    #[error("Pattern file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read pattern file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Pattern file is empty")]
    EmptyFile,
}

/// Lowercased tokens that must not appear anywhere in a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPatterns {
    patterns: Vec<String>,
}

impl Default for CommonPatterns {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommonPatterns {
    /// The fixed list of 15 tokens attackers try first.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_PATTERNS)
    }

    /// Builds a list from arbitrary tokens.
    ///
    /// Tokens are trimmed and lowercased; empty entries and duplicates are
    /// dropped, first occurrence wins.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .filter(|p| seen.insert(p.clone()))
            .collect();
        Self { patterns }
    }

    /// Loads one token per line from `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File contains no tokens
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PatternListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Pattern list loading FAILED: FileNotFound {:?}", path);
            return Err(PatternListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let list = Self::new(content.lines());

        if list.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Pattern list loading FAILED: Empty file {:?}", path);
            return Err(PatternListError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Pattern list loaded: {} patterns from {:?}", list.len(), path);

        Ok(list)
    }

    /// Loads the file named by `PWD_PATTERNS_PATH`, or falls back to the
    /// built-in list when the variable is unset.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// unsafe { std::env::set_var("PWD_PATTERNS_PATH", "/etc/myapp/patterns.txt"); }
    /// let patterns = pwd_analyzer::CommonPatterns::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, PatternListError> {
        match patterns_path() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Case-insensitive substring match against every token.
    pub fn matches(&self, password: &str) -> bool {
        let lower = password.to_lowercase();
        self.patterns.iter().any(|p| lower.contains(p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }
}

/// Returns the pattern file path from the environment, if set.
pub fn patterns_path() -> Option<PathBuf> {
    std::env::var_os(PATTERNS_PATH_ENV).map(PathBuf::from)
}
