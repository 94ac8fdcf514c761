//! Store and display configuration

use serde::{Deserialize, Serialize};

/// Default display format for an article's edited time
///
/// Mirrors the common `en-US` locale rendering, e.g. `5/8/2017, 12:00:00 AM`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Article store configuration
///
/// # Example
///
/// ```
/// use simplepedia::Config;
///
/// // Recommended: use the constructor methods
/// let config = Config::new();
/// assert!(config.unique_titles);
///
/// // Or construct manually
/// let config = Config {
///     unique_titles: false,
///     trim_input: true,
///     timestamp_format: "%Y-%m-%d".to_string(),
/// };
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Reject a create or update whose title already belongs to another article
    ///
    /// Titles are the identity key of an article, so this is on by default.
    #[serde(default = "default_true")]
    pub unique_titles: bool,

    /// Trim surrounding whitespace from titles before storing them
    #[serde(default = "default_true")]
    pub trim_input: bool,

    /// chrono format string used by [`Article::formatted_edited`](crate::Article::formatted_edited)
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_true() -> bool {
    true
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Config {
    /// Create the default configuration
    pub fn new() -> Self {
        Self {
            unique_titles: true,
            trim_input: true,
            timestamp_format: default_timestamp_format(),
        }
    }

    /// Configuration that stores titles verbatim and allows duplicates
    ///
    /// Updates still address the first article carrying the original title.
    pub fn lenient() -> Self {
        Self {
            unique_titles: false,
            trim_input: false,
            timestamp_format: default_timestamp_format(),
        }
    }

    /// Replace the display format for edited timestamps
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
