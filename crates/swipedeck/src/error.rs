//! Error types for the card stack.

use thiserror::Error;

/// Errors reported by [`CardStack`](crate::CardStack) and its configuration.
#[derive(Debug, Error)]
pub enum StackError {
    /// A configuration value is out of range.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfiguration {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// A swipe was requested while the previous one has not finished.
    #[error("Swipe already in flight for the front card")]
    SwipeInFlight,

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml_ng::Error),
}
