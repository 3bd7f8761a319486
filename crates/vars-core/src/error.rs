//! Error types for vars-core

use std::time::Duration;

/// Result type for vars-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Resolution failures.
///
/// Missing context values and failing commands are not errors; they
/// substitute as empty text. These variants cover runaway expansion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Recursive resolution needed more passes than allowed
    #[error("Maximum expansion depth of {limit} exceeded")]
    MaxDepthExceeded { limit: usize },

    /// A recursive pass reproduced a string seen earlier in the same call
    #[error("Expansion cycle detected after {passes} passes")]
    ExpansionCycle { passes: usize },

    /// More command invocations than the per-call budget
    #[error("Command limit of {limit} invocations exceeded")]
    CommandLimitExceeded { limit: usize },

    /// The whole resolution took longer than allowed
    #[error("Resolution timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// The runtime backing blocking resolution could not start
    #[error("Failed to start resolution runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_errors_display() {
        assert_eq!(
            Error::MaxDepthExceeded { limit: 8 }.to_string(),
            "Maximum expansion depth of 8 exceeded"
        );
        assert_eq!(
            Error::CommandLimitExceeded { limit: 32 }.to_string(),
            "Command limit of 32 invocations exceeded"
        );
    }

    #[test]
    fn test_timeout_display_mentions_duration() {
        let err = Error::Timeout {
            timeout: Duration::from_millis(250),
        };
        assert!(err.to_string().contains("250ms"));
    }
}
