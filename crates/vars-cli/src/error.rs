//! Error types for vars-cli

/// Result type for vars-cli
pub type Result<T> = std::result::Result<T, CliError>;

/// Everything `vars` can fail with; each maps to exit code 1
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from vars-core
    #[error(transparent)]
    Core(#[from] vars_core::Error),

    /// Error from vars-context
    #[error(transparent)]
    Context(#[from] vars_context::Error),

    /// Working directory or stdout failure
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// `--json` serialization failure
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Invalid input, reported as-is
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Error for bad flag values and similar user mistakes
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
