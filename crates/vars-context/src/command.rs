//! CommandExecutor trait and simple executors

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Outcome of invoking a command. `Ok(None)` means the command ran but
/// produced no value.
pub type CommandResult = std::result::Result<Option<Value>, CommandError>;

/// Why a command invocation failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Command not found: {id}")]
    NotFound { id: String },

    #[error("Command {id} failed: {message}")]
    Failed { id: String, message: String },
}

impl CommandError {
    pub fn failed(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            id: id.into(),
            message: message.into(),
        }
    }
}

/// Invokes host commands by id.
///
/// Invocations may have side effects and may be slow. The resolver never
/// has more than one invocation outstanding.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, id: &str) -> CommandResult;
}

/// Executor for hosts without a command facility: every invocation fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCommands;

#[async_trait]
impl CommandExecutor for NoCommands {
    async fn execute(&self, id: &str) -> CommandResult {
        Err(CommandError::NotFound { id: id.to_string() })
    }
}

/// Executor answering each id with a fixed value.
#[derive(Debug, Default, Clone)]
pub struct StaticCommands {
    values: HashMap<String, Value>,
}

impl StaticCommands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(id.into(), value.into());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }
}

#[async_trait]
impl CommandExecutor for StaticCommands {
    async fn execute(&self, id: &str) -> CommandResult {
        self.values
            .get(id)
            .cloned()
            .map(Some)
            .ok_or_else(|| CommandError::NotFound { id: id.to_string() })
    }
}
