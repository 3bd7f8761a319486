//! Sequential resolution of `${command:ID}`
//!
//! Commands have side effects, so they are invoked one at a time, left to
//! right, after every other placeholder is gone. Each invocation sees the
//! string as rewritten by the ones before it.

use crate::grammar::Placeholder;
use crate::{Error, Result};
use serde_json::Value;
use vars_context::CommandExecutor;

/// Invocation allowance shared by every pass of one top-level call.
#[derive(Debug, Clone)]
pub struct CommandBudget {
    limit: usize,
    used: usize,
}

impl CommandBudget {
    pub fn new(limit: usize) -> Self {
        Self { limit, used: 0 }
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.used
    }

    fn spend(&mut self) -> Result<()> {
        if self.used >= self.limit {
            return Err(Error::CommandLimitExceeded { limit: self.limit });
        }
        self.used += 1;
        Ok(())
    }
}

/// Resolve command placeholders in `text` until none is left.
///
/// A failing command substitutes as empty text. A command whose result
/// contains another `${command:...}` keeps the loop going, which is why
/// every invocation is charged to `budget`.
pub async fn resolve_commands(
    mut text: String,
    executor: &dyn CommandExecutor,
    budget: &mut CommandBudget,
) -> Result<String> {
    let pattern = Placeholder::Command.pattern();

    loop {
        let (range, id) = match pattern.captures(&text) {
            Some(caps) => match (caps.get(0), caps.get(1)) {
                (Some(whole), Some(id)) => (whole.range(), id.as_str().to_string()),
                _ => break,
            },
            None => break,
        };

        budget.spend()?;
        tracing::debug!(command = %id, "Invoking command");

        let replacement = match executor.execute(&id).await {
            Ok(value) => render_result(value),
            Err(e) => {
                tracing::warn!(command = %id, error = %e, "Command failed, substituting empty text");
                String::new()
            }
        };
        text.replace_range(range, &replacement);
    }

    Ok(text)
}

/// Text substituted for a command result.
///
/// No value gives empty text, a JSON string its contents, anything else
/// its compact JSON form.
pub fn render_result(value: Option<Value>) -> String {
    match value {
        None => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}
