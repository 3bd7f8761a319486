//! Command executors with scripted behaviour

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use vars_context::{CommandError, CommandExecutor, CommandResult};

/// Executor answering from a script and recording every invocation.
///
/// Ids without a script entry fail with [`CommandError::NotFound`].
#[derive(Debug, Default)]
pub struct ScriptedCommands {
    script: HashMap<String, Vec<CommandResult>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedCommands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `id` with `value`.
    pub fn returning(mut self, id: &str, value: impl Into<Value>) -> Self {
        self.script.insert(id.to_string(), vec![Ok(Some(value.into()))]);
        self
    }

    /// Answer the first call of `id` with `first` and every later call with `then`.
    pub fn returning_then(
        mut self,
        id: &str,
        first: impl Into<Value>,
        then: impl Into<Value>,
    ) -> Self {
        self.script.insert(
            id.to_string(),
            vec![Ok(Some(first.into())), Ok(Some(then.into()))],
        );
        self
    }

    /// Answer `id` with no value.
    pub fn returning_nothing(mut self, id: &str) -> Self {
        self.script.insert(id.to_string(), vec![Ok(None)]);
        self
    }

    /// Fail `id` with `message`.
    pub fn failing(mut self, id: &str, message: &str) -> Self {
        self.script
            .insert(id.to_string(), vec![Err(CommandError::failed(id, message))]);
        self
    }

    /// Ids invoked so far, in invocation order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CommandExecutor for ScriptedCommands {
    async fn execute(&self, id: &str) -> CommandResult {
        let previous = {
            let mut calls = self.calls.lock().unwrap();
            let previous = calls.iter().filter(|call| call.as_str() == id).count();
            calls.push(id.to_string());
            previous
        };
        match self.script.get(id).and_then(|answers| {
            answers.get(previous).or_else(|| answers.last())
        }) {
            Some(result) => result.clone(),
            None => Err(CommandError::NotFound { id: id.to_string() }),
        }
    }
}

/// Wraps another executor and sleeps before every invocation.
pub struct DelayedCommands<E> {
    inner: E,
    delay: Duration,
}

impl<E: CommandExecutor> DelayedCommands<E> {
    pub fn new(inner: E, delay: Duration) -> Self {
        Self { inner, delay }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

#[async_trait]
impl<E: CommandExecutor> CommandExecutor for DelayedCommands<E> {
    async fn execute(&self, id: &str) -> CommandResult {
        tokio::time::sleep(self.delay).await;
        self.inner.execute(id).await
    }
}
