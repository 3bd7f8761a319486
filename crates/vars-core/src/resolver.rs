//! Full resolution: substitution pass, command loop and recursion control

use crate::command::{CommandBudget, resolve_commands};
use crate::{Error, Result, engine, grammar};
use std::collections::HashSet;
use std::time::Duration;
use vars_context::{CommandExecutor, ContextProvider};

/// Default number of extra passes a recursive resolution may run.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Default number of command invocations per top-level call.
pub const DEFAULT_MAX_COMMANDS: usize = 32;

/// Limits and switches for one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Re-run the pass while recognized tokens remain
    pub recursive: bool,
    /// Extra passes allowed after the first
    pub max_depth: usize,
    /// Command invocations allowed across all passes
    pub max_commands: usize,
    /// Bound on the whole call, including command invocations
    pub timeout: Option<Duration>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            max_depth: DEFAULT_MAX_DEPTH,
            max_commands: DEFAULT_MAX_COMMANDS,
            timeout: None,
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_commands(mut self, max_commands: usize) -> Self {
        self.max_commands = max_commands;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Resolves templates under a fixed set of [`ResolveOptions`].
///
/// Holds no state between calls; one resolver can serve any number of
/// templates and contexts.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    options: ResolveOptions,
}

impl Resolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolve `template` against `context`, invoking `commands` for
    /// `${command:...}` tokens.
    ///
    /// The context is read as-is for every pass; callers hand in a snapshot
    /// that does not change underneath the call.
    pub async fn resolve(
        &self,
        template: &str,
        context: &dyn ContextProvider,
        commands: &dyn CommandExecutor,
    ) -> Result<String> {
        match self.options.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.run(template, context, commands))
                .await
                .map_err(|_| {
                    tracing::warn!(?timeout, "Resolution timed out");
                    Error::Timeout { timeout }
                })?,
            None => self.run(template, context, commands).await,
        }
    }

    /// Blocking form of [`Resolver::resolve`] for synchronous callers.
    ///
    /// Drives the resolution on a private current-thread runtime, so it must
    /// not be called from inside an async task.
    pub fn resolve_blocking(
        &self,
        template: &str,
        context: &dyn ContextProvider,
        commands: &dyn CommandExecutor,
    ) -> Result<String> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(Error::Runtime)?;
        runtime.block_on(self.resolve(template, context, commands))
    }

    async fn run(
        &self,
        template: &str,
        context: &dyn ContextProvider,
        commands: &dyn CommandExecutor,
    ) -> Result<String> {
        let mut budget = CommandBudget::new(self.options.max_commands);
        let mut seen: HashSet<String> = HashSet::new();
        let mut current = template.to_string();
        let mut pass = 0;

        loop {
            pass += 1;
            tracing::debug!(pass, len = current.len(), "Starting substitution pass");

            let substituted = engine::substitute(&current, context);
            let invoked_before = budget.used();
            let resolved = resolve_commands(substituted, commands, &mut budget).await?;

            if !self.options.recursive || !grammar::has_residual(&resolved) {
                tracing::debug!(
                    passes = pass,
                    commands = budget.used(),
                    "Resolution complete"
                );
                return Ok(resolved);
            }

            // Repeated text is a cycle only across passes that invoked no command
            if budget.used() == invoked_before {
                seen.insert(current);
                if seen.contains(&resolved) {
                    return Err(Error::ExpansionCycle { passes: pass });
                }
            } else {
                seen.clear();
            }
            if pass > self.options.max_depth {
                return Err(Error::MaxDepthExceeded {
                    limit: self.options.max_depth,
                });
            }
            current = resolved;
        }
    }
}

/// Resolve `template` with default limits.
///
/// With `recursive`, passes repeat until no recognized token remains (or a
/// limit is hit).
pub async fn resolve(
    template: &str,
    recursive: bool,
    context: &dyn ContextProvider,
    commands: &dyn CommandExecutor,
) -> Result<String> {
    Resolver::new(ResolveOptions::default().with_recursive(recursive))
        .resolve(template, context, commands)
        .await
}
