//! Command executor backed by shell command lines

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use vars_context::{
    CommandError, CommandExecutor, CommandResult, ConfigStore, NormalizedPath, StaticCommands,
};

use crate::error::{CliError, Result};

/// Command table file: maps command ids to shell command lines.
///
/// ```toml
/// [commands]
/// branch = "git rev-parse --abbrev-ref HEAD"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandTable {
    #[serde(default)]
    pub commands: HashMap<String, String>,
}

impl CommandTable {
    /// Load a command table; the format follows the file extension.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }
}

/// Answers commands from fixed values first, then from the command table by
/// running the line through the platform shell.
#[derive(Debug)]
pub struct ShellCommands {
    fixed: StaticCommands,
    table: CommandTable,
    cwd: PathBuf,
}

impl ShellCommands {
    pub fn new(fixed: StaticCommands, table: CommandTable, cwd: impl Into<PathBuf>) -> Self {
        Self {
            fixed,
            table,
            cwd: cwd.into(),
        }
    }
}

#[async_trait]
impl CommandExecutor for ShellCommands {
    async fn execute(&self, id: &str) -> CommandResult {
        if self.fixed.contains(id) {
            return self.fixed.execute(id).await;
        }
        match self.table.commands.get(id) {
            Some(line) => run_shell(id, line, &self.cwd).await,
            None => Err(CommandError::NotFound { id: id.to_string() }),
        }
    }
}

/// Parse `--command ID=VALUE` flags.
pub fn parse_fixed(raw: &[String]) -> Result<StaticCommands> {
    raw.iter().try_fold(StaticCommands::new(), |commands, entry| {
        match entry.split_once('=') {
            Some((id, value)) if !id.is_empty() => Ok(commands.with(id, value)),
            _ => Err(CliError::user(format!(
                "Invalid command '{entry}', expected ID=VALUE"
            ))),
        }
    })
}

/// Run `line` in the platform shell; trimmed stdout is the result.
async fn run_shell(id: &str, line: &str, cwd: &Path) -> CommandResult {
    tracing::debug!(command = %id, line, "Running shell command");

    let output = shell(line)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| CommandError::failed(id, e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CommandError::failed(
            id,
            format!("{} {}", output.status, stderr.trim()).trim_end(),
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(Some(Value::String(stdout.trim().to_string())))
}

#[cfg(windows)]
fn shell(line: &str) -> tokio::process::Command {
    let mut command = tokio::process::Command::new("cmd");
    command.arg("/C").arg(line);
    command
}

#[cfg(not(windows))]
fn shell(line: &str) -> tokio::process::Command {
    let mut command = tokio::process::Command::new("sh");
    command.arg("-c").arg(line);
    command
}
