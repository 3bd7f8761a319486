//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vars_core::{DEFAULT_MAX_COMMANDS, DEFAULT_MAX_DEPTH};

/// Resolve editor-style `${...}` placeholders
#[derive(Parser, Debug)]
#[command(name = "vars")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve every placeholder in a template
    ///
    /// Examples:
    ///   vars resolve '${workspaceFolderBasename}/${relativeFile}' -f src/main.rs
    ///   vars resolve '${config:editor.tabSize}' -c .vscode/settings.json
    ///   vars resolve '${command:pick}' --command pick=main.rs
    Resolve(ResolveArgs),

    /// List the placeholders recognized in a template
    Scan {
        /// Template to inspect
        template: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List every supported placeholder
    Tokens,
}

/// Arguments for `vars resolve`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ResolveArgs {
    /// Template to resolve
    pub template: String,

    /// Expand placeholders introduced by substituted values
    #[arg(short, long)]
    pub recursive: bool,

    /// Workspace folder as [NAME=]PATH; the first one is the primary root
    #[arg(short = 'w', long = "workspace", value_name = "[NAME=]PATH")]
    pub workspaces: Vec<String>,

    /// Active file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// 1-based cursor line
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub line: Option<u32>,

    /// Selected text; without --line the cursor sits on line 1
    #[arg(long, value_name = "TEXT")]
    pub selection: Option<String>,

    /// Settings file (toml, json or yaml)
    #[arg(short, long, value_name = "FILE", env = "VARS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Command table file mapping ids to shell command lines
    #[arg(long, value_name = "FILE")]
    pub commands: Option<PathBuf>,

    /// Fixed command result as ID=VALUE
    #[arg(long = "command", value_name = "ID=VALUE")]
    pub static_commands: Vec<String>,

    /// Maximum number of recursive passes
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Maximum number of command invocations
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_COMMANDS)]
    pub max_commands: usize,

    /// Give up after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,
}
