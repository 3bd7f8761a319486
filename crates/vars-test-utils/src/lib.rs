//! Shared test utilities for the editor-vars workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`context`]: canned [`Snapshot`](vars_context::Snapshot)s
//! - [`commands`]: scripted and slow [`CommandExecutor`](vars_context::CommandExecutor)s
//! - [`workspace`]: [`TestWorkspace`] on-disk workspace builder

pub mod commands;
pub mod context;
pub mod workspace;

pub use commands::{DelayedCommands, ScriptedCommands};
pub use context::{multi_root_snapshot, proj_snapshot};
pub use workspace::TestWorkspace;
