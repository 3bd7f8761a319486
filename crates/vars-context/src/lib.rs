//! Editor context for placeholder resolution
//!
//! Everything the resolver needs to know about the editing session lives
//! behind two seams:
//!
//! - [`ContextProvider`]: synchronous queries for workspace folders, the
//!   active file, selection, environment, settings and platform details
//! - [`CommandExecutor`]: asynchronous invocation of named commands
//!
//! [`Snapshot`] is the owned implementation used by hosts and tests. It is
//! built once per resolution and never changes while the resolver reads it.

pub mod command;
pub mod config;
pub mod error;
pub mod folder;
pub mod path;
pub mod provider;
pub mod snapshot;

pub use command::{CommandError, CommandExecutor, CommandResult, NoCommands, StaticCommands};
pub use config::{ConfigStore, ConfigValues};
pub use error::{Error, Result};
pub use folder::{Position, Selection, WorkspaceFolder};
pub use path::NormalizedPath;
pub use provider::ContextProvider;
pub use snapshot::{Snapshot, SnapshotBuilder};
