//! Placeholder resolution for editor-style variables
//!
//! Resolves `${...}` tokens such as `${workspaceFolder}`, `${relativeFile}`,
//! `${env:HOME}` or `${command:pickFile}` inside user-authored strings.
//!
//! A resolution runs in up to three stages:
//!
//! - **Substitution pass** ([`engine`]): every non-command token, pure and
//!   synchronous
//! - **Command loop** ([`command`]): `${command:ID}` tokens, one invocation
//!   at a time
//! - **Recursion** ([`Resolver`]): repeat while recognized tokens remain,
//!   bounded by depth, cycle and command limits
//!
//! ```text
//! template + context
//!        |
//!   engine::substitute  (sync)
//!        |
//!   command::resolve_commands  (async, sequential)
//!        |
//!   residual tokens and recursive?  -- yes --> next pass
//!        |
//!     resolved string
//! ```
//!
//! # Example
//!
//! ```
//! use vars_context::{NoCommands, Snapshot};
//! use vars_core::Resolver;
//!
//! let snapshot = Snapshot::builder()
//!     .with_path_separator('/')
//!     .with_workspace_folder("proj", "/home/u/proj")
//!     .with_active_file("/home/u/proj/src/a.ts")
//!     .build();
//!
//! let out = Resolver::default()
//!     .resolve_blocking("${workspaceFolderBasename}/${relativeFile}", &snapshot, &NoCommands)
//!     .unwrap();
//! assert_eq!(out, "proj/src/a.ts");
//! ```

pub mod command;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod resolver;

pub use engine::substitute;
pub use error::{Error, Result};
pub use grammar::{Category, Placeholder, TokenMatch, has_residual, scan};
pub use resolver::{
    DEFAULT_MAX_COMMANDS, DEFAULT_MAX_DEPTH, ResolveOptions, Resolver, resolve,
};
