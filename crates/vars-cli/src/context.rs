//! Snapshot construction from command-line flags

use std::path::{Path, PathBuf};
use vars_context::{
    ConfigValues, NormalizedPath, Position, Selection, Snapshot, SnapshotBuilder, WorkspaceFolder,
};

use crate::cli::ResolveArgs;
use crate::error::{CliError, Result};

/// Build the snapshot a `vars resolve` call resolves against.
///
/// Starts from the running process (environment, home, executable,
/// separator) and layers the workspace, file, selection and settings flags
/// on top. Without `--workspace`, `cwd` is the only folder.
pub fn build_snapshot(args: &ResolveArgs, cwd: &Path) -> Result<Snapshot> {
    let mut builder = SnapshotBuilder::from_process();

    if args.workspaces.is_empty() {
        builder = builder.with_folder(WorkspaceFolder::from_path(absolutize(cwd, cwd)));
    }
    for raw in &args.workspaces {
        builder = builder.with_folder(parse_workspace(raw, cwd)?);
    }

    if let Some(file) = &args.file {
        builder = builder.with_active_file(absolutize(file, cwd));
    }

    if let Some(selection) = selection_from(args.line, args.selection.as_deref()) {
        builder = builder.with_selection(selection);
    }

    if let Some(config) = &args.config {
        let path = NormalizedPath::new(absolutize(config, cwd));
        tracing::debug!(path = %path, "Loading settings");
        builder = builder.with_config(ConfigValues::load(&path)?);
    }

    Ok(builder.build())
}

/// Parse a `[NAME=]PATH` workspace flag.
///
/// Without a name the folder is named after its last path component.
pub fn parse_workspace(raw: &str, cwd: &Path) -> Result<WorkspaceFolder> {
    match raw.split_once('=') {
        Some((name, path)) => {
            if name.is_empty() || path.is_empty() {
                return Err(CliError::user(format!(
                    "Invalid workspace '{raw}', expected [NAME=]PATH"
                )));
            }
            Ok(WorkspaceFolder::new(name, absolutize(Path::new(path), cwd)))
        }
        None if raw.is_empty() => Err(CliError::user("Workspace path must not be empty")),
        None => Ok(WorkspaceFolder::from_path(absolutize(Path::new(raw), cwd))),
    }
}

/// Cursor and selected text from `--line` and `--selection`.
fn selection_from(line: Option<u32>, text: Option<&str>) -> Option<Selection> {
    if line.is_none() && text.is_none() {
        return None;
    }
    let at = Position::new(line.map_or(0, |line| line.saturating_sub(1)), 0);
    Some(Selection::new(at, at, text.unwrap_or_default()))
}

/// `path` made absolute against `cwd` and simplified.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    dunce::simplified(&joined).to_path_buf()
}
