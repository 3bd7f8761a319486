//! ContextProvider trait

use crate::{NormalizedPath, Selection, WorkspaceFolder};

/// Read-only queries the resolver makes against the editing session.
///
/// Implementations answer from a snapshot: two calls during one resolution
/// must return the same value. Absent data is `None` (or an empty list),
/// never an error.
pub trait ContextProvider: Send + Sync {
    /// Workspace folders in session order. The first one is the primary root.
    fn list_workspace_folders(&self) -> Vec<WorkspaceFolder>;

    fn active_file_path(&self) -> Option<NormalizedPath>;

    fn home_directory(&self) -> Option<NormalizedPath>;

    fn path_separator(&self) -> char;

    /// Location of the host's own executable.
    fn host_executable_path(&self) -> Option<NormalizedPath>;

    fn selection(&self) -> Option<Selection>;

    fn environment_variable(&self, name: &str) -> Option<String>;

    /// Look up a settings value, rendered as text, or `default` when unset.
    fn configuration_value(&self, key: &str, default: &str) -> String;

    /// First workspace folder whose path is an ancestor of (or equal to) `path`.
    fn workspace_folder_containing(&self, path: &NormalizedPath) -> Option<NormalizedPath> {
        self.list_workspace_folders()
            .into_iter()
            .find(|folder| path.starts_with(&folder.path))
            .map(|folder| folder.path)
    }

    /// Workspace folder with the given name.
    fn workspace_folder_named(&self, name: &str) -> Option<WorkspaceFolder> {
        self.list_workspace_folders()
            .into_iter()
            .find(|folder| folder.name == name)
    }
}
