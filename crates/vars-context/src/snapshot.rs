//! Owned context snapshot

use crate::{ConfigValues, ContextProvider, NormalizedPath, Selection, WorkspaceFolder};
use std::collections::HashMap;

/// Immutable picture of the editing session taken at one instant.
///
/// Build one with [`Snapshot::builder`], or start from the running process
/// with [`SnapshotBuilder::from_process`].
#[derive(Debug, Clone)]
pub struct Snapshot {
    folders: Vec<WorkspaceFolder>,
    active_file: Option<NormalizedPath>,
    selection: Option<Selection>,
    env: HashMap<String, String>,
    config: ConfigValues,
    home: Option<NormalizedPath>,
    exec_path: Option<NormalizedPath>,
    separator: char,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Snapshot {
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::default()
    }

    /// Snapshot of the running process with no workspace folders and no
    /// active file.
    pub fn capture_process() -> Self {
        SnapshotBuilder::from_process().build()
    }

    pub fn config(&self) -> &ConfigValues {
        &self.config
    }
}

impl ContextProvider for Snapshot {
    fn list_workspace_folders(&self) -> Vec<WorkspaceFolder> {
        self.folders.clone()
    }

    fn active_file_path(&self) -> Option<NormalizedPath> {
        self.active_file.clone()
    }

    fn home_directory(&self) -> Option<NormalizedPath> {
        self.home.clone()
    }

    fn path_separator(&self) -> char {
        self.separator
    }

    fn host_executable_path(&self) -> Option<NormalizedPath> {
        self.exec_path.clone()
    }

    fn selection(&self) -> Option<Selection> {
        self.selection.clone()
    }

    fn environment_variable(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn configuration_value(&self, key: &str, default: &str) -> String {
        self.config
            .get_string(key)
            .unwrap_or_else(|| default.to_string())
    }
}

/// Builder for [`Snapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    snapshot: Snapshot,
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self {
            snapshot: Snapshot {
                folders: Vec::new(),
                active_file: None,
                selection: None,
                env: HashMap::new(),
                config: ConfigValues::new(),
                home: None,
                exec_path: None,
                separator: std::path::MAIN_SEPARATOR,
            },
        }
    }
}

impl SnapshotBuilder {
    /// Start from the running process: its environment variables, the
    /// user's home directory, its own executable and the native separator.
    pub fn from_process() -> Self {
        let exec_path = match std::env::current_exe() {
            Ok(path) => Some(NormalizedPath::new(dunce::simplified(&path))),
            Err(e) => {
                tracing::warn!(error = %e, "Could not determine the current executable");
                None
            }
        };

        // Non-UTF-8 variables are kept lossily rather than panicking
        let env = std::env::vars_os().map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        });

        let mut builder = Self::default().with_envs(env);
        builder.snapshot.home = dirs::home_dir().map(NormalizedPath::new);
        builder.snapshot.exec_path = exec_path;
        builder
    }

    pub fn with_workspace_folder(
        mut self,
        name: impl Into<String>,
        path: impl Into<NormalizedPath>,
    ) -> Self {
        self.snapshot
            .folders
            .push(WorkspaceFolder::new(name, path));
        self
    }

    pub fn with_folder(mut self, folder: WorkspaceFolder) -> Self {
        self.snapshot.folders.push(folder);
        self
    }

    pub fn with_active_file(mut self, path: impl Into<NormalizedPath>) -> Self {
        self.snapshot.active_file = Some(path.into());
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.snapshot.selection = Some(selection);
        self
    }

    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.snapshot.env.insert(name.into(), value.into());
        self
    }

    pub fn with_envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.snapshot
            .env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_config(mut self, config: ConfigValues) -> Self {
        self.snapshot.config = config;
        self
    }

    pub fn with_config_value(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.snapshot.config.insert(key, value);
        self
    }

    pub fn with_home(mut self, path: impl Into<NormalizedPath>) -> Self {
        self.snapshot.home = Some(path.into());
        self
    }

    pub fn with_exec_path(mut self, path: impl Into<NormalizedPath>) -> Self {
        self.snapshot.exec_path = Some(path.into());
        self
    }

    pub fn with_path_separator(mut self, separator: char) -> Self {
        self.snapshot.separator = separator;
        self
    }

    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}
