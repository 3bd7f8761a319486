//! [`TestWorkspace`] builder for on-disk scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vars_context::{NormalizedPath, Snapshot, SnapshotBuilder};

/// A temporary directory holding workspace folders, source files and
/// settings files.
///
/// # Example
///
/// ```rust,no_run
/// use vars_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// ws.add_file("proj/src/main.rs", "fn main() {}");
/// ws.write_settings("settings.json", r#"{"editor.tabSize": 2}"#);
/// let snapshot = ws.snapshot_builder(&["proj"]).build();
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the workspace.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Create the directory `relative` (and its parents).
    pub fn add_folder(&self, relative: &str) -> PathBuf {
        let dir = self.path(relative);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn add_file(&self, relative: &str, content: &str) -> PathBuf {
        let file = self.path(relative);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&file, content).unwrap();
        file
    }

    /// Write a settings file; its extension picks the format it is read as.
    pub fn write_settings(&self, relative: &str, content: &str) -> NormalizedPath {
        NormalizedPath::new(self.add_file(relative, content))
    }

    /// Builder with one workspace folder per entry of `folders`, each named
    /// after its last component, and `/` as the separator.
    pub fn snapshot_builder(&self, folders: &[&str]) -> SnapshotBuilder {
        folders.iter().fold(
            Snapshot::builder().with_path_separator('/'),
            |builder, folder| {
                let path = NormalizedPath::new(self.add_folder(folder));
                let name = path.file_name().unwrap_or_default().to_string();
                builder.with_workspace_folder(name, path)
            },
        )
    }
}
