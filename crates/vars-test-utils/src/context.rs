//! Canned snapshots

use vars_context::{Position, Selection, Snapshot};

/// The single-root session most tests start from.
///
/// - folder `proj` at `/home/u/proj`
/// - active file `/home/u/proj/src/a.ts`, no selection
/// - home `/home/u`, exec path `/opt/editor/bin/editor`
/// - `/` as the separator, environment `USER=u`, setting `editor.tabSize = 4`
pub fn proj_snapshot() -> Snapshot {
    Snapshot::builder()
        .with_path_separator('/')
        .with_workspace_folder("proj", "/home/u/proj")
        .with_active_file("/home/u/proj/src/a.ts")
        .with_home("/home/u")
        .with_exec_path("/opt/editor/bin/editor")
        .with_env("USER", "u")
        .with_config_value("editor.tabSize", 4)
        .build()
}

/// Two roots, `web` and `api`, with the active file in the second one and a
/// selection on line 12.
pub fn multi_root_snapshot() -> Snapshot {
    Snapshot::builder()
        .with_path_separator('/')
        .with_workspace_folder("web", "/work/web")
        .with_workspace_folder("api", "/work/api")
        .with_active_file("/work/api/handlers/user.rs")
        .with_selection(Selection::new(Position::new(11, 4), Position::new(11, 13), "find_user"))
        .with_home("/home/dev")
        .build()
}
