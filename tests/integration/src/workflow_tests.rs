//! End-to-end resolution workflows across vars-context and vars-core
//!
//! Each test builds a session the way a host would (folders on disk,
//! settings files, a command facility) and resolves task-style templates.

use pretty_assertions::assert_eq;
use std::time::Duration;
use vars_context::{NoCommands, Selection, StaticCommands};
use vars_core::{Error, ResolveOptions, Resolver, resolve, scan};
use vars_test_utils::{DelayedCommands, ScriptedCommands, TestWorkspace, multi_root_snapshot};

// ==========================================================================
// On-disk workspaces
// ==========================================================================

#[tokio::test]
async fn test_launch_configuration_from_disk() {
    let ws = TestWorkspace::new();
    let file = ws.add_file("service/src/bin/server.rs", "fn main() {}");
    let settings = ws.write_settings(
        "service/.vscode/settings.json",
        r#"{"rust.profile": "release", "server": {"port": 9000}}"#,
    );

    let snapshot = ws
        .snapshot_builder(&["service"])
        .with_active_file(file)
        .with_config(vars_context::ConfigValues::load(&settings).unwrap())
        .build();

    let template = "cargo run --${config:rust.profile} --bin ${fileBasenameNoExtension} -- --port ${config:server.port} # ${relativeFileDirname}";
    let out = resolve(template, false, &snapshot, &NoCommands).await.unwrap();
    assert_eq!(
        out,
        "cargo run --release --bin server -- --port 9000 # src/bin"
    );
}

#[tokio::test]
async fn test_sibling_folders_with_shared_prefix() {
    let ws = TestWorkspace::new();
    let file = ws.add_file("app2/main.py", "print('hi')");

    let snapshot = ws
        .snapshot_builder(&["app", "app2"])
        .with_active_file(file)
        .build();

    let out = resolve(
        "${workspaceFolderBasename}|${relativeFile}|${workspaceFolderBasename:app2}",
        false,
        &snapshot,
        &NoCommands,
    )
    .await
    .unwrap();
    assert_eq!(out, "app|main.py|app2");
}

// ==========================================================================
// Commands
// ==========================================================================

#[tokio::test]
async fn test_command_sees_earlier_substitutions() {
    let commands = ScriptedCommands::new()
        .returning("pickProcess", 4242)
        .returning("api.pickTarget", "debug");

    let out = resolve(
        "attach ${command:pickProcess} in ${workspaceFolderBasename:api} (${command:${workspaceFolderBasename:api}.pickTarget})",
        false,
        &multi_root_snapshot(),
        &commands,
    )
    .await
    .unwrap();

    assert_eq!(out, "attach 4242 in api (debug)");
    assert_eq!(commands.calls(), vec!["pickProcess", "api.pickTarget"]);
}

#[tokio::test]
async fn test_command_result_expands_with_recursion() {
    let commands = StaticCommands::new().with("template", "${selectedText} at ${lineNumber}");
    let resolver = Resolver::new(ResolveOptions::new().with_recursive(true));

    let out = resolver
        .resolve("${command:template}", &multi_root_snapshot(), &commands)
        .await
        .unwrap();
    assert_eq!(out, "find_user at 12");
}

#[tokio::test]
async fn test_timeout_covers_every_pass() {
    let commands = DelayedCommands::new(
        ScriptedCommands::new().returning("step", "${command:step}"),
        Duration::from_millis(30),
    );
    let resolver = Resolver::new(
        ResolveOptions::new()
            .with_max_commands(1_000)
            .with_timeout(Duration::from_millis(100)),
    );

    let err = resolver
        .resolve("${command:step}", &multi_root_snapshot(), &commands)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout { .. }));
    assert!(commands.inner().call_count() < 1_000);
}

// ==========================================================================
// Synchronous callers
// ==========================================================================

#[test]
fn test_blocking_resolution_with_selection_override() {
    let ws = TestWorkspace::new();
    let file = ws.add_file("docs/guide.md", "# Guide");
    let snapshot = ws
        .snapshot_builder(&["docs"])
        .with_active_file(file)
        .with_selection(Selection::cursor(9, 0))
        .build();

    let out = Resolver::default()
        .resolve_blocking("${relativeFile}:${lineNumber}", &snapshot, &NoCommands)
        .unwrap();
    assert_eq!(out, "guide.md:10");
}

#[test]
fn test_scan_matches_what_resolution_replaces() {
    let template = "${workspaceFolder:api}/${fileBasename} ${nope} ${env:X}";
    let names: Vec<_> = scan(template)
        .iter()
        .map(|m| m.placeholder.name())
        .collect();
    assert_eq!(names, vec!["workspaceFolder", "fileBasename", "env"]);

    let out = Resolver::default()
        .resolve_blocking(template, &multi_root_snapshot(), &NoCommands)
        .unwrap();
    assert_eq!(out, "/work/api/user.rs ${nope} ");
}
