//! Golden-file tests using test-fixtures/
//!
//! Resolves the task templates in `test-fixtures/templates/tasks.json`
//! against the two-folder workspace in `test-fixtures/workspaces/`.

use pretty_assertions::assert_eq;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use vars_context::{ConfigValues, NormalizedPath, Position, Selection, Snapshot};
use vars_core::{ResolveOptions, Resolver};
use vars_test_utils::ScriptedCommands;

/// Path to the test-fixtures directory (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // tests/integration -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures")
}

/// Canonical root of the fixture workspaces, as substituted paths show it.
fn workspaces_root() -> NormalizedPath {
    let root = dunce::canonicalize(fixtures_dir().join("workspaces"))
        .unwrap_or_else(|e| panic!("Fixture workspaces missing: {e}"));
    NormalizedPath::new(root)
}

fn load_settings(relative: &str) -> ConfigValues {
    let path = workspaces_root().join(relative);
    ConfigValues::load(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture settings {relative}: {e}"))
}

/// The webapp/api session the golden templates are written against.
fn fixture_snapshot() -> Snapshot {
    let root = workspaces_root();
    Snapshot::builder()
        .with_path_separator('/')
        .with_workspace_folder("webapp", root.join("webapp"))
        .with_workspace_folder("api", root.join("api"))
        .with_active_file(root.join("webapp/src/app/main.ts"))
        .with_selection(Selection::new(
            Position::new(2, 2),
            Position::new(2, 9),
            "console",
        ))
        .with_config(load_settings("webapp/.vscode/settings.json"))
        .build()
}

#[derive(Debug, Deserialize)]
struct TaskCase {
    label: String,
    template: String,
    expected: String,
    #[serde(default)]
    recursive: bool,
}

fn load_cases() -> Vec<TaskCase> {
    let path = fixtures_dir().join("templates/tasks.json");
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&content).unwrap()
}

// ==========================================================================
// Fixture validity
// ==========================================================================

#[test]
fn test_fixture_files_exist() {
    let root = workspaces_root();
    for relative in [
        "webapp/.vscode/settings.json",
        "webapp/src/app/main.ts",
        "api/settings.toml",
        "api/settings.yaml",
        "api/handlers/user.rs",
    ] {
        assert!(
            root.join(relative).to_native().exists(),
            "Missing fixture file {relative}"
        );
    }
}

#[test]
fn test_golden_cases_are_present() {
    let cases = load_cases();
    assert!(cases.len() >= 10, "expected at least 10 cases, got {}", cases.len());
    assert!(cases.iter().any(|case| case.recursive));
}

// ==========================================================================
// Golden templates
// ==========================================================================

#[tokio::test]
async fn test_task_templates_resolve_to_golden_output() {
    let snapshot = fixture_snapshot();
    let commands = ScriptedCommands::new().returning("git.branch", "main");
    let root = workspaces_root();

    for case in load_cases() {
        let resolver = Resolver::new(ResolveOptions::new().with_recursive(case.recursive));
        let resolved = resolver
            .resolve(&case.template, &snapshot, &commands)
            .await
            .unwrap_or_else(|e| panic!("{}: {e}", case.label));
        let expected = case.expected.replace("[ROOT]", root.as_str());
        assert_eq!(resolved, expected, "case: {}", case.label);
    }
}

// ==========================================================================
// Settings formats
// ==========================================================================

#[test]
fn test_toml_and_yaml_settings_agree() {
    let toml = load_settings("api/settings.toml");
    let yaml = load_settings("api/settings.yaml");

    for key in [
        "editor.tabSize",
        "editor.formatOnSave",
        "rust-analyzer.cargo.features",
        "api.port",
        "api.bin",
    ] {
        assert_eq!(toml.get_string(key), yaml.get_string(key), "key: {key}");
    }
    assert_eq!(toml.get_string("rust-analyzer.cargo.features").as_deref(), Some(r#"["full"]"#));
}

#[tokio::test]
async fn test_api_settings_expand_recursively() {
    let root = workspaces_root();
    let snapshot = Snapshot::builder()
        .with_path_separator('/')
        .with_workspace_folder("webapp", root.join("webapp"))
        .with_workspace_folder("api", root.join("api"))
        .with_active_file(root.join("api/handlers/user.rs"))
        .with_config(load_settings("api/settings.toml"))
        .build();

    let resolver = Resolver::new(ResolveOptions::new().with_recursive(true));
    let out = resolver
        .resolve("${config:api.bin} --port ${config:api.port}", &snapshot, &vars_context::NoCommands)
        .await
        .unwrap();
    assert_eq!(
        out,
        format!("{}/api/target/debug/api --port 8080", root.as_str())
    );

    let out = resolver
        .resolve("${fileWorkspaceFolder} ${relativeFile}", &snapshot, &vars_context::NoCommands)
        .await
        .unwrap();
    assert_eq!(out, format!("{}/api handlers/user.rs", root.as_str()));
}
