//! Tests for command placeholder resolution

use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use vars_context::{NoCommands, Snapshot, StaticCommands};
use vars_core::{DEFAULT_MAX_COMMANDS, Error, ResolveOptions, Resolver, resolve};
use vars_test_utils::{DelayedCommands, ScriptedCommands, proj_snapshot};

// =============================================================================
// Results
// =============================================================================

#[tokio::test]
async fn test_command_result_is_substituted() {
    let commands = StaticCommands::new().with("answer", "42");
    let out = resolve("${command:answer}", false, &proj_snapshot(), &commands)
        .await
        .unwrap();
    assert_eq!(out, "42");
}

#[tokio::test]
async fn test_non_string_results_render_as_json() {
    let commands = ScriptedCommands::new()
        .returning("count", 42)
        .returning("flag", true)
        .returning("list", json!([1, 2]))
        .returning_nothing("quiet");
    let out = resolve(
        "${command:count} ${command:flag} ${command:list} [${command:quiet}]",
        false,
        &Snapshot::default(),
        &commands,
    )
    .await
    .unwrap();
    assert_eq!(out, "42 true [1,2] []");
}

#[tokio::test]
async fn test_failing_command_becomes_empty_and_resolution_continues() {
    let commands = ScriptedCommands::new()
        .failing("broken", "no active editor")
        .returning("ok", "x");
    let out = resolve("a${command:broken}b${command:ok}", false, &Snapshot::default(), &commands)
        .await
        .unwrap();
    assert_eq!(out, "abx");
    assert_eq!(commands.calls(), vec!["broken", "ok"]);
}

#[tokio::test]
async fn test_unknown_command_becomes_empty() {
    let out = resolve("run ${command:nope}!", false, &Snapshot::default(), &NoCommands)
        .await
        .unwrap();
    assert_eq!(out, "run !");
}

// =============================================================================
// Ordering
// =============================================================================

#[tokio::test]
async fn test_commands_invoked_left_to_right_once_per_occurrence() {
    let commands = ScriptedCommands::new()
        .returning("first", "1")
        .returning("second", "2");
    let out = resolve(
        "${command:second}-${command:first}-${command:second}",
        false,
        &Snapshot::default(),
        &commands,
    )
    .await
    .unwrap();
    assert_eq!(out, "2-1-2");
    assert_eq!(commands.calls(), vec!["second", "first", "second"]);
}

#[tokio::test]
async fn test_commands_run_after_other_placeholders() {
    // The id is itself a placeholder, substituted before the command runs
    let commands = ScriptedCommands::new().returning("pick-u", "picked");
    let out = resolve("${command:pick-${env:USER}}", false, &proj_snapshot(), &commands)
        .await
        .unwrap();
    assert_eq!(out, "picked");
    assert_eq!(commands.calls(), vec!["pick-u"]);
}

#[tokio::test]
async fn test_command_result_not_expanded_without_recursion() {
    let commands = ScriptedCommands::new().returning("pick", "${env:USER}");
    let out = resolve("${command:pick}", false, &proj_snapshot(), &commands)
        .await
        .unwrap();
    assert_eq!(out, "${env:USER}");

    let out = resolve("${command:pick}", true, &proj_snapshot(), &commands)
        .await
        .unwrap();
    assert_eq!(out, "u");
}

#[tokio::test]
async fn test_command_token_from_a_value_is_still_invoked() {
    let snapshot = Snapshot::builder().with_env("CMD", "${command:pick}").build();
    let commands = ScriptedCommands::new().returning("pick", "main.rs");
    let out = resolve("${env:CMD}", false, &snapshot, &commands).await.unwrap();
    assert_eq!(out, "main.rs");
}

// =============================================================================
// Limits
// =============================================================================

#[tokio::test]
async fn test_self_reproducing_command_hits_limit() {
    let commands = ScriptedCommands::new().returning("again", "${command:again}");
    let err = resolve("${command:again}", false, &Snapshot::default(), &commands)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::CommandLimitExceeded { limit } if limit == DEFAULT_MAX_COMMANDS
    ));
    assert_eq!(commands.call_count(), DEFAULT_MAX_COMMANDS);
}

#[tokio::test]
async fn test_custom_command_limit() {
    let commands = StaticCommands::new().with("n", "1");
    let resolver = Resolver::new(ResolveOptions::new().with_max_commands(2));

    let out = resolver
        .resolve("${command:n}${command:n}", &Snapshot::default(), &commands)
        .await
        .unwrap();
    assert_eq!(out, "11");

    let err = resolver
        .resolve("${command:n}${command:n}${command:n}", &Snapshot::default(), &commands)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::CommandLimitExceeded { limit: 2 }));
}

#[tokio::test]
async fn test_budget_is_shared_across_passes() {
    let snapshot = Snapshot::builder().with_env("MORE", "x${command:tick}").build();
    let commands = ScriptedCommands::new().returning("tick", "${env:MORE}");
    let resolver = Resolver::new(
        ResolveOptions::new()
            .with_recursive(true)
            .with_max_commands(3),
    );

    let err = resolver
        .resolve("${command:tick}", &snapshot, &commands)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::CommandLimitExceeded { limit: 3 }));
    assert_eq!(commands.call_count(), 3);
}

// =============================================================================
// Timeout
// =============================================================================

#[tokio::test]
async fn test_slow_commands_time_out() {
    let commands = DelayedCommands::new(
        StaticCommands::new().with("slow", "done"),
        Duration::from_millis(500),
    );
    let resolver = Resolver::new(ResolveOptions::new().with_timeout(Duration::from_millis(20)));

    let err = resolver
        .resolve("${command:slow}", &Snapshot::default(), &commands)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout { .. }));
}

#[tokio::test]
async fn test_fast_commands_finish_within_timeout() {
    let commands = DelayedCommands::new(
        StaticCommands::new().with("quick", "done"),
        Duration::from_millis(1),
    );
    let resolver = Resolver::new(ResolveOptions::new().with_timeout(Duration::from_secs(5)));

    let out = resolver
        .resolve("${command:quick}", &Snapshot::default(), &commands)
        .await
        .unwrap();
    assert_eq!(out, "done");
}

#[test]
fn test_timeout_applies_to_blocking_calls() {
    let commands = DelayedCommands::new(NoCommands, Duration::from_millis(500));
    let resolver = Resolver::new(ResolveOptions::new().with_timeout(Duration::from_millis(20)));

    let err = resolver
        .resolve_blocking("${command:slow}", &Snapshot::default(), &commands)
        .unwrap_err();
    assert!(matches!(err, Error::Timeout { .. }));
}
