//! Resolve command implementation

use serde_json::json;
use std::time::Duration;
use vars_context::NormalizedPath;
use vars_core::{ResolveOptions, Resolver};

use crate::cli::ResolveArgs;
use crate::context::{absolutize, build_snapshot};
use crate::error::Result;
use crate::shell::{CommandTable, ShellCommands, parse_fixed};

/// Run the resolve command
pub async fn run_resolve(args: ResolveArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let snapshot = build_snapshot(&args, &cwd)?;

    let table = match &args.commands {
        Some(path) => CommandTable::load(&NormalizedPath::new(absolutize(path, &cwd)))?,
        None => CommandTable::default(),
    };
    let executor = ShellCommands::new(parse_fixed(&args.static_commands)?, table, &cwd);

    let resolved = Resolver::new(options_from(&args))
        .resolve(&args.template, &snapshot, &executor)
        .await?;

    if args.json {
        let output = json!({
            "template": args.template,
            "resolved": resolved,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{resolved}");
    }

    Ok(())
}

fn options_from(args: &ResolveArgs) -> ResolveOptions {
    let options = ResolveOptions::new()
        .with_recursive(args.recursive)
        .with_max_depth(args.max_depth)
        .with_max_commands(args.max_commands);
    match args.timeout_ms {
        Some(ms) => options.with_timeout(Duration::from_millis(ms)),
        None => options,
    }
}
