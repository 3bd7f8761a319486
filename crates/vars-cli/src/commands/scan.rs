//! Scan command implementation

use colored::Colorize;
use serde::Serialize;
use vars_core::scan;

use crate::error::Result;

#[derive(Debug, Serialize)]
struct ScanEntry<'a> {
    token: &'a str,
    name: &'static str,
    argument: Option<&'a str>,
    start: usize,
    end: usize,
}

/// Run the scan command
pub fn run_scan(template: &str, json: bool) -> Result<()> {
    let matches = scan(template);

    if json {
        let entries: Vec<ScanEntry<'_>> = matches
            .iter()
            .map(|m| ScanEntry {
                token: &m.token,
                name: m.placeholder.name(),
                argument: m.argument.as_deref(),
                start: m.range.start,
                end: m.range.end,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("{}", "No placeholders found".dimmed());
        return Ok(());
    }

    println!("{}", "Placeholders".bold());
    for m in &matches {
        println!(
            "  {:>4}..{:<4} {}  {}",
            m.range.start,
            m.range.end,
            m.token.cyan(),
            m.placeholder.description().dimmed()
        );
    }
    println!();
    println!("{} placeholder(s)", matches.len());

    Ok(())
}
