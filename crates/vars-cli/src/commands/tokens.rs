//! Tokens command implementation

use colored::Colorize;
use vars_core::Placeholder;

/// Run the tokens command
pub fn run_tokens() {
    println!("{}", "Supported placeholders".bold());
    println!();
    for placeholder in Placeholder::ALL {
        println!(
            "  {}  {}",
            format!("{:<34}", placeholder.token()).cyan(),
            placeholder.description()
        );
    }
}
