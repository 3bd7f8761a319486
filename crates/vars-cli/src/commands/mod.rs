//! Command implementations for vars-cli

pub mod resolve;
pub mod scan;
pub mod tokens;

pub use resolve::run_resolve;
pub use scan::run_scan;
pub use tokens::run_tokens;
