//! CLI command implementations.
//!
//! Commands print their results to stdout (that is what a CLI is for, so
//! the workspace `print_stdout` lint is allowed per module); diagnostics go
//! through `tracing` like everywhere else.

pub mod cart;
pub mod catalog;
pub mod content;

/// Parse repeated `Name=Value` attribute arguments.
pub fn parse_attributes(raw: &[String]) -> Result<Vec<(String, String)>, String> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .ok_or_else(|| format!("invalid attribute {pair:?}, expected NAME=VALUE"))
        })
        .collect()
}
