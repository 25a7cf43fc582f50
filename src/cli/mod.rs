//! Command-line interface for pagesieve.
//!
//! Parsing (`parser`), command dispatch (`commands`), and output
//! rendering (`output`).

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
