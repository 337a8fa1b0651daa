//! Command modules for the lox CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod tokenize;

// Re-export command types and functions
pub use tokenize::{run_tokenize, TokenizeArgs};
