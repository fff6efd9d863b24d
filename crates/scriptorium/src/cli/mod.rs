//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the scriptorium binary.

mod cache;
mod commands;
mod reference;

pub use cache::handle_cache_command;
pub use commands::{Cli, Commands};
pub use reference::{list_books, parse_citation, split_citation, text_of_citation};
