//! Ludus CLI library.
//!
//! This library provides the core functionality for the `ludus` command-line
//! interface: building the dictionary artifact from a lexicon, looking up
//! Latin forms and English words, and printing full paradigms.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
