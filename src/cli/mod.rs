//! CLI module for coursebase
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server
//! - openapi: print the bundled API document

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
