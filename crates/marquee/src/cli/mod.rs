//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the marquee binary.

mod commands;
mod handlers;
mod render;

pub use commands::Cli;
pub use handlers::{build_app, handle_command};
