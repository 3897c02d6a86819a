//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! fabula binary.

mod check;
mod commands;
mod info;
mod run;

pub use check::handle_check_command;
pub use commands::{Cli, Commands};
pub use info::handle_info_command;
pub use run::{DEFAULT_STORY_PROMPT, handle_run_command};
