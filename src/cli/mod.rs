//! Line-oriented shell over the dashboard, profile, assistant and booking wizard.

mod commands;
mod context;
mod help;
mod io;
pub mod output;
mod registry;
pub mod render;
mod shell;

pub use context::{CliError, CliMode, CommandError, ShellContext};
pub use shell::run_cli;
