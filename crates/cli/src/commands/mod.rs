//! CLI commands for Ganttline
//!
//! This module contains all subcommand implementations for the gantt CLI.

pub mod advance;
pub mod args;
pub mod layout;
pub mod tasks;
pub mod window;

pub use advance::AdvanceCommand;
pub use args::{FilterArgs, WindowArgs};
pub use layout::LayoutCommand;
pub use tasks::TasksCommand;
pub use window::WindowCommand;

use clap::Subcommand;
use ganttline_layout::TaskSource;

use crate::error::CliResult;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the days of a calendar window
    Window(WindowCommand),
    /// Lay out filtered tasks over a calendar window
    Layout(LayoutCommand),
    /// List tasks with project and status filters
    Tasks(TasksCommand),
    /// Move an anchor date one navigation step
    Advance(AdvanceCommand),
}

impl Command {
    /// Whether the command reads the data file.
    pub fn needs_data(&self) -> bool {
        matches!(self, Command::Layout(_) | Command::Tasks(_))
    }

    /// Execute the command with the given data source.
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the command execution fails.
    pub fn execute(&self, source: &dyn TaskSource) -> CliResult<String> {
        match self {
            Command::Window(cmd) => cmd.execute(),
            Command::Layout(cmd) => cmd.execute(source),
            Command::Tasks(cmd) => cmd.execute(source),
            Command::Advance(cmd) => Ok(cmd.execute()),
        }
    }
}
