//! Window command for printing a calendar window
//!
//! Implements the `gantt window` command, listing the days of a window
//! followed by its month header spans.

use clap::Args;

use super::args::WindowArgs;
use crate::error::CliResult;
use crate::output::format_window;

/// Print the days of a calendar window
#[derive(Debug, Args)]
pub struct WindowCommand {
    #[command(flatten)]
    pub window: WindowArgs,
}

impl WindowCommand {
    /// Execute the window command.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidArgument` if `--days` is zero.
    pub fn execute(&self) -> CliResult<String> {
        let window = self.window.window()?;
        Ok(format_window(&window))
    }
}
