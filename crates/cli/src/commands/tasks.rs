//! Tasks command for listing filtered tasks
//!
//! Implements the `gantt tasks` command to display tasks with project and
//! status filtering.

use clap::Args;
use ganttline_layout::{StatusCounts, Task, TaskFilter, TaskSource};

use super::args::FilterArgs;
use crate::error::CliResult;
use crate::output::{format_status_summary, format_task_table};

/// List tasks with optional filters
#[derive(Debug, Args)]
pub struct TasksCommand {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl TasksCommand {
    /// Execute the tasks command.
    ///
    /// # Errors
    ///
    /// Returns an error if the status selection is unknown or the data
    /// source cannot be loaded.
    pub fn execute(&self, source: &dyn TaskSource) -> CliResult<String> {
        let filter = TaskFilter::from_selections(&self.filter.project, &self.filter.status)?;
        let data = source.load()?;
        let tasks: Vec<&Task> = filter.apply(&data.tasks).collect();

        if self.json {
            return Ok(serde_json::to_string_pretty(&tasks)?);
        }

        let counts = StatusCounts::from_tasks(tasks.iter().copied());
        Ok(format!(
            "{}\n\n{}",
            format_task_table(&tasks, &data),
            format_status_summary(&counts)
        ))
    }
}
