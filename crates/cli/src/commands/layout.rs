//! Layout command for computing task bar geometry
//!
//! Implements the `gantt layout` command: builds a calendar window, filters
//! the tasks and prints each survivor's bar placement, followed by the
//! today marker and a status summary.

use chrono::{Local, NaiveDate};
use clap::Args;
use ganttline_layout::{
    StatusCounts, Task, TaskFilter, TaskLayout, TaskMarker, TaskSource, layout_tasks,
    today_marker,
};
use serde::Serialize;

use super::args::{FilterArgs, WindowArgs, parse_date};
use crate::error::CliResult;
use crate::output::{format_layout_table, format_status_summary};

/// Lay out filtered tasks over a calendar window
#[derive(Debug, Args)]
pub struct LayoutCommand {
    #[command(flatten)]
    pub window: WindowArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Date used for the today marker (defaults to the local date)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// A laid-out task in JSON output
#[derive(Debug, Serialize)]
struct LayoutRow<'a> {
    id: &'a str,
    name: &'a str,
    project: &'a str,
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
    left: f64,
    width: f64,
    progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    milestone_at: Option<f64>,
}

/// JSON document printed by `gantt layout --json`
#[derive(Debug, Serialize)]
struct LayoutDocument<'a> {
    first_day: NaiveDate,
    last_day: NaiveDate,
    today_marker: Option<f64>,
    tasks: Vec<LayoutRow<'a>>,
}

impl<'a> LayoutRow<'a> {
    fn new(task: &'a Task, color: Option<&'a str>, layout: &TaskLayout) -> Self {
        let milestone_at = match layout.marker {
            TaskMarker::Milestone { position } => Some(position),
            TaskMarker::Bar => None,
        };
        Self {
            id: &task.id,
            name: &task.name,
            project: &task.project,
            status: task.status.as_str(),
            color,
            left: layout.geometry.left,
            width: layout.geometry.width,
            progress: layout.progress,
            milestone_at,
        }
    }
}

impl LayoutCommand {
    /// Execute the layout command.
    ///
    /// # Errors
    ///
    /// Returns an error if the window or status selection is invalid, or
    /// the data source cannot be loaded.
    pub fn execute(&self, source: &dyn TaskSource) -> CliResult<String> {
        let window = self.window.window()?;
        let filter = TaskFilter::from_selections(&self.filter.project, &self.filter.status)?;
        let data = source.load()?;

        let rows: Vec<(&Task, TaskLayout)> = filter
            .apply(&data.tasks)
            .zip(layout_tasks(&data.tasks, &filter, &window))
            .collect();

        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let marker = today_marker(&window, today);

        if self.json {
            let document = LayoutDocument {
                first_day: window.first(),
                last_day: window.last(),
                today_marker: marker,
                tasks: rows
                    .iter()
                    .map(|(task, layout)| {
                        LayoutRow::new(task, data.project_color(&task.project), layout)
                    })
                    .collect(),
            };
            return Ok(serde_json::to_string_pretty(&document)?);
        }

        let counts = StatusCounts::from_tasks(rows.iter().map(|(task, _)| *task));
        let today_line = match marker {
            Some(position) => format!("Today ({}) at {:.2}%", today, position),
            None => format!("Today ({}) is outside the window", today),
        };

        Ok(format!(
            "Window: {} .. {} ({} days)\n\n{}\n\n{}\n{}",
            window.first(),
            window.last(),
            window.len(),
            format_layout_table(&rows),
            today_line,
            format_status_summary(&counts)
        ))
    }
}
