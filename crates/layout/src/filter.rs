//! Task filtering
//!
//! Provides a builder-pattern TaskFilter combining a project selection and
//! a status selection, plus per-status tallies of filtered results.

use std::collections::HashMap;

use crate::error::{LayoutError, LayoutResult};
use crate::models::{Task, TaskStatus};

/// Selection value that matches every project or status.
pub const ALL_SELECTION: &str = "all";

/// Filter criteria for the timeline
///
/// `None` in either field means "all" and lets every task through. Both
/// criteria are combined with AND semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Only tasks of this project
    pub project: Option<String>,
    /// Only tasks with this status
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Create a new pass-through filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a single project
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Restrict to a single status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Build a filter from raw selections where `"all"` means no restriction.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidArgument` if the status selection is
    /// neither `"all"` nor a known status.
    pub fn from_selections(project: &str, status: &str) -> LayoutResult<Self> {
        let mut filter = Self::new();

        if !is_all(project) {
            filter.project = Some(project.to_string());
        }

        if !is_all(status) {
            let parsed = TaskStatus::parse(&status.to_lowercase()).ok_or_else(|| {
                LayoutError::invalid(format!(
                    "invalid status '{}'. Valid values: all, not-started, in-progress, completed, delayed, paused",
                    status
                ))
            })?;
            filter.status = Some(parsed);
        }

        Ok(filter)
    }

    /// Whether this filter lets every task through
    pub fn is_pass_through(&self) -> bool {
        self.project.is_none() && self.status.is_none()
    }

    /// Check a single task against both criteria
    pub fn matches(&self, task: &Task) -> bool {
        let matches_project = self
            .project
            .as_deref()
            .is_none_or(|project| task.project == project);
        let matches_status = self.status.is_none_or(|status| task.status == status);
        matches_project && matches_status
    }

    /// Lazily yield the matching tasks, in input order.
    pub fn apply<'a, I>(&'a self, tasks: I) -> impl Iterator<Item = &'a Task> + 'a
    where
        I: IntoIterator<Item = &'a Task>,
        I::IntoIter: 'a,
    {
        tasks.into_iter().filter(move |task| self.matches(task))
    }
}

fn is_all(selection: &str) -> bool {
    selection.eq_ignore_ascii_case(ALL_SELECTION)
}

/// Return the tasks matching `filter`, in input order.
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    filter.apply(tasks).cloned().collect()
}

/// Per-status tally of a task collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCounts {
    counts: HashMap<TaskStatus, usize>,
    total: usize,
}

impl StatusCounts {
    /// Count the tasks by status.
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            *counts.counts.entry(task.status).or_insert(0) += 1;
            counts.total += 1;
        }
        counts
    }

    /// Number of tasks with `status`.
    pub fn get(&self, status: TaskStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    /// Number of tasks counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Non-zero counts in status display order.
    pub fn non_zero(&self) -> Vec<(TaskStatus, usize)> {
        TaskStatus::ALL
            .into_iter()
            .map(|status| (status, self.get(status)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
