//! Test infrastructure for integration tests
//!
//! Provides isolated data files and command builders. Each test gets its
//! own temp directory to ensure no shared state.

#![allow(dead_code)]

use chrono::NaiveDate;
use ganttline_cli::commands::{
    AdvanceCommand, FilterArgs, LayoutCommand, TasksCommand, WindowArgs, WindowCommand,
};
use ganttline_layout::{Direction, Granularity, JsonFileSource, Project, Task, TimelineData};
use std::path::PathBuf;

/// Test context containing an isolated data file and temp directory
pub struct TestContext {
    pub source: JsonFileSource,
    pub temp_dir: PathBuf,
}

impl TestContext {
    /// Create a new test context whose data file holds `data`.
    ///
    /// Each call creates a uniquely named temp directory using process ID,
    /// thread ID, and nanosecond timestamp to guarantee isolation.
    pub fn new(data: &TimelineData) -> Self {
        let json = serde_json::to_string_pretty(data).unwrap();
        Self::with_raw(&json)
    }

    /// Create a context whose data file holds `contents` verbatim.
    pub fn with_raw(contents: &str) -> Self {
        let temp_dir = std::env::temp_dir().join(format!(
            "gantt-integration-test-{}-{:?}-{}",
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&temp_dir).unwrap();

        let path = temp_dir.join("tasks.json");
        std::fs::write(&path, contents).unwrap();

        Self {
            source: JsonFileSource::new(path),
            temp_dir,
        }
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.temp_dir);
    }
}

/// Shorthand for a 2024 date
pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

/// Two projects and a mix of tasks around October 2024
pub fn sample_data() -> TimelineData {
    use ganttline_layout::{Priority, TaskStatus};

    TimelineData {
        projects: vec![
            Project::new("web", "Website Redesign"),
            Project::new("api", "Public API").with_color("#222222"),
        ],
        tasks: vec![
            Task::new("t1", "Research", "web", date(9, 20), date(9, 25))
                .with_status(TaskStatus::Completed)
                .with_progress(100),
            Task::new("t2", "Wireframes", "web", date(9, 26), date(10, 10))
                .with_status(TaskStatus::InProgress)
                .with_progress(60)
                .with_dependency("t1"),
            Task::new("t3", "Auth endpoints", "api", date(9, 10), date(9, 20))
                .with_status(TaskStatus::Delayed)
                .with_priority(Priority::High),
            Task::new("t4", "Rate limiting", "api", date(11, 5), date(11, 20)),
            Task::new("t5", "Beta launch", "web", date(10, 20), date(10, 20)).with_milestone(),
            Task::new("t6", "Legacy cleanup", "api", date(8, 1), date(8, 15))
                .with_status(TaskStatus::Paused),
        ],
    }
}

pub fn window_cmd(anchor: NaiveDate, before: u32, days: u32) -> WindowCommand {
    WindowCommand {
        window: WindowArgs {
            anchor,
            before,
            days,
        },
    }
}

pub fn layout_cmd(anchor: NaiveDate, project: &str, status: &str, json: bool) -> LayoutCommand {
    LayoutCommand {
        window: WindowArgs {
            anchor,
            before: 15,
            days: 45,
        },
        filter: FilterArgs {
            project: project.to_string(),
            status: status.to_string(),
        },
        today: Some(anchor),
        json,
    }
}

pub fn tasks_cmd(project: &str, status: &str, json: bool) -> TasksCommand {
    TasksCommand {
        filter: FilterArgs {
            project: project.to_string(),
            status: status.to_string(),
        },
        json,
    }
}

pub fn advance_cmd(
    anchor: NaiveDate,
    direction: Direction,
    granularity: Granularity,
) -> AdvanceCommand {
    AdvanceCommand {
        anchor,
        direction,
        granularity,
    }
}
