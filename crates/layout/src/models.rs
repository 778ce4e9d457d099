//! Data models for the Ganttline layout engine
//!
//! Defines the task and project records the engine lays out, together with
//! the status and priority enums used for filtering and display styling.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task status
///
/// Display and filter tag only; the engine models no transitions between
/// states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
    Delayed,
    Paused,
}

impl TaskStatus {
    /// All statuses in display order.
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::NotStarted,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Delayed,
        TaskStatus::Paused,
    ];

    /// Returns the string representation used in data files
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "not-started",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Delayed => "delayed",
            TaskStatus::Paused => "paused",
        }
    }

    /// Parse a status from its data-file representation.
    ///
    /// Accepts underscores in place of hyphens.
    pub fn parse(s: &str) -> Option<Self> {
        match s.replace('_', "-").as_str() {
            "not-started" => Some(TaskStatus::NotStarted),
            "in-progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            "delayed" => Some(TaskStatus::Delayed),
            "paused" => Some(TaskStatus::Paused),
            _ => None,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task priority level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Returns the string representation used in data files
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    /// Parse a priority from its data-file representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "critical" => Some(Priority::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Colors assigned to projects that do not carry their own.
pub const PROJECT_PALETTE: [&str; 5] = ["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#7c3aed"];

/// Get the palette color for a project position.
///
/// Colors cycle through the palette if there are more projects than colors.
pub fn palette_color(index: usize) -> &'static str {
    PROJECT_PALETTE[index % PROJECT_PALETTE.len()]
}

/// A project that groups tasks on the timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Display color (hex); falls back to the palette when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Project {
    /// Create a new project without an explicit color
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
        }
    }

    /// Set the display color of this project
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The project's own color, or the palette color for its position.
    pub fn resolved_color(&self, index: usize) -> &str {
        self.color.as_deref().unwrap_or_else(|| palette_color(index))
    }
}

/// A task scheduled on the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,

    /// Task name
    pub name: String,

    /// Longer description
    #[serde(default)]
    pub description: String,

    /// First day of the task
    pub start_date: NaiveDate,

    /// Last day of the task; expected to be on or after `start_date`
    pub end_date: NaiveDate,

    /// Completed percentage, nominally 0-100
    #[serde(default)]
    pub progress: i32,

    /// Current status
    pub status: TaskStatus,

    /// Priority
    #[serde(default)]
    pub priority: Priority,

    /// Who is working on the task
    #[serde(default)]
    pub assignee: String,

    /// IDs of tasks this one depends on
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Owning project ID
    pub project: String,

    /// Whether the task is a milestone marker rather than a bar
    #[serde(default)]
    pub milestone: bool,

    /// Estimated effort in hours
    #[serde(default)]
    pub estimated_hours: f64,

    /// Effort spent so far in hours
    #[serde(default)]
    pub actual_hours: f64,
}

impl Task {
    /// Create a new task with required fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        project: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            start_date,
            end_date,
            progress: 0,
            status: TaskStatus::NotStarted,
            priority: Priority::default(),
            assignee: String::new(),
            dependencies: Vec::new(),
            project: project.into(),
            milestone: false,
            estimated_hours: 0.0,
            actual_hours: 0.0,
        }
    }

    /// Set the status of this task
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the priority of this task
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the progress percentage of this task
    pub fn with_progress(mut self, progress: i32) -> Self {
        self.progress = progress;
        self
    }

    /// Mark this task as a milestone
    pub fn with_milestone(mut self) -> Self {
        self.milestone = true;
        self
    }

    /// Add a dependency on another task
    pub fn with_dependency(mut self, task_id: impl Into<String>) -> Self {
        self.dependencies.push(task_id.into());
        self
    }

    /// Number of days between start and end (negative for malformed ranges).
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Progress clamped to `[0, 100]`.
    pub fn progress_percent(&self) -> u8 {
        self.progress.clamp(0, 100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // TaskStatus tests
    #[test]
    fn test_status_as_str() {
        assert_eq!(TaskStatus::NotStarted.as_str(), "not-started");
        assert_eq!(TaskStatus::InProgress.as_str(), "in-progress");
        assert_eq!(TaskStatus::Completed.as_str(), "completed");
        assert_eq!(TaskStatus::Delayed.as_str(), "delayed");
        assert_eq!(TaskStatus::Paused.as_str(), "paused");
    }

    #[test]
    fn test_status_display_matches_as_str() {
        for status in TaskStatus::ALL {
            assert_eq!(format!("{}", status), status.as_str());
        }
    }

    #[test]
    fn test_status_parse_round_trips() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_status_parse_accepts_underscores() {
        assert_eq!(
            TaskStatus::parse("in_progress"),
            Some(TaskStatus::InProgress)
        );
        assert_eq!(
            TaskStatus::parse("not_started"),
            Some(TaskStatus::NotStarted)
        );
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert_eq!(TaskStatus::parse("done"), None);
        assert_eq!(TaskStatus::parse("all"), None);
        assert_eq!(TaskStatus::parse(""), None);
    }

    #[test]
    fn test_status_serialize() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::NotStarted).unwrap(),
            "\"not-started\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
    }

    #[test]
    fn test_status_deserialize() {
        assert_eq!(
            serde_json::from_str::<TaskStatus>("\"delayed\"").unwrap(),
            TaskStatus::Delayed
        );
        assert!(serde_json::from_str::<TaskStatus>("\"in_progress\"").is_err());
    }

    // Priority tests
    #[test]
    fn test_priority_as_str_and_parse() {
        for priority in [
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Critical,
        ] {
            assert_eq!(Priority::parse(priority.as_str()), Some(priority));
            assert_eq!(format!("{}", priority), priority.as_str());
        }
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn test_priority_default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    // Palette tests
    #[test]
    fn test_palette_color_cycles() {
        assert_eq!(palette_color(0), "#3b82f6");
        assert_eq!(palette_color(4), "#7c3aed");
        assert_eq!(palette_color(5), palette_color(0));
        assert_eq!(palette_color(12), palette_color(2));
    }

    #[test]
    fn test_project_resolved_color_prefers_own_color() {
        let project = Project::new("p1", "Website").with_color("#000000");
        assert_eq!(project.resolved_color(3), "#000000");
    }

    #[test]
    fn test_project_resolved_color_falls_back_to_palette() {
        let project = Project::new("p1", "Website");
        assert_eq!(project.resolved_color(1), "#10b981");
    }

    // Task tests
    #[test]
    fn test_task_new_defaults() {
        let task = Task::new("t1", "Design", "p1", date(2024, 9, 20), date(2024, 9, 25));
        assert_eq!(task.status, TaskStatus::NotStarted);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.progress, 0);
        assert!(!task.milestone);
        assert!(task.dependencies.is_empty());
    }

    #[test]
    fn test_task_builders() {
        let task = Task::new("t1", "Launch", "p1", date(2024, 10, 1), date(2024, 10, 1))
            .with_status(TaskStatus::InProgress)
            .with_priority(Priority::Critical)
            .with_progress(40)
            .with_dependency("t0")
            .with_milestone();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, Priority::Critical);
        assert_eq!(task.progress, 40);
        assert_eq!(task.dependencies, vec!["t0".to_string()]);
        assert!(task.milestone);
    }

    #[test]
    fn test_task_duration_days() {
        let task = Task::new("t1", "Build", "p1", date(2024, 9, 20), date(2024, 9, 25));
        assert_eq!(task.duration_days(), 5);

        let malformed = Task::new("t2", "Oops", "p1", date(2024, 9, 25), date(2024, 9, 20));
        assert_eq!(malformed.duration_days(), -5);
    }

    #[test]
    fn test_task_progress_percent_clamps() {
        let base = Task::new("t1", "Build", "p1", date(2024, 9, 20), date(2024, 9, 25));
        assert_eq!(base.clone().with_progress(-10).progress_percent(), 0);
        assert_eq!(base.clone().with_progress(55).progress_percent(), 55);
        assert_eq!(base.with_progress(250).progress_percent(), 100);
    }

    #[test]
    fn test_task_deserialize_with_defaults() {
        let json = r#"{
            "id": "t1",
            "name": "Kickoff",
            "start_date": "2024-09-20",
            "end_date": "2024-09-25",
            "status": "in-progress",
            "project": "p1"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.start_date, date(2024, 9, 20));
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.description, "");
        assert!(!task.milestone);
    }

    #[test]
    fn test_project_deserialize_without_color() {
        let project: Project = serde_json::from_str(r#"{"id": "p1", "name": "Web"}"#).unwrap();
        assert_eq!(project, Project::new("p1", "Web"));
    }
}
