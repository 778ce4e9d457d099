//! Data sources for the timeline
//!
//! The engine never owns task data; callers hand it collections obtained
//! from a [`TaskSource`]. Two sources are provided: an in-memory one and a
//! JSON file reader.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LayoutError, LayoutResult};
use crate::models::{Project, Task};

/// Projects and tasks loaded from a source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineData {
    /// Projects, in display order
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Tasks, in display order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TimelineData {
    /// Check that every task refers to a known project.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::UnknownProject` for the first task whose
    /// project is not defined.
    pub fn validate(&self) -> LayoutResult<()> {
        let known: HashSet<&str> = self.projects.iter().map(|p| p.id.as_str()).collect();
        match self
            .tasks
            .iter()
            .find(|task| !known.contains(task.project.as_str()))
        {
            Some(task) => Err(LayoutError::UnknownProject {
                task_id: task.id.clone(),
                project_id: task.project.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Look up a project by ID.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Display color of a project, falling back to its palette slot.
    pub fn project_color(&self, id: &str) -> Option<&str> {
        self.projects
            .iter()
            .enumerate()
            .find(|(_, p)| p.id == id)
            .map(|(index, p)| p.resolved_color(index))
    }
}

/// Supplies projects and tasks to the layout engine
pub trait TaskSource {
    /// Load all projects and tasks.
    fn load(&self) -> LayoutResult<TimelineData>;

    /// Load the projects only.
    fn projects(&self) -> LayoutResult<Vec<Project>> {
        Ok(self.load()?.projects)
    }

    /// Load the tasks only.
    fn tasks(&self) -> LayoutResult<Vec<Task>> {
        Ok(self.load()?.tasks)
    }
}

/// Source backed by vectors held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    data: TimelineData,
}

impl InMemorySource {
    /// Create a source from projects and tasks
    pub fn new(projects: Vec<Project>, tasks: Vec<Task>) -> Self {
        Self {
            data: TimelineData { projects, tasks },
        }
    }
}

impl TaskSource for InMemorySource {
    fn load(&self) -> LayoutResult<TimelineData> {
        self.data.validate()?;
        Ok(self.data.clone())
    }
}

/// Source reading a JSON document of the form
/// `{"projects": [...], "tasks": [...]}`
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskSource for JsonFileSource {
    /// Read, parse and validate the data file.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Io` if the file cannot be read,
    /// `LayoutError::Json` if it is not a valid document and
    /// `LayoutError::UnknownProject` if a task refers to a missing project.
    fn load(&self) -> LayoutResult<TimelineData> {
        debug!("Loading timeline data from {}", self.path.display());

        let contents = std::fs::read_to_string(&self.path).map_err(|e| LayoutError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        let data: TimelineData =
            serde_json::from_str(&contents).map_err(|e| LayoutError::Json {
                path: self.path.clone(),
                source: e,
            })?;

        data.validate()?;

        debug!(
            "Loaded {} projects and {} tasks from {}",
            data.projects.len(),
            data.tasks.len(),
            self.path.display()
        );

        Ok(data)
    }
}
