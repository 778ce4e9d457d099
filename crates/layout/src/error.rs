use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for the Ganttline layout engine
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Error for invalid input or argument validation failure
    #[error("{message}")]
    InvalidArgument { message: String },

    /// Calendar arithmetic left the range chrono can represent
    #[error("Date out of range: {days} day(s) from {anchor}")]
    DateOutOfRange { anchor: NaiveDate, days: i64 },

    /// Error reading a data file
    #[error("Failed to read data file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a data file
    #[error("Failed to parse data file at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A task references a project the data source does not define
    #[error("Task '{task_id}' references unknown project '{project_id}'")]
    UnknownProject { task_id: String, project_id: String },
}

impl LayoutError {
    /// Shorthand for building an `InvalidArgument` error.
    pub fn invalid(message: impl Into<String>) -> Self {
        LayoutError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get the full error message including the underlying cause.
    ///
    /// The `Display` output of wrapped errors is already folded into the
    /// message for I/O and JSON failures; this adds the JSON line/column.
    pub fn full_message(&self) -> String {
        match self {
            LayoutError::Json { path, source } => format!(
                "Failed to parse data file at {} (line {}, column {}): {}",
                path.display(),
                source.line(),
                source.column(),
                source
            ),
            other => other.to_string(),
        }
    }
}

/// Result type alias for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
