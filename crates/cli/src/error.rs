//! Error types for the CLI.

use ganttline_layout::LayoutError;
use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Layout engine or data source error.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Failed to render JSON output.
    #[error("Failed to render JSON output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Get the full error message, including data file positions.
    pub fn full_message(&self) -> String {
        match self {
            CliError::Layout(err) => err.full_message(),
            other => other.to_string(),
        }
    }
}
