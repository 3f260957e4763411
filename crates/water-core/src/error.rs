use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the water dashboard.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The usage data file does not exist.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// A file exists but could not be opened or read.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV is malformed: missing columns, bad timestamps or non-numeric usage.
    #[error("Failed to parse usage data: {0}")]
    Parse(String),

    /// There were no records to aggregate.
    #[error("No usage data to analyze: {0}")]
    EmptyData(String),

    /// The external text generator failed or is unavailable.
    #[error("Advice service error: {0}")]
    ExternalService(String),

    /// A JSON payload could not be encoded or decoded.
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    /// Short message suitable for showing to the user in place of results.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::NotFound(_) => {
                "File not found. Please ensure the file exists and try again.".to_string()
            }
            other => format!("An error occurred: {other}"),
        }
    }
}

/// Convenience alias used throughout the dashboard crates.
pub type Result<T> = std::result::Result<T, DashboardError>;
