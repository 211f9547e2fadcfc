use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a healthy render from one
/// where the feed could not be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - feed loaded and dashboard rendered
    Success = 0,
    /// Dashboard rendered with a diagnostic because the feed was unavailable or malformed
    FeedDegraded = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (bad config, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::FeedDegraded => write!(f, "Feed Degraded (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dashboard rendering.
///
/// The two feed variants are the only errors a render pass recovers from;
/// everything else aborts the run.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("{}", unavailable_message(.location, .status, .details))]
    FeedUnavailable {
        location: String,
        status: Option<u16>,
        details: String,
    },

    #[error("Failed to parse evidence feed: {location}\nDetails: {details}\n\n💡 Hint: Check that the feed producer emits the configured dialect")]
    FeedMalformed { location: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for settings and builder inputs
    #[error("Validation error: {message}")]
    Validation { message: String },
}

fn unavailable_message(location: &str, status: &Option<u16>, details: &str) -> String {
    match status {
        Some(code) => format!("Evidence feed unavailable: {} returned HTTP {}", location, code),
        None => format!(
            "Evidence feed unavailable: {}\nDetails: {}\n\n💡 Hint: Check that the feed location exists and is reachable",
            location, details
        ),
    }
}
