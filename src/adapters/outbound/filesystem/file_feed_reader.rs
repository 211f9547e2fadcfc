use crate::ports::outbound::FeedSource;
use crate::shared::error::DashboardError;
use crate::shared::security::{validate_payload_size, validate_regular_file, MAX_FEED_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;

/// FileFeedReader adapter for reading the evidence feed from disk
///
/// This adapter implements the FeedSource port for local feeds, e.g. the
/// `evidence/index.json` written by a collector. The file is re-read on
/// every fetch.
pub struct FileFeedReader {
    path: PathBuf,
    location: String,
}

impl FileFeedReader {
    pub fn new(path: PathBuf) -> Self {
        let location = path.display().to_string();
        Self { path, location }
    }

    /// Safely read the feed bytes with security checks:
    /// - Reject symbolic links and non-regular files
    /// - Check file size limits
    fn safe_read(&self) -> Result<Vec<u8>> {
        validate_regular_file(&self.path, "evidence feed")?;

        let metadata = fs::metadata(&self.path)?;
        validate_payload_size(metadata.len(), &self.location, MAX_FEED_SIZE)?;

        fs::read(&self.path).map_err(|e| {
            DashboardError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// One-line reason for a read failure, without hints
    fn reason(error: &anyhow::Error) -> String {
        match error.downcast_ref::<DashboardError>() {
            Some(DashboardError::FileReadError { details, .. }) => details.clone(),
            Some(DashboardError::SecurityError { reason, .. }) => reason.clone(),
            _ => error.to_string().lines().next().unwrap_or_default().to_string(),
        }
    }
}

#[async_trait]
impl FeedSource for FileFeedReader {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<String> {
        // Any read failure means the feed is unavailable; there is no status code
        let bytes = self.safe_read().map_err(|e| DashboardError::FeedUnavailable {
            location: self.location.clone(),
            status: None,
            details: Self::reason(&e),
        })?;

        String::from_utf8(bytes).map_err(|e| {
            DashboardError::FeedMalformed {
                location: self.location.clone(),
                details: format!("invalid UTF-8: {}", e.utf8_error()),
            }
            .into()
        })
    }
}
