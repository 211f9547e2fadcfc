use crate::adapters::outbound::filesystem::FileFeedReader;
use crate::adapters::outbound::network::HttpFeedClient;
use crate::ports::outbound::FeedSource;
use crate::shared::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Default feed location, relative to the working directory
pub const DEFAULT_FEED_LOCATION: &str = "./evidence/index.json";

/// Where the evidence feed lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedLocation {
    /// `http://` or `https://` URL
    Http(String),
    /// Anything else is a local path
    File(PathBuf),
}

impl FeedLocation {
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            FeedLocation::Http(location.to_string())
        } else {
            FeedLocation::File(PathBuf::from(location))
        }
    }
}

impl Default for FeedLocation {
    fn default() -> Self {
        FeedLocation::parse(DEFAULT_FEED_LOCATION)
    }
}

/// Factory for creating the feed source adapter for a location
pub struct FeedSourceFactory;

impl FeedSourceFactory {
    /// Creates a feed source for `location`
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed
    pub fn create(location: FeedLocation, timeout: Duration) -> Result<Box<dyn FeedSource>> {
        Ok(match location {
            FeedLocation::Http(url) => Box::new(HttpFeedClient::new(url, timeout)?),
            FeedLocation::File(path) => Box::new(FileFeedReader::new(path)),
        })
    }
}
