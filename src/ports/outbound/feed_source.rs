use crate::shared::Result;
use async_trait::async_trait;

/// FeedSource port for retrieving the raw evidence feed
///
/// This port abstracts where the feed lives (HTTP endpoint, local file).
/// Every fetch goes to the source; implementations must not cache.
///
/// # Async Support
/// The fetch is the only suspension point of a render pass.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Location of the feed, shown in status lines and diagnostics
    fn location(&self) -> &str;

    /// Fetches the raw feed body
    ///
    /// # Returns
    /// The feed content as text, not yet parsed
    ///
    /// # Errors
    /// Returns `DashboardError::FeedUnavailable` if:
    /// - The transport returns a non-success status (the code is carried)
    /// - The request fails before a response arrives
    /// - A local feed file cannot be read
    async fn fetch(&self) -> Result<String>;
}

#[async_trait]
impl<T: FeedSource + ?Sized> FeedSource for Box<T> {
    fn location(&self) -> &str {
        (**self).location()
    }

    async fn fetch(&self) -> Result<String> {
        (**self).fetch().await
    }
}
