use crate::evidence::domain::{FeedDialect, FilterState};

/// DashboardRequest - Internal request DTO for the dashboard use case
#[derive(Debug, Clone, Default)]
pub struct DashboardRequest {
    /// Shape the feed document is expected to have
    pub dialect: FeedDialect,
    /// Environment and smoke-test selection
    pub filter: FilterState,
}

impl DashboardRequest {
    pub fn new(dialect: FeedDialect, filter: FilterState) -> Self {
        Self { dialect, filter }
    }
}
