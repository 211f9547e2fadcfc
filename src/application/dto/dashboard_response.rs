use crate::application::read_models::{DashboardReadModel, DashboardSnapshot};

/// DashboardResponse - Internal response DTO for the dashboard use case
///
/// Carries the read model for this render pass together with the snapshot
/// it was projected from, so callers can re-filter without reloading.
#[derive(Debug, Clone)]
pub struct DashboardResponse {
    pub read_model: DashboardReadModel,
    pub snapshot: DashboardSnapshot,
}

impl DashboardResponse {
    pub fn new(read_model: DashboardReadModel, snapshot: DashboardSnapshot) -> Self {
        Self {
            read_model,
            snapshot,
        }
    }

    /// True when the feed could not be fetched or parsed
    pub fn is_degraded(&self) -> bool {
        self.read_model.outcome.is_degraded()
    }
}
