use serde::Serialize;
use std::collections::BTreeMap;

/// DashboardSummary value object with global counts over a whole feed
///
/// Always computed over the full record set, never the filtered view, so
/// the summary cards show overall health next to a filtered table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    total: usize,
    by_status: BTreeMap<String, usize>,
    smoke_pass_count: usize,
}

impl DashboardSummary {
    pub fn new(total: usize, by_status: BTreeMap<String, usize>, smoke_pass_count: usize) -> Self {
        Self {
            total,
            by_status,
            smoke_pass_count,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn by_status(&self) -> &BTreeMap<String, usize> {
        &self.by_status
    }

    /// Count for one promotion status, zero when absent
    pub fn status_count(&self, status: &str) -> usize {
        self.by_status.get(status).copied().unwrap_or(0)
    }

    pub fn promoted_count(&self) -> usize {
        self.status_count("promoted")
    }

    pub fn failed_count(&self) -> usize {
        self.status_count("failed")
    }

    pub fn smoke_pass_count(&self) -> usize {
        self.smoke_pass_count
    }
}
