use crate::evidence::domain::{DashboardSummary, EvidenceRecord, Feed, SmokeStatus};
use std::collections::BTreeMap;

/// Grouping key for records without a promotion status
const UNKNOWN_STATUS: &str = "unknown";

/// SummaryAggregator service computing the dashboard's global counts
///
/// Counts are always computed from the records themselves. A producer-supplied
/// summary is treated as an optional cache that may be stale or missing.
pub struct SummaryAggregator;

impl SummaryAggregator {
    pub fn summarize(records: &[EvidenceRecord]) -> DashboardSummary {
        let mut by_status: BTreeMap<String, usize> = BTreeMap::new();
        let mut smoke_pass_count = 0;

        for record in records {
            let status = record
                .promotion_status()
                .unwrap_or_else(|| UNKNOWN_STATUS.to_string());
            *by_status.entry(status).or_insert(0) += 1;

            if SmokeStatus::classify(&record.smoke_status_text()) == SmokeStatus::Pass {
                smoke_pass_count += 1;
            }
        }

        DashboardSummary::new(records.len(), by_status, smoke_pass_count)
    }

    /// Describes every way the producer's own summary disagrees with `summary`
    ///
    /// Returns an empty list when the feed carries no summary or it matches.
    pub fn reported_discrepancies(feed: &Feed, summary: &DashboardSummary) -> Vec<String> {
        let mut discrepancies = Vec::new();

        if let Some(reported) = feed.reported_total() {
            if reported != summary.total() as u64 {
                discrepancies.push(format!(
                    "total_records reports {} but the feed contains {} record(s)",
                    reported,
                    summary.total()
                ));
            }
        }

        if let Some(reported) = feed.reported_by_status() {
            let statuses: std::collections::BTreeSet<&String> =
                reported.keys().chain(summary.by_status().keys()).collect();
            for status in statuses {
                let reported_count = reported.get(status).copied().unwrap_or(0);
                let computed_count = summary.status_count(status) as u64;
                if reported_count != computed_count {
                    discrepancies.push(format!(
                        "summary.by_status.{} reports {} but {} record(s) have that status",
                        status, reported_count, computed_count
                    ));
                }
            }
        }

        discrepancies
    }
}
