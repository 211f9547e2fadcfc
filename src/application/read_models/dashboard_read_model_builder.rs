//! Builder for constructing DashboardReadModel from a snapshot

use super::dashboard_read_model::{
    DashboardReadModel, FeedInfoView, FilterView, LoadOutcome, RenderMetadataView, SummaryCard,
    SummaryView,
};
use super::dashboard_snapshot::DashboardSnapshot;
use crate::evidence::domain::{DashboardMetadata, DashboardSummary, FilterState, SmokeStatus};

/// Repository label used when the feed does not name its source
const LOCAL_REPOSITORY: &str = "local";

/// Builder transforming a snapshot plus filter state into a read model
pub struct DashboardReadModelBuilder;

impl DashboardReadModelBuilder {
    pub fn build(
        snapshot: &DashboardSnapshot,
        filter: &FilterState,
        metadata: &DashboardMetadata,
    ) -> DashboardReadModel {
        let rows = snapshot.filtered_views(filter);
        let status_line = Self::status_line(snapshot, rows.len());

        DashboardReadModel {
            metadata: Self::build_metadata(metadata),
            feed: FeedInfoView {
                location: snapshot.location().to_string(),
                generated_at: snapshot.feed().generated_at().map(String::from),
                repository: snapshot.feed().repository().map(String::from),
            },
            outcome: snapshot.outcome().clone(),
            status_line,
            meta_line: Self::meta_line(snapshot),
            summary: Self::build_summary(snapshot.summary()),
            filters: FilterView {
                state: filter.clone(),
                env_options: snapshot.env_options().to_vec(),
                test_options: SmokeStatus::ALL
                    .iter()
                    .map(|s| s.as_str().to_string())
                    .collect(),
            },
            rows,
        }
    }

    fn build_metadata(metadata: &DashboardMetadata) -> RenderMetadataView {
        RenderMetadataView {
            rendered_at: metadata.rendered_at().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            render_id: metadata.render_id().to_string(),
        }
    }

    fn build_summary(summary: &DashboardSummary) -> SummaryView {
        SummaryView {
            cards: vec![
                SummaryCard::new("Total Records", summary.total()),
                SummaryCard::new("Promoted", summary.promoted_count()),
                SummaryCard::new("Failed", summary.failed_count()),
                SummaryCard::new("Smoke Pass", summary.smoke_pass_count()),
            ],
            by_status: summary.by_status().clone(),
        }
    }

    /// "records: shown / total", or the diagnostic for a degraded load
    fn status_line(snapshot: &DashboardSnapshot, shown: usize) -> String {
        match snapshot.outcome() {
            LoadOutcome::Loaded => {
                format!("records: {} / {}", shown, snapshot.feed().record_count())
            }
            LoadOutcome::Malformed { details } => {
                format!("failed to parse {}: {}", snapshot.location(), details)
            }
            LoadOutcome::Unavailable {
                status: Some(code),
                ..
            } => format!("failed to load {}: {}", snapshot.location(), code),
            LoadOutcome::Unavailable {
                status: None,
                details,
            } => format!("error: {}", details),
        }
    }

    fn meta_line(snapshot: &DashboardSnapshot) -> Option<String> {
        let feed = snapshot.feed();
        feed.generated_at().map(|generated_at| {
            format!(
                "Generated at {} from {}",
                generated_at,
                feed.repository().unwrap_or(LOCAL_REPOSITORY)
            )
        })
    }
}
