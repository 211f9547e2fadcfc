//! Loaded feed snapshot and everything derived from it once per load

use super::dashboard_read_model::{DashboardReadModel, LoadOutcome};
use super::dashboard_read_model_builder::DashboardReadModelBuilder;
use crate::evidence::domain::{
    DashboardMetadata, DashboardSummary, Feed, FilterState, NormalizedView,
};
use crate::evidence::services::{RecordFilter, RecordNormalizer, SummaryAggregator};

/// Immutable state of one feed load
///
/// Normalized views, environment options, and the summary are computed once
/// here. Filter changes only re-run [`DashboardSnapshot::view`], which does
/// no I/O. A reload builds a new snapshot; nothing is merged across loads.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    location: String,
    outcome: LoadOutcome,
    feed: Feed,
    views: Vec<NormalizedView>,
    env_options: Vec<String>,
    summary: DashboardSummary,
}

impl DashboardSnapshot {
    /// Builds a loaded snapshot from a feed and its already-normalized views
    ///
    /// `views[i]` must be the normalization of `feed.records()[i]`.
    pub fn new(location: String, feed: Feed, views: Vec<NormalizedView>) -> Self {
        debug_assert_eq!(feed.record_count(), views.len());
        let env_options = RecordFilter::environment_options(feed.records());
        let summary = SummaryAggregator::summarize(feed.records());

        Self {
            location,
            outcome: LoadOutcome::Loaded,
            feed,
            views,
            env_options,
            summary,
        }
    }

    /// Builds a loaded snapshot, normalizing every record
    pub fn from_feed(location: String, feed: Feed) -> Self {
        let views = feed
            .records()
            .iter()
            .map(RecordNormalizer::normalize)
            .collect();
        Self::new(location, feed, views)
    }

    /// Snapshot for a feed that was fetched but could not be parsed
    ///
    /// Stands in an empty record sequence so the table still renders.
    pub fn malformed(location: String, details: String) -> Self {
        Self::degraded(location, LoadOutcome::Malformed { details })
    }

    /// Snapshot for a feed that could not be fetched
    pub fn unavailable(location: String, status: Option<u16>, details: String) -> Self {
        Self::degraded(location, LoadOutcome::Unavailable { status, details })
    }

    fn degraded(location: String, outcome: LoadOutcome) -> Self {
        Self {
            location,
            outcome,
            feed: Feed::empty(),
            views: Vec::new(),
            env_options: Vec::new(),
            summary: SummaryAggregator::summarize(&[]),
        }
    }

    /// Projects the snapshot through `filter` into a read model
    pub fn view(&self, filter: &FilterState, metadata: &DashboardMetadata) -> DashboardReadModel {
        DashboardReadModelBuilder::build(self, filter, metadata)
    }

    /// Normalized views of the records matching `filter`, in feed order
    pub fn filtered_views(&self, filter: &FilterState) -> Vec<NormalizedView> {
        self.feed
            .records()
            .iter()
            .zip(&self.views)
            .filter(|(record, _)| RecordFilter::matches(record, filter))
            .map(|(_, view)| view.clone())
            .collect()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn views(&self) -> &[NormalizedView] {
        &self.views
    }

    pub fn env_options(&self) -> &[String] {
        &self.env_options
    }

    pub fn summary(&self) -> &DashboardSummary {
        &self.summary
    }
}
