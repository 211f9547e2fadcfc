use crate::application::dto::{DashboardRequest, DashboardResponse};
use crate::application::read_models::{DashboardReadModel, DashboardSnapshot, LoadOutcome};
use crate::evidence::domain::{FeedDialect, FilterState, SmokeStatus};
use crate::evidence::services::{
    FeedParser, MetadataGenerator, RecordNormalizer, SummaryAggregator,
};
use crate::ports::outbound::{FeedSource, ProgressReporter};
use crate::shared::error::DashboardError;
use crate::shared::Result;

/// BuildDashboardUseCase - Core use case for rendering the evidence dashboard
///
/// This use case orchestrates one render pass: fetch the feed, parse it in
/// the configured dialect, normalize every record once, then project the
/// snapshot through the filter state.
///
/// Feed errors do not abort the pass. They produce a degraded snapshot whose
/// status line carries the diagnostic.
///
/// # Type Parameters
/// * `FS` - FeedSource implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildDashboardUseCase<FS, PR> {
    feed_source: FS,
    progress_reporter: PR,
}

impl<FS, PR> BuildDashboardUseCase<FS, PR>
where
    FS: FeedSource,
    PR: ProgressReporter,
{
    /// Creates a new BuildDashboardUseCase with injected dependencies
    pub fn new(feed_source: FS, progress_reporter: PR) -> Self {
        Self {
            feed_source,
            progress_reporter,
        }
    }

    /// Executes a full render pass: load, then view
    ///
    /// # Returns
    /// DashboardResponse with the read model and the snapshot it came from
    ///
    /// # Errors
    /// Only errors other than an unavailable or malformed feed are returned
    pub async fn execute(&self, request: DashboardRequest) -> Result<DashboardResponse> {
        let snapshot = self.load(request.dialect).await?;
        let read_model = self.view(&snapshot, &request.filter);
        if !read_model.outcome.is_degraded() {
            self.progress_reporter
                .report_completion(&format!("✅ Dashboard ready ({})", read_model.status_line));
        }
        Ok(DashboardResponse::new(read_model, snapshot))
    }

    /// Fetches the feed and builds a fresh snapshot
    ///
    /// Every call fetches again; calling it a second time is a reload and
    /// shares nothing with earlier snapshots.
    pub async fn load(&self, dialect: FeedDialect) -> Result<DashboardSnapshot> {
        let location = self.feed_source.location().to_string();
        self.progress_reporter
            .report(&format!("📖 Loading evidence feed from: {}", location));

        let content = match self.feed_source.fetch().await {
            Ok(content) => content,
            Err(error) => return self.degrade(location, error),
        };

        let feed = match FeedParser::parse(&content, dialect, &location) {
            Ok(feed) => feed,
            Err(error) => return self.degrade(location, error),
        };

        let total = feed.record_count();
        let views = feed
            .records()
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let view = RecordNormalizer::normalize(record);
                self.progress_reporter
                    .report_progress(idx + 1, total, Some(view.service.as_str()));
                view
            })
            .collect();

        let snapshot = DashboardSnapshot::new(location, feed, views);
        self.report_discrepancies(&snapshot);
        self.progress_reporter
            .report(&format!("✅ Loaded {} evidence record(s)", total));

        Ok(snapshot)
    }

    /// Projects a snapshot through `filter` without any I/O
    pub fn view(&self, snapshot: &DashboardSnapshot, filter: &FilterState) -> DashboardReadModel {
        self.warn_unmatched_filters(snapshot, filter);
        snapshot.view(filter, &MetadataGenerator::generate_default_metadata())
    }

    /// Turns a feed error into a degraded snapshot; other errors propagate
    ///
    /// The full diagnostic goes to the reporter; the snapshot keeps only the
    /// one-line reason for the status line.
    fn degrade(&self, location: String, error: anyhow::Error) -> Result<DashboardSnapshot> {
        let diagnostic = error.to_string();
        match error.downcast::<DashboardError>() {
            Ok(DashboardError::FeedUnavailable {
                status, details, ..
            }) => {
                self.progress_reporter
                    .report_error(&format!("⚠️  {}", diagnostic));
                Ok(DashboardSnapshot::unavailable(location, status, details))
            }
            Ok(DashboardError::FeedMalformed { details, .. }) => {
                self.progress_reporter
                    .report_error(&format!("⚠️  {}", diagnostic));
                Ok(DashboardSnapshot::malformed(location, details))
            }
            Ok(other) => Err(other.into()),
            Err(error) => Err(error),
        }
    }

    /// Warns when the producer's own summary disagrees with the records
    fn report_discrepancies(&self, snapshot: &DashboardSnapshot) {
        for discrepancy in
            SummaryAggregator::reported_discrepancies(snapshot.feed(), snapshot.summary())
        {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", discrepancy));
        }
    }

    /// Warns about selections that can never match anything
    fn warn_unmatched_filters(&self, snapshot: &DashboardSnapshot, filter: &FilterState) {
        if *snapshot.outcome() != LoadOutcome::Loaded {
            return;
        }

        if let Some(env) = filter.env() {
            if !snapshot.env_options().iter().any(|option| option == env) {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Environment filter '{}' did not match any record. Available: {}",
                    env,
                    if snapshot.env_options().is_empty() {
                        "none".to_string()
                    } else {
                        snapshot.env_options().join(", ")
                    }
                ));
            }
        }

        if let Some(test_status) = filter.test_status() {
            if !SmokeStatus::ALL.iter().any(|s| s.as_str() == test_status) {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Smoke filter '{}' is not one of pass, fail, pending, unknown. Only records with that exact status text will match.",
                    test_status
                ));
            }
        }
    }
}
