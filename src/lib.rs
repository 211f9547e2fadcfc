//! evidence-dashboard - Read-only dashboard for deployment evidence feeds
//!
//! This library loads a JSON evidence feed, normalizes each heterogeneous
//! record into a display view, filters by environment and smoke status, and
//! summarizes the whole feed. Renderers turn the result into HTML, Markdown,
//! or JSON. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`evidence`): Records, views, filter state, and the pure services over them
//! - **Application Layer** (`application`): Use case, read models, DTOs, and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Feed sources, renderers, presenters, console output
//! - **Shared** (`shared`): Error types, escaping, and security checks
//!
//! # Example
//!
//! ```no_run
//! use evidence_dashboard::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let feed_source = FileFeedReader::new(PathBuf::from("./evidence/index.json"));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = BuildDashboardUseCase::new(feed_source, progress_reporter);
//!
//! // Execute
//! let filter = FilterState::new(Some("prod".to_string()), None);
//! let request = DashboardRequest::new(FeedDialect::Document, filter);
//! let response = use_case.execute(request).await?;
//!
//! // Render output
//! let html = HtmlRenderer::new().render(&response.read_model)?;
//! println!("{}", html);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod evidence;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileFeedReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::HttpFeedClient;
    pub use crate::adapters::outbound::renderers::{HtmlRenderer, JsonRenderer, MarkdownRenderer};
    pub use crate::application::dto::{DashboardRequest, DashboardResponse, OutputFormat};
    pub use crate::application::read_models::{DashboardReadModel, DashboardSnapshot};
    pub use crate::application::use_cases::BuildDashboardUseCase;
    pub use crate::evidence::domain::{
        DashboardSummary, EvidenceRecord, Feed, FeedDialect, FilterState, NormalizedView,
        SmokeStatus,
    };
    pub use crate::evidence::services::{
        FeedParser, RecordFilter, RecordNormalizer, SummaryAggregator,
    };
    pub use crate::ports::outbound::{DashboardRenderer, FeedSource, OutputPresenter, ProgressReporter};
    pub use crate::shared::Result;
}
