//! Read models for the dashboard
//!
//! A snapshot is built once per feed load; read models are projected from it
//! for each filter state and handed to the renderers.

pub mod dashboard_read_model;
pub mod dashboard_read_model_builder;
pub mod dashboard_snapshot;

pub use dashboard_read_model::{
    DashboardReadModel, FeedInfoView, FilterView, LoadOutcome, RenderMetadataView, SummaryCard,
    SummaryView,
};
pub use dashboard_read_model_builder::DashboardReadModelBuilder;
pub use dashboard_snapshot::DashboardSnapshot;
