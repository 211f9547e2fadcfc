//! Dashboard read model handed to renderers
//!
//! Everything a renderer needs for one render pass, already filtered and
//! aggregated. Values are plain text; renderers escape them.

use crate::evidence::domain::{FilterState, NormalizedView};
use serde::Serialize;
use std::collections::BTreeMap;

/// How the feed load for this render pass ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// Feed fetched and parsed
    Loaded,
    /// Feed fetched but unparseable; rendered as an empty table
    Malformed { details: String },
    /// Feed could not be fetched; no table is rendered
    Unavailable {
        status: Option<u16>,
        details: String,
    },
}

impl LoadOutcome {
    pub fn is_degraded(&self) -> bool {
        !matches!(self, LoadOutcome::Loaded)
    }

    /// Whether the records table is part of the output
    pub fn shows_table(&self) -> bool {
        !matches!(self, LoadOutcome::Unavailable { .. })
    }
}

/// One summary card: a title and its count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub title: String,
    pub value: usize,
}

impl SummaryCard {
    pub fn new(title: &str, value: usize) -> Self {
        Self {
            title: title.to_string(),
            value,
        }
    }
}

/// Global counts over the whole feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub cards: Vec<SummaryCard>,
    pub by_status: BTreeMap<String, usize>,
}

/// Producer metadata of the loaded feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedInfoView {
    pub location: String,
    pub generated_at: Option<String>,
    pub repository: Option<String>,
}

/// Metadata of the render pass itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderMetadataView {
    pub rendered_at: String,
    pub tool_name: String,
    pub tool_version: String,
    pub render_id: String,
}

/// Filter selectors with their options and current selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterView {
    pub state: FilterState,
    pub env_options: Vec<String>,
    pub test_options: Vec<String>,
}

/// Main read model for one dashboard render pass
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReadModel {
    pub metadata: RenderMetadataView,
    pub feed: FeedInfoView,
    pub outcome: LoadOutcome,
    /// "records: N / M", or the diagnostic replacing it
    pub status_line: String,
    /// "Generated at ... from ..." when the feed carries a timestamp
    pub meta_line: Option<String>,
    pub summary: SummaryView,
    pub filters: FilterView,
    /// Filtered rows, in feed order
    pub rows: Vec<NormalizedView>,
}
