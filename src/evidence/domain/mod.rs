pub mod dashboard_metadata;
pub mod dashboard_summary;
pub mod evidence_record;
pub mod feed;
pub mod filter_state;
pub mod normalized_view;
pub mod record_link;
pub mod smoke_status;

pub use dashboard_metadata::DashboardMetadata;
pub use dashboard_summary::DashboardSummary;
pub use evidence_record::{EvidenceRecord, APPROVAL_SLOTS};
pub use feed::{Feed, FeedDialect};
pub use filter_state::FilterState;
pub use normalized_view::NormalizedView;
pub use record_link::{RecordLink, RecordLinks};
pub use smoke_status::SmokeStatus;
