use super::record_link::RecordLinks;
use super::smoke_status::SmokeStatus;
use serde::Serialize;

/// Display placeholder for absent text fields
pub const PLACEHOLDER: &str = "-";

/// Canonical display model of one evidence record
///
/// All values are plain, unescaped text; escaping happens in the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedView {
    pub id: String,
    pub service: String,
    pub env: String,
    pub short_digest: String,
    pub short_commit: String,
    pub timestamp: String,
    /// Styling class; always one of pass, fail, pending, unknown
    pub smoke_status: SmokeStatus,
    /// Raw smoke status text, displayed verbatim
    pub smoke_text: String,
    pub promotion_status: String,
    pub record_path: String,
    pub links: RecordLinks,
}
