use crate::evidence::domain::normalized_view::PLACEHOLDER;
use crate::evidence::domain::{
    EvidenceRecord, NormalizedView, RecordLink, RecordLinks, SmokeStatus, APPROVAL_SLOTS,
};

/// Marker separating a repository from its content digest
const DIGEST_MARKER: &str = "@sha256:";

/// Number of hex characters kept from a digest
const SHORT_DIGEST_LEN: usize = 16;

/// Number of characters kept from a commit hash
const SHORT_COMMIT_LEN: usize = 12;

/// RecordNormalizer service mapping raw records to display views
///
/// Pure: missing or oddly-typed fields resolve to placeholders and never
/// produce an error.
pub struct RecordNormalizer;

impl RecordNormalizer {
    pub fn normalize(record: &EvidenceRecord) -> NormalizedView {
        let smoke_text = record.smoke_status_text();
        let short_digest = match record.harbor_reference() {
            Some(harbor) => Self::short_digest(Some(&harbor)),
            None => record
                .image_reference()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        };

        NormalizedView {
            id: or_placeholder(record.evidence_id()),
            service: or_placeholder(record.service()),
            env: or_placeholder(record.environment()),
            short_digest,
            short_commit: Self::short_commit(record.commit().as_deref()),
            timestamp: or_placeholder(record.timestamp()),
            smoke_status: SmokeStatus::classify(&smoke_text),
            smoke_text,
            promotion_status: record
                .promotion_status()
                .unwrap_or_else(|| "unknown".to_string()),
            record_path: or_placeholder(record.record_path()),
            links: Self::links(record),
        }
    }

    /// Shortens a registry reference to `sha256:` plus 16 hex characters
    ///
    /// References without the `@sha256:` marker pass through unchanged;
    /// absent or empty references become `-`.
    pub fn short_digest(harbor: Option<&str>) -> String {
        match harbor {
            None | Some("") => PLACEHOLDER.to_string(),
            Some(reference) => match reference.find(DIGEST_MARKER) {
                Some(idx) => {
                    let hex: String = reference[idx + DIGEST_MARKER.len()..]
                        .chars()
                        .take(SHORT_DIGEST_LEN)
                        .collect();
                    format!("sha256:{}", hex)
                }
                None => reference.to_string(),
            },
        }
    }

    /// Truncates a commit hash to its first 12 characters; absent becomes `-`
    pub fn short_commit(commit: Option<&str>) -> String {
        match commit {
            None | Some("") => PLACEHOLDER.to_string(),
            Some(hash) => hash.chars().take(SHORT_COMMIT_LEN).collect(),
        }
    }

    /// Assembles the ordered link list: workflow run, approval slots, then PRs
    ///
    /// PR labels follow the 1-based array position, so skipped entries leave
    /// gaps in the numbering.
    pub fn links(record: &EvidenceRecord) -> RecordLinks {
        let mut links = Vec::new();

        if let Some(run) = record.workflow_run() {
            links.push(RecordLink::new("run", run));
        }

        for slot in APPROVAL_SLOTS {
            if let Some(url) = record.approval(slot) {
                links.push(RecordLink::new(slot, url));
            }
        }

        for (idx, pr) in record.approval_prs().into_iter().enumerate() {
            if let Some(url) = pr {
                links.push(RecordLink::new(format!("pr{}", idx + 1), url));
            }
        }

        RecordLinks::new(links)
    }
}

fn or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| PLACEHOLDER.to_string())
}
