use super::evidence_record::EvidenceRecord;
use std::collections::BTreeMap;
use std::fmt;

/// Top-level shape emitted by the feed producer
///
/// Exactly one dialect is accepted per run; a document in the other shape is
/// rejected as malformed rather than coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedDialect {
    /// Object with `records`, plus optional `generated_at`, `source`,
    /// `total_records` and `summary`
    #[default]
    Document,
    /// Flat array of records, as written by the evidence collector
    RecordArray,
}

impl std::str::FromStr for FeedDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "document" | "object" => Ok(FeedDialect::Document),
            "records" | "array" => Ok(FeedDialect::RecordArray),
            _ => Err(format!(
                "Invalid feed dialect: {}. Please specify 'document' or 'records'",
                s
            )),
        }
    }
}

impl fmt::Display for FeedDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedDialect::Document => write!(f, "document"),
            FeedDialect::RecordArray => write!(f, "records"),
        }
    }
}

/// Feed - immutable snapshot of one loaded evidence feed
///
/// `reported_total` and `reported_by_status` are whatever the producer wrote
/// into the document; they are kept for comparison only and never used as
/// the dashboard's counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    generated_at: Option<String>,
    repository: Option<String>,
    reported_total: Option<u64>,
    reported_by_status: Option<BTreeMap<String, u64>>,
    records: Vec<EvidenceRecord>,
}

impl Feed {
    pub fn new(
        generated_at: Option<String>,
        repository: Option<String>,
        reported_total: Option<u64>,
        reported_by_status: Option<BTreeMap<String, u64>>,
        records: Vec<EvidenceRecord>,
    ) -> Self {
        Self {
            generated_at,
            repository,
            reported_total,
            reported_by_status,
            records,
        }
    }

    /// Feed holding only records, with no producer metadata
    pub fn from_records(records: Vec<EvidenceRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Empty feed substituted when the real one is malformed
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn generated_at(&self) -> Option<&str> {
        self.generated_at.as_deref()
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    pub fn reported_total(&self) -> Option<u64> {
        self.reported_total
    }

    pub fn reported_by_status(&self) -> Option<&BTreeMap<String, u64>> {
        self.reported_by_status.as_ref()
    }

    pub fn records(&self) -> &[EvidenceRecord] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
