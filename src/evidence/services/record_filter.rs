use crate::evidence::domain::{EvidenceRecord, FilterState};
use std::collections::BTreeSet;

/// RecordFilter service applying the environment and test-status filters
///
/// Both filters are exact string equality against resolved values: the
/// environment after the `env`/`environment` fallback, and the smoke status
/// after the `tests.smoke`/`smoke` fallback. Active constraints are combined
/// with AND.
pub struct RecordFilter;

impl RecordFilter {
    /// Returns the records satisfying `state`, in their original order
    pub fn filter(records: &[EvidenceRecord], state: &FilterState) -> Vec<EvidenceRecord> {
        records
            .iter()
            .filter(|record| Self::matches(record, state))
            .cloned()
            .collect()
    }

    /// Checks a single record against every active constraint
    pub fn matches(record: &EvidenceRecord, state: &FilterState) -> bool {
        if let Some(env) = state.env() {
            if record.environment().as_deref() != Some(env) {
                return false;
            }
        }

        if let Some(test_status) = state.test_status() {
            if record.smoke_status_text() != test_status {
                return false;
            }
        }

        true
    }

    /// Distinct non-empty environments across all records, sorted
    ///
    /// Computed over the whole feed so the selector keeps offering every
    /// environment regardless of the current selection.
    pub fn environment_options(records: &[EvidenceRecord]) -> Vec<String> {
        records
            .iter()
            .filter_map(EvidenceRecord::environment)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
