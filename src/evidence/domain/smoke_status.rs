use serde::Serialize;
use std::fmt;

/// Styling class of a post-deploy smoke test result
///
/// Raw statuses outside the known set collapse to `Unknown`; the raw text is
/// kept separately for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokeStatus {
    Pass,
    Fail,
    Pending,
    Unknown,
}

impl SmokeStatus {
    /// All statuses, in the order offered by the test-status selector
    pub const ALL: [SmokeStatus; 4] = [
        SmokeStatus::Pass,
        SmokeStatus::Fail,
        SmokeStatus::Pending,
        SmokeStatus::Unknown,
    ];

    /// Classifies raw status text. Matching is exact.
    pub fn classify(text: &str) -> Self {
        match text {
            "pass" => SmokeStatus::Pass,
            "fail" => SmokeStatus::Fail,
            "pending" => SmokeStatus::Pending,
            _ => SmokeStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SmokeStatus::Pass => "pass",
            SmokeStatus::Fail => "fail",
            SmokeStatus::Pending => "pending",
            SmokeStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SmokeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
