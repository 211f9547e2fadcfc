use serde::Serialize;

/// Sentinel accepted from users for "no constraint"
const ALL_SENTINEL: &str = "all";

/// FilterState value object holding the current filter selections
///
/// A `None` dimension places no constraint on records. Empty strings and the
/// "all" sentinel both map to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    env: Option<String>,
    test_status: Option<String>,
}

impl FilterState {
    pub fn new(env: Option<String>, test_status: Option<String>) -> Self {
        Self {
            env: normalize_selection(env),
            test_status: normalize_selection(test_status),
        }
    }

    /// Filter state with no active constraint
    pub fn all() -> Self {
        Self::default()
    }

    pub fn env(&self) -> Option<&str> {
        self.env.as_deref()
    }

    pub fn test_status(&self) -> Option<&str> {
        self.test_status.as_deref()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.env.is_none() && self.test_status.is_none()
    }
}

fn normalize_selection(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != ALL_SENTINEL)
}
