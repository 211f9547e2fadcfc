use serde_json::Value;

/// Named approval slots, in display order
pub const APPROVAL_SLOTS: [&str; 5] = ["specPr", "archPr", "demoPr", "uatPr", "releasePr"];

/// EvidenceRecord - one raw deployment/test evidence entry
///
/// Producers have emitted several field-name dialects over time without a
/// version tag, so the record keeps the original JSON value and every logical
/// field is read through an ordered fallback chain. All dialect knowledge
/// lives in this type.
///
/// A field counts as absent when it is missing, `null`, `false`, or an empty
/// string. Numbers and `true` are displayed as their JSON text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvidenceRecord(Value);

impl EvidenceRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn evidence_id(&self) -> Option<String> {
        self.text(&["evidenceId"])
    }

    pub fn service(&self) -> Option<String> {
        self.text(&["service"])
    }

    /// Deployment environment: `env`, then `environment`
    pub fn environment(&self) -> Option<String> {
        self.first_text(&[&["env"], &["environment"]])
    }

    /// Overall promotion status (e.g. "promoted", "failed")
    pub fn promotion_status(&self) -> Option<String> {
        self.text(&["status"])
    }

    /// Registry reference of the form `repo@sha256:<hex>`
    pub fn harbor_reference(&self) -> Option<String> {
        self.text(&["image", "harbor"])
    }

    /// Plain image reference: `image.digest`, then `image.tag`
    pub fn image_reference(&self) -> Option<String> {
        self.first_text(&[&["image", "digest"], &["image", "tag"]])
    }

    pub fn commit(&self) -> Option<String> {
        self.text(&["deploy", "commit"])
    }

    /// Deployment timestamp, most specific first
    pub fn timestamp(&self) -> Option<String> {
        self.first_text(&[
            &["deploy", "syncedAt"],
            &["deploy", "updated_at"],
            &["timestamps", "updated_at"],
            &["promotedAt"],
        ])
    }

    /// Smoke test status: `tests.smoke.status`, then `smoke.status`, else "unknown"
    pub fn smoke_status_text(&self) -> String {
        self.first_text(&[&["tests", "smoke", "status"], &["smoke", "status"]])
            .unwrap_or_else(|| "unknown".to_string())
    }

    pub fn workflow_run(&self) -> Option<String> {
        self.url(&["source", "workflowRun"])
    }

    /// URL stored in a named approval slot (see [`APPROVAL_SLOTS`])
    pub fn approval(&self, slot: &str) -> Option<String> {
        self.url(&["approvals", slot])
    }

    /// Entries of `approvals.prs` in array order; unusable entries are `None`
    /// so callers can keep positional labels stable.
    pub fn approval_prs(&self) -> Vec<Option<String>> {
        match self.lookup(&["approvals", "prs"]) {
            Some(Value::Array(items)) => items.iter().map(url_text).collect(),
            _ => Vec::new(),
        }
    }

    /// Provenance of the record: `_record_path`, then `_recordPath`
    pub fn record_path(&self) -> Option<String> {
        self.first_text(&[&["_record_path"], &["_recordPath"]])
    }

    fn lookup(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.0, |node, key| node.as_object()?.get(*key))
    }

    fn text(&self, path: &[&str]) -> Option<String> {
        self.lookup(path).and_then(display_text)
    }

    fn first_text(&self, paths: &[&[&str]]) -> Option<String> {
        paths.iter().find_map(|path| self.text(path))
    }

    fn url(&self, path: &[&str]) -> Option<String> {
        self.lookup(path).and_then(url_text)
    }
}

impl From<Value> for EvidenceRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

fn url_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
