use serde::{Serialize, Serializer};

/// Placeholder token shown when a record has no links
pub const NO_LINKS_PLACEHOLDER: &str = "-";

/// A labelled link attached to an evidence record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordLink {
    pub label: String,
    pub url: String,
}

impl RecordLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Ordered link set of a record
///
/// An empty set is presented as the single `-` placeholder token, never as an
/// empty list. It serializes the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordLinks(Vec<RecordLink>);

impl RecordLinks {
    pub fn new(links: Vec<RecordLink>) -> Self {
        Self(links)
    }

    pub fn is_placeholder(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordLink> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(|link| link.label.as_str()).collect()
    }
}

impl Serialize for RecordLinks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_placeholder() {
            serializer.serialize_str(NO_LINKS_PLACEHOLDER)
        } else {
            self.0.serialize(serializer)
        }
    }
}
