use crate::evidence::domain::{EvidenceRecord, Feed, FeedDialect};
use crate::shared::error::DashboardError;
use crate::shared::Result;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// FeedParser service for turning feed text into a Feed snapshot
///
/// Only the top-level shape is validated here. Individual records are never
/// rejected; whatever they contain is resolved later by the normalizer.
pub struct FeedParser;

impl FeedParser {
    /// Parses feed content in the given dialect
    ///
    /// # Arguments
    /// * `content` - Raw feed body
    /// * `dialect` - The single top-level shape accepted for this run
    /// * `location` - Feed location, used in error messages
    ///
    /// # Errors
    /// Returns `DashboardError::FeedMalformed` if the content is not JSON or
    /// its top-level shape does not match `dialect`
    pub fn parse(content: &str, dialect: FeedDialect, location: &str) -> Result<Feed> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| malformed(location, format!("invalid JSON: {}", e)))?;

        match dialect {
            FeedDialect::Document => Self::parse_document(value, location),
            FeedDialect::RecordArray => Self::parse_record_array(value, location),
        }
    }

    fn parse_document(value: Value, location: &str) -> Result<Feed> {
        let mut document = match value {
            Value::Object(map) => map,
            other => {
                return Err(malformed(
                    location,
                    format!(
                        "expected a feed document object, found {}",
                        json_kind(&other)
                    ),
                ))
            }
        };

        let records = match document.remove("records") {
            Some(Value::Array(items)) => items.into_iter().map(EvidenceRecord::new).collect(),
            Some(other) => {
                return Err(malformed(
                    location,
                    format!("\"records\" must be an array, found {}", json_kind(&other)),
                ))
            }
            None => {
                return Err(malformed(
                    location,
                    "feed document has no \"records\" array".to_string(),
                ))
            }
        };

        let generated_at = document
            .get("generated_at")
            .and_then(Value::as_str)
            .map(String::from);
        let repository = document
            .get("source")
            .and_then(|source| source.get("repository"))
            .and_then(Value::as_str)
            .map(String::from);
        let reported_total = document.get("total_records").and_then(Value::as_u64);
        let reported_by_status = document
            .get("summary")
            .and_then(|summary| summary.get("by_status"))
            .and_then(Value::as_object)
            .map(status_counts);

        Ok(Feed::new(
            generated_at,
            repository,
            reported_total,
            reported_by_status,
            records,
        ))
    }

    fn parse_record_array(value: Value, location: &str) -> Result<Feed> {
        match value {
            Value::Array(items) => Ok(Feed::from_records(
                items.into_iter().map(EvidenceRecord::new).collect(),
            )),
            other => Err(malformed(
                location,
                format!("expected an array of records, found {}", json_kind(&other)),
            )),
        }
    }
}

/// Keeps only non-negative integer counts from a producer summary
fn status_counts(map: &Map<String, Value>) -> BTreeMap<String, u64> {
    map.iter()
        .filter_map(|(status, count)| count.as_u64().map(|c| (status.clone(), c)))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn malformed(location: &str, details: String) -> anyhow::Error {
    DashboardError::FeedMalformed {
        location: location.to_string(),
        details,
    }
    .into()
}
