use crate::evidence::domain::DashboardMetadata;
use chrono::Utc;
use uuid::Uuid;

/// MetadataGenerator service for render-pass metadata
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with the current timestamp and a unique render id
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool rendering the dashboard
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> DashboardMetadata {
        let rendered_at = Utc::now().to_rfc3339();
        let render_id = format!("urn:uuid:{}", Uuid::new_v4());

        DashboardMetadata::new(
            rendered_at,
            tool_name.to_string(),
            tool_version.to_string(),
            render_id,
        )
    }

    /// Generates metadata with this crate's name and compile-time version
    pub fn generate_default_metadata() -> DashboardMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
