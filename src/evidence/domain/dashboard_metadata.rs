/// DashboardMetadata value object describing one render pass
#[derive(Debug, Clone)]
pub struct DashboardMetadata {
    rendered_at: String,
    tool_name: String,
    tool_version: String,
    render_id: String,
}

impl DashboardMetadata {
    pub fn new(
        rendered_at: String,
        tool_name: String,
        tool_version: String,
        render_id: String,
    ) -> Self {
        Self {
            rendered_at,
            tool_name,
            tool_version,
            render_id,
        }
    }

    pub fn rendered_at(&self) -> &str {
        &self.rendered_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn render_id(&self) -> &str {
        &self.render_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_metadata_new() {
        let metadata = DashboardMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "evidence-dashboard".to_string(),
            "0.1.0".to_string(),
            "urn:uuid:12345".to_string(),
        );

        assert_eq!(metadata.rendered_at(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "evidence-dashboard");
        assert_eq!(metadata.tool_version(), "0.1.0");
        assert_eq!(metadata.render_id(), "urn:uuid:12345");
    }
}
