use crate::adapters::outbound::renderers::{HtmlRenderer, JsonRenderer, MarkdownRenderer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DashboardRenderer;

/// Factory for creating dashboard renderers
///
/// This factory encapsulates the creation logic for different renderer implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use evidence_dashboard::application::dto::OutputFormat;
    /// use evidence_dashboard::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(OutputFormat::Html);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn DashboardRenderer> {
        match format {
            OutputFormat::Html => Box::new(HtmlRenderer::new()),
            OutputFormat::Markdown => Box::new(MarkdownRenderer::new()),
            OutputFormat::Json => Box::new(JsonRenderer::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use evidence_dashboard::application::dto::OutputFormat;
    /// use evidence_dashboard::application::factories::RendererFactory;
    ///
    /// let message = RendererFactory::progress_message(OutputFormat::Markdown);
    /// assert_eq!(message, "📝 Rendering Markdown summary...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Html => "📝 Rendering HTML dashboard...",
            OutputFormat::Markdown => "📝 Rendering Markdown summary...",
            OutputFormat::Json => "📝 Rendering JSON read model...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::DashboardSnapshot;
    use crate::evidence::domain::{Feed, FilterState};
    use crate::evidence::services::MetadataGenerator;

    #[test]
    fn test_each_format_renders() {
        let snapshot = DashboardSnapshot::from_feed("feed.json".to_string(), Feed::empty());
        let model = snapshot.view(
            &FilterState::all(),
            &MetadataGenerator::generate_default_metadata(),
        );

        let html = RendererFactory::create(OutputFormat::Html)
            .render(&model)
            .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));

        let markdown = RendererFactory::create(OutputFormat::Markdown)
            .render(&model)
            .unwrap();
        assert!(markdown.starts_with("# Latest Evidence Summary"));

        let json = RendererFactory::create(OutputFormat::Json)
            .render(&model)
            .unwrap();
        assert!(json.starts_with('{'));
    }

    #[test]
    fn test_progress_message_html() {
        assert_eq!(
            RendererFactory::progress_message(OutputFormat::Html),
            "📝 Rendering HTML dashboard..."
        );
    }

    #[test]
    fn test_progress_message_json() {
        assert_eq!(
            RendererFactory::progress_message(OutputFormat::Json),
            "📝 Rendering JSON read model..."
        );
    }
}
