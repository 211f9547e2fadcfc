/// Renderer adapters producing the dashboard in each output format
mod html_renderer;
mod json_renderer;
mod markdown_renderer;

pub use html_renderer::HtmlRenderer;
pub use json_renderer::JsonRenderer;
pub use markdown_renderer::MarkdownRenderer;
