/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the feed, the output destination, and the operator.
pub mod dashboard_renderer;
pub mod feed_source;
pub mod output_presenter;
pub mod progress_reporter;

pub use dashboard_renderer::DashboardRenderer;
pub use feed_source::FeedSource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
