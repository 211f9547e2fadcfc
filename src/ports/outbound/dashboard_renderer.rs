use crate::application::read_models::DashboardReadModel;
use crate::shared::Result;

/// DashboardRenderer port for turning a read model into output text
///
/// Implementations own escaping: every text value taken from the read model
/// must be escaped exactly once for the target format.
pub trait DashboardRenderer {
    /// Renders the dashboard
    ///
    /// # Arguments
    /// * `model` - Filtered rows, global summary, selectors, and status line
    ///
    /// # Returns
    /// Rendered dashboard content as a string
    ///
    /// # Errors
    /// Returns an error if rendering or serialization fails
    fn render(&self, model: &DashboardReadModel) -> Result<String>;
}
