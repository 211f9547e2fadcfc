use crate::application::read_models::DashboardReadModel;
use crate::ports::outbound::DashboardRenderer;
use crate::shared::Result;

/// JsonRenderer adapter emitting the read model as pretty-printed JSON
///
/// Values are left unescaped; JSON string encoding is the only escaping
/// this format needs.
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRenderer for JsonRenderer {
    fn render(&self, model: &DashboardReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)?;
        json.push('\n');
        Ok(json)
    }
}
