use crate::application::read_models::{DashboardReadModel, SummaryView};
use crate::evidence::domain::{NormalizedView, RecordLinks};
use crate::ports::outbound::DashboardRenderer;
use crate::shared::escape::escape_html;
use crate::shared::Result;

/// Markdown table header for evidence records
const TABLE_HEADER: &str = "| service | env | harbor digest | syncedAt | smoke | links |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "| --- | --- | --- | --- | --- | --- |\n";

/// Maximum number of rows written to the summary table
const MAX_ROWS: usize = 50;

/// MarkdownRenderer adapter producing the latest-evidence summary
///
/// This adapter implements the DashboardRenderer port for Markdown output,
/// suitable for job summaries and pull request comments.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Escapes record text for a table cell
    ///
    /// Markdown output is usually rendered to HTML, so markup characters are
    /// escaped as well as the table delimiters.
    fn cell(text: &str) -> String {
        Self::escape_markdown_table_cell(&escape_html(text))
    }

    /// Escapes characters that would end a Markdown link target early
    fn escape_link_target(url: &str) -> String {
        url.replace('(', "%28")
            .replace(')', "%29")
            .replace(' ', "%20")
            .replace('|', "%7C")
    }

    fn format_links(links: &RecordLinks) -> String {
        if links.is_placeholder() {
            return "-".to_string();
        }
        links
            .iter()
            .map(|link| {
                format!(
                    "[{}]({})",
                    Self::cell(&link.label),
                    Self::escape_link_target(&escape_html(&link.url))
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownRenderer {
    fn render_header(&self, output: &mut String, model: &DashboardReadModel) {
        output.push_str("# Latest Evidence Summary\n\n");
        if let Some(meta_line) = &model.meta_line {
            output.push_str(&format!("_{}_\n\n", Self::cell(meta_line)));
        }
    }

    fn render_summary(&self, output: &mut String, summary: &SummaryView) {
        for card in &summary.cards {
            output.push_str(&format!("- **{}**: {}\n", card.title, card.value));
        }
        output.push('\n');
    }

    fn render_row(&self, output: &mut String, row: &NormalizedView) {
        output.push_str(&format!(
            "| {} | {} | `{}` | {} | {} | {} |\n",
            Self::cell(&row.service),
            Self::cell(&row.env),
            Self::cell(&row.short_digest).replace('`', "'"),
            Self::cell(&row.timestamp),
            Self::cell(&row.smoke_text),
            Self::format_links(&row.links)
        ));
    }

    fn render_table(&self, output: &mut String, rows: &[NormalizedView]) {
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for row in rows.iter().take(MAX_ROWS) {
            self.render_row(output, row);
        }
        if rows.len() > MAX_ROWS {
            output.push_str(&format!(
                "\n_Showing the first {} of {} matching records._\n",
                MAX_ROWS,
                rows.len()
            ));
        }
    }
}

impl DashboardRenderer for MarkdownRenderer {
    fn render(&self, model: &DashboardReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_summary(&mut output, &model.summary);
        output.push_str(&format!("{}\n\n", Self::cell(&model.status_line)));
        if model.outcome.shows_table() {
            self.render_table(&mut output, &model.rows);
        }

        Ok(output)
    }
}
