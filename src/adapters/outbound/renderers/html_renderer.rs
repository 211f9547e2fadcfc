use crate::application::read_models::{DashboardReadModel, FilterView, SummaryView};
use crate::evidence::domain::{NormalizedView, RecordLinks};
use crate::ports::outbound::DashboardRenderer;
use crate::shared::escape::escape_html;
use crate::shared::Result;

/// Column headers of the records table
const TABLE_COLUMNS: [&str; 10] = [
    "Evidence",
    "Service",
    "Env",
    "Digest",
    "Synced",
    "Smoke",
    "Promotion",
    "Commit",
    "Record Path",
    "Links",
];

/// Row shown when no record matches the current filters
const EMPTY_ROW_TEXT: &str = "No records";

const STYLESHEET: &str = r#"body { font-family: system-ui, sans-serif; margin: 2rem; color: #1f2933; }
.cards { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
.card { border: 1px solid #d9e2ec; border-radius: 8px; padding: 0.75rem 1.25rem; }
.card h3 { margin: 0; font-size: 0.9rem; color: #52606d; }
.card p { margin: 0.25rem 0 0; font-size: 1.5rem; font-weight: 600; }
.filters { display: flex; gap: 1rem; margin-bottom: 0.5rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #e4e7eb; padding: 0.4rem 0.6rem; text-align: left; }
.pill { border-radius: 999px; padding: 0.1rem 0.6rem; font-size: 0.8rem; background: #e4e7eb; }
.pill.pass, .pill.status-promoted { background: #c6f7e2; }
.pill.fail, .pill.status-failed { background: #ffe3e3; }
.pill.pending { background: #fff3c4; }
"#;

/// HtmlRenderer adapter producing a standalone HTML dashboard page
///
/// This adapter implements the DashboardRenderer port. Every value taken
/// from the read model passes through `escape_html` exactly once, at the
/// point it is written into markup.
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Turns free text into a single CSS class token
    ///
    /// Lower-cases ASCII alphanumerics and joins every other run of
    /// characters with one `-`; empty results become `unknown`.
    fn class_token(text: &str) -> String {
        let mut token = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii_alphanumeric() {
                token.push(c.to_ascii_lowercase());
            } else if !token.is_empty() && !token.ends_with('-') {
                token.push('-');
            }
        }
        let token = token.trim_end_matches('-');
        if token.is_empty() {
            "unknown".to_string()
        } else {
            token.to_string()
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl HtmlRenderer {
    fn render_head(&self, output: &mut String, model: &DashboardReadModel) {
        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n");
        output.push_str("<title>Evidence Dashboard</title>\n");
        output.push_str(&format!(
            "<meta name=\"generator\" content=\"{} {}\">\n",
            escape_html(&model.metadata.tool_name),
            escape_html(&model.metadata.tool_version)
        ));
        output.push_str(&format!(
            "<meta name=\"render-id\" content=\"{}\">\n",
            escape_html(&model.metadata.render_id)
        ));
        output.push_str(&format!(
            "<meta name=\"rendered-at\" content=\"{}\">\n",
            escape_html(&model.metadata.rendered_at)
        ));
        output.push_str("<style>\n");
        output.push_str(STYLESHEET);
        output.push_str("</style>\n</head>\n");
    }

    fn render_cards(&self, output: &mut String, summary: &SummaryView) {
        output.push_str("<section id=\"summary-cards\" class=\"cards\">\n");
        for card in &summary.cards {
            output.push_str(&format!(
                "<div class=\"card\"><h3>{}</h3><p>{}</p></div>\n",
                escape_html(&card.title),
                card.value
            ));
        }
        output.push_str("</section>\n");
    }

    fn render_select(
        &self,
        output: &mut String,
        id: &str,
        label: &str,
        options: &[String],
        selected: Option<&str>,
    ) {
        output.push_str(&format!(
            "<label>{} <select id=\"{}\">\n",
            escape_html(label),
            escape_html(id)
        ));
        let all_selected = if selected.is_none() { " selected" } else { "" };
        output.push_str(&format!("<option value=\"\"{}>all</option>\n", all_selected));
        for option in options {
            let is_selected = if selected == Some(option.as_str()) {
                " selected"
            } else {
                ""
            };
            output.push_str(&format!(
                "<option value=\"{}\"{}>{}</option>\n",
                escape_html(option),
                is_selected,
                escape_html(option)
            ));
        }
        output.push_str("</select></label>\n");
    }

    fn render_filters(&self, output: &mut String, filters: &FilterView) {
        output.push_str("<section class=\"filters\">\n");
        self.render_select(
            output,
            "env-filter",
            "Env",
            &filters.env_options,
            filters.state.env(),
        );
        self.render_select(
            output,
            "test-filter",
            "Smoke",
            &filters.test_options,
            filters.state.test_status(),
        );
        output.push_str("</section>\n");
    }

    fn render_links(&self, links: &RecordLinks) -> String {
        if links.is_placeholder() {
            return "-".to_string();
        }
        links
            .iter()
            .map(|link| {
                format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a>",
                    escape_html(&link.url),
                    escape_html(&link.label)
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render_row(&self, output: &mut String, row: &NormalizedView) {
        output.push_str("<tr>");
        output.push_str(&format!("<td><code>{}</code></td>", escape_html(&row.id)));
        output.push_str(&format!("<td>{}</td>", escape_html(&row.service)));
        output.push_str(&format!("<td>{}</td>", escape_html(&row.env)));
        output.push_str(&format!(
            "<td><code>{}</code></td>",
            escape_html(&row.short_digest)
        ));
        output.push_str(&format!("<td>{}</td>", escape_html(&row.timestamp)));
        output.push_str(&format!(
            "<td><span class=\"pill {}\">{}</span></td>",
            escape_html(row.smoke_status.as_str()),
            escape_html(&row.smoke_text)
        ));
        output.push_str(&format!(
            "<td><span class=\"pill status-{}\">{}</span></td>",
            Self::class_token(&row.promotion_status),
            escape_html(&row.promotion_status)
        ));
        output.push_str(&format!(
            "<td><code>{}</code></td>",
            escape_html(&row.short_commit)
        ));
        output.push_str(&format!(
            "<td><code>{}</code></td>",
            escape_html(&row.record_path)
        ));
        output.push_str(&format!("<td>{}</td>", self.render_links(&row.links)));
        output.push_str("</tr>\n");
    }

    fn render_table(&self, output: &mut String, rows: &[NormalizedView]) {
        output.push_str("<table id=\"records-table\">\n<thead><tr>");
        for column in TABLE_COLUMNS {
            output.push_str(&format!("<th>{}</th>", column));
        }
        output.push_str("</tr></thead>\n<tbody>\n");

        if rows.is_empty() {
            output.push_str(&format!(
                "<tr><td colspan=\"{}\">{}</td></tr>\n",
                TABLE_COLUMNS.len(),
                EMPTY_ROW_TEXT
            ));
        }
        for row in rows {
            self.render_row(output, row);
        }
        output.push_str("</tbody>\n</table>\n");
    }
}

impl DashboardRenderer for HtmlRenderer {
    fn render(&self, model: &DashboardReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_head(&mut output, model);
        output.push_str("<body>\n<h1>Evidence Dashboard</h1>\n");
        if let Some(meta_line) = &model.meta_line {
            output.push_str(&format!(
                "<p id=\"meta-line\">{}</p>\n",
                escape_html(meta_line)
            ));
        }
        self.render_cards(&mut output, &model.summary);
        self.render_filters(&mut output, &model.filters);
        output.push_str(&format!(
            "<p id=\"status-line\">{}</p>\n",
            escape_html(&model.status_line)
        ));
        if model.outcome.shows_table() {
            self.render_table(&mut output, &model.rows);
        }
        output.push_str("</body>\n</html>\n");

        Ok(output)
    }
}
