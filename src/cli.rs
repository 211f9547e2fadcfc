use clap::Parser;
use evidence_dashboard::application::dto::OutputFormat;
use evidence_dashboard::config::SettingsOverrides;
use evidence_dashboard::evidence::domain::FeedDialect;
use std::path::PathBuf;

/// Render a dashboard of deployment evidence records
#[derive(Parser, Debug)]
#[command(name = "evidence-dashboard")]
#[command(version)]
#[command(
    about = "Render a filterable dashboard of deployment evidence records",
    long_about = None
)]
pub struct Args {
    /// Feed location: a local path or an http(s) URL [default: ./evidence/index.json]
    #[arg(long, value_name = "LOCATION")]
    pub feed: Option<String>,

    /// Feed shape: document (object with a records array) or records (flat array)
    #[arg(long, value_name = "DIALECT")]
    pub dialect: Option<FeedDialect>,

    /// Output format: html, markdown, or json [default: html]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Only show records of this environment (empty or "all" for no constraint)
    #[arg(long, value_name = "ENV")]
    pub env: Option<String>,

    /// Only show records with this smoke test status (empty or "all" for no constraint)
    #[arg(long, value_name = "STATUS")]
    pub test: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// HTTP timeout in seconds [default: 10]
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Path to config file (auto-discovers evidence-dashboard.config.yml if not specified)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// The command-line values as a settings layer
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            feed: self.feed.clone(),
            dialect: self.dialect.map(|d| d.to_string()),
            format: self.format.map(|f| f.to_string()),
            env: self.env.clone(),
            test: self.test.clone(),
            output: self.output.clone(),
            timeout_secs: self.timeout,
        }
    }
}
