mod cli;

use clap::Parser;
use cli::Args;
use evidence_dashboard::adapters::outbound::console::StderrProgressReporter;
use evidence_dashboard::application::dto::DashboardRequest;
use evidence_dashboard::application::factories::{PresenterFactory, RendererFactory};
use evidence_dashboard::application::use_cases::BuildDashboardUseCase;
use evidence_dashboard::config::{discover_config, load_config_from_path, Settings};
use evidence_dashboard::shared::error::ExitCode;
use evidence_dashboard::shared::Result;
use owo_colors::OwoColorize;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                // --help and --version
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    // CLI values win over the config file
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let file_layer = config.map(|c| c.overrides()).unwrap_or_default();
    let settings = Settings::resolve(args.overrides().or(file_layer))?;

    // Create adapters (Dependency Injection)
    let feed_source = settings.feed_source()?;
    let progress_reporter = StderrProgressReporter::new();
    let use_case = BuildDashboardUseCase::new(feed_source, progress_reporter);

    let request = DashboardRequest::new(settings.dialect, settings.filter.clone());
    let response = use_case.execute(request).await?;

    eprintln!("{}", RendererFactory::progress_message(settings.format));
    let renderer = RendererFactory::create(settings.format);
    let output = renderer.render(&response.read_model)?;

    let presenter = PresenterFactory::create(settings.output.clone().into());
    presenter.present(&output)?;

    if response.is_degraded() {
        eprintln!(
            "{}",
            format!("⚠️  {}", response.read_model.status_line).yellow()
        );
        return Ok(ExitCode::FeedDegraded);
    }

    Ok(ExitCode::Success)
}
