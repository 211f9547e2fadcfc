/// Integration tests for the application layer
mod test_utilities;

use evidence_dashboard::application::read_models::LoadOutcome;
use evidence_dashboard::prelude::*;
use std::path::PathBuf;
use test_utilities::mocks::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/evidence")
        .join(name)
}

fn fixture_body(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).unwrap()
}

#[tokio::test]
async fn test_build_dashboard_happy_path() {
    let source = MockFeedSource::new().with_body(&fixture_body("index.json"));
    let reporter = MockProgressReporter::new();
    let use_case = BuildDashboardUseCase::new(source, reporter.clone());

    let response = use_case
        .execute(DashboardRequest::default())
        .await
        .unwrap();
    let model = &response.read_model;

    assert!(!response.is_degraded());
    assert_eq!(model.status_line, "records: 4 / 4");
    assert_eq!(
        model.meta_line.as_deref(),
        Some("Generated at 2024-05-01T12:00:00Z from acme/deployments")
    );
    assert_eq!(model.filters.env_options, vec!["dev", "prod", "staging"]);

    let api = &model.rows[0];
    assert_eq!(api.id, "ev-001");
    assert_eq!(api.short_digest, "sha256:bbbbbbbbbbbbbbbb");
    assert_eq!(api.short_commit, "0123456789ab");
    assert_eq!(api.timestamp, "2024-05-01T10:00:00Z");
    assert_eq!(api.smoke_status, SmokeStatus::Pass);
    assert_eq!(
        api.links.labels(),
        vec!["run", "specPr", "releasePr", "pr1", "pr3"]
    );

    let web = &model.rows[1];
    assert_eq!(web.env, "dev");
    assert_eq!(web.short_digest, "sha256:cccccccccccccccc");
    assert_eq!(web.timestamp, "2024-04-30T08:00:00Z");
    assert_eq!(web.smoke_text, "fail");
    assert_eq!(web.record_path, "evidence/records/web-dev.yml");
    assert!(web.links.is_placeholder());

    let jobs = &model.rows[2];
    assert_eq!(jobs.short_digest, "jobs:1.4.2");
    assert_eq!(jobs.short_commit, "-");
    assert_eq!(jobs.timestamp, "2024-04-29T16:30:00Z");
    assert_eq!(jobs.smoke_status, SmokeStatus::Unknown);
    assert_eq!(jobs.smoke_text, "unknown");

    let odd = &model.rows[3];
    assert_eq!(odd.smoke_status, SmokeStatus::Unknown);
    assert_eq!(odd.smoke_text, "flaky");

    // Reported summary agrees with the records, so nothing is flagged
    assert!(reporter.errors().is_empty());
}

#[tokio::test]
async fn test_summary_cards_ignore_filters() {
    let body = fixture_body("index.json");
    let filters = [
        FilterState::all(),
        FilterState::new(Some("prod".to_string()), None),
        FilterState::new(None, Some("fail".to_string())),
        FilterState::new(Some("dev".to_string()), Some("pass".to_string())),
    ];

    for filter in filters {
        let use_case = BuildDashboardUseCase::new(
            MockFeedSource::new().with_body(&body),
            MockProgressReporter::new(),
        );
        let response = use_case
            .execute(DashboardRequest::new(FeedDialect::Document, filter))
            .await
            .unwrap();

        let cards: Vec<usize> = response
            .read_model
            .summary
            .cards
            .iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(cards, vec![4, 2, 1, 1]);
    }
}

#[tokio::test]
async fn test_filter_by_env_and_smoke() {
    let use_case = BuildDashboardUseCase::new(
        MockFeedSource::new().with_body(&fixture_body("index.json")),
        MockProgressReporter::new(),
    );
    let request = DashboardRequest::new(
        FeedDialect::Document,
        FilterState::new(Some("prod".to_string()), Some("unknown".to_string())),
    );

    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.read_model.status_line, "records: 1 / 4");
    assert_eq!(response.read_model.rows[0].service, "jobs");
}

#[tokio::test]
async fn test_http_500_shows_status_and_no_table() {
    let reporter = MockProgressReporter::new();
    let use_case = BuildDashboardUseCase::new(
        MockFeedSource::new().with_http_status(500, "Internal Server Error"),
        reporter.clone(),
    );

    let response = use_case
        .execute(DashboardRequest::default())
        .await
        .unwrap();

    assert!(response.is_degraded());
    assert_eq!(
        response.read_model.status_line,
        "failed to load ./evidence/index.json: 500"
    );

    let html = HtmlRenderer::new().render(&response.read_model).unwrap();
    assert!(html.contains("failed to load ./evidence/index.json: 500"));
    assert!(!html.contains("<table"));
    assert!(reporter.errors()[0].contains("HTTP 500"));
}

#[tokio::test]
async fn test_transport_error_status_line() {
    let use_case = BuildDashboardUseCase::new(
        MockFeedSource::new().with_transport_error("operation timed out"),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(DashboardRequest::default())
        .await
        .unwrap();
    assert_eq!(response.read_model.status_line, "error: operation timed out");
}

#[tokio::test]
async fn test_malformed_feed_renders_empty_table() {
    let use_case = BuildDashboardUseCase::new(
        MockFeedSource::new().with_body(&fixture_body("malformed.json")),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(DashboardRequest::default())
        .await
        .unwrap();

    assert!(matches!(
        response.read_model.outcome,
        LoadOutcome::Malformed { .. }
    ));
    assert!(response
        .read_model
        .status_line
        .starts_with("failed to parse ./evidence/index.json: invalid JSON"));

    let html = HtmlRenderer::new().render(&response.read_model).unwrap();
    assert!(html.contains("<table"));
    assert!(html.contains("No records"));
}

#[tokio::test]
async fn test_records_dialect_fixture() {
    let use_case = BuildDashboardUseCase::new(
        FileFeedReader::new(fixture("records.json")),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(DashboardRequest::new(
            FeedDialect::RecordArray,
            FilterState::all(),
        ))
        .await
        .unwrap();

    assert_eq!(response.read_model.status_line, "records: 2 / 2");
    assert_eq!(response.read_model.rows[0].short_digest, "sha256:aaaaaaaaaaaaaaaa");
    assert!(response.read_model.meta_line.is_none());
}

#[tokio::test]
async fn test_records_fixture_in_document_dialect_is_malformed() {
    let use_case = BuildDashboardUseCase::new(
        FileFeedReader::new(fixture("records.json")),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(DashboardRequest::default())
        .await
        .unwrap();
    assert!(matches!(
        response.read_model.outcome,
        LoadOutcome::Malformed { .. }
    ));
}

#[tokio::test]
async fn test_missing_local_feed_is_unavailable() {
    let use_case = BuildDashboardUseCase::new(
        FileFeedReader::new(fixture("does-not-exist.json")),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(DashboardRequest::default())
        .await
        .unwrap();

    assert!(response.read_model.status_line.starts_with("error: "));
    assert!(!response.read_model.outcome.shows_table());
}

#[tokio::test]
async fn test_reload_fetches_fresh_feed() {
    let source = MockFeedSource::new()
        .with_http_status(503, "Service Unavailable")
        .with_body(&fixture_body("index.json"));
    let use_case = BuildDashboardUseCase::new(source.clone(), MockProgressReporter::new());

    let first = use_case.load(FeedDialect::Document).await.unwrap();
    assert!(first.outcome().is_degraded());

    let second = use_case.load(FeedDialect::Document).await.unwrap();
    assert_eq!(second.feed().record_count(), 4);
    assert_eq!(source.fetch_count(), 2);

    // Re-filtering the loaded snapshot does not fetch again
    let view = use_case.view(&second, &FilterState::new(Some("dev".to_string()), None));
    assert_eq!(view.rows.len(), 1);
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn test_all_renderers_escape_consistently() {
    let use_case = BuildDashboardUseCase::new(
        MockFeedSource::new().with_body(&fixture_body("index.json")),
        MockProgressReporter::new(),
    );
    let response = use_case
        .execute(DashboardRequest::default())
        .await
        .unwrap();

    let html = HtmlRenderer::new().render(&response.read_model).unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));

    let markdown = MarkdownRenderer::new().render(&response.read_model).unwrap();
    assert!(!markdown.contains("<script>"));
    assert!(markdown.contains("| &lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt; | staging |"));

    // JSON carries raw text; escaping is a markup concern
    let json = JsonRenderer::new().render(&response.read_model).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["rows"][3]["service"], "<script>alert('x')</script>");
}

#[tokio::test]
async fn test_invalid_utf8_local_feed_is_malformed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("index.json");
    std::fs::write(&path, b"{\"records\": [\"\xff\xfe\"]}").unwrap();
    let use_case = BuildDashboardUseCase::new(
        FileFeedReader::new(path.clone()),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(DashboardRequest::default())
        .await
        .unwrap();

    assert!(matches!(
        response.read_model.outcome,
        LoadOutcome::Malformed { .. }
    ));
    assert!(response.read_model.status_line.starts_with(&format!(
        "failed to parse {}: invalid UTF-8",
        path.display()
    )));
    let html = HtmlRenderer::new().render(&response.read_model).unwrap();
    assert!(html.contains("No records"));
}

#[tokio::test]
async fn test_unreadable_local_feed_status_line_is_one_line() {
    let reporter = MockProgressReporter::new();
    let use_case = BuildDashboardUseCase::new(
        FileFeedReader::new(fixture("does-not-exist.json")),
        reporter.clone(),
    );

    let response = use_case
        .execute(DashboardRequest::default())
        .await
        .unwrap();

    let status_line = &response.read_model.status_line;
    assert!(status_line.starts_with("error: Failed to read evidence feed metadata"));
    assert!(!status_line.contains('\n'));
    assert!(!status_line.contains("Hint"));
    // The hint still reaches stderr
    assert!(reporter.errors()[0].contains("💡 Hint:"));
}
