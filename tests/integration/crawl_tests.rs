use docsweep::config::{finalize_config, Config, SeedConfig};
use docsweep::crawler::Coordinator;
use docsweep::output::{load_statistics, PageRecord};
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a finalized test configuration rooted at `<server>/docs`
fn create_test_config(server: &MockServer, text_dir: &Path, excludes: &[&str]) -> Config {
    let mut seed = SeedConfig::new(format!("{}/docs", server.uri()));
    seed.excludes = excludes.iter().map(|e| e.to_string()).collect();

    let mut config = Config::new(seed);
    config.output.text_dir = text_dir.to_string_lossy().into_owned();
    config.crawler.request_timeout_ms = 2_000;
    finalize_config(config).expect("Failed to finalize config")
}

/// Mounts an HTML page that must be fetched exactly once
async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "text/html"))
        .expect(1)
        .mount(server)
        .await;
}

/// Mounts a page that must never be requested
async fn mount_forbidden(server: &MockServer, page_path: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_raw("never".to_string(), "text/html"))
        .expect(0)
        .mount(server)
        .await;
}

fn record_urls(records: &[PageRecord]) -> Vec<&str> {
    records.iter().map(|r| r.url.as_str()).collect()
}

#[tokio::test]
async fn test_scope_and_dedup_end_to_end() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/docs",
        &format!(
            r##"<html><body>
            <a href="{base}/docs/a">A</a>
            <a href="https://other.com/x">Elsewhere</a>
            <a href="/docs/a#frag">A again</a>
            </body></html>"##
        ),
    )
    .await;
    mount_page(&server, "/docs/a", "<html><body><p>Page A</p></body></html>").await;

    let tmp = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(create_test_config(&server, tmp.path(), &[]))
        .expect("Failed to create coordinator");
    let summary = coordinator.run().await;

    assert_eq!(summary.pages_visited, 2);
    assert_eq!(summary.records_written, 2);
    assert_eq!(summary.urls_seen, 2);

    let records = coordinator.store().load_records().unwrap();
    assert_eq!(
        record_urls(&records),
        vec![format!("{base}/docs"), format!("{base}/docs/a")]
    );
    assert_eq!(records[1].text, "Page A");
}

#[tokio::test]
async fn test_cycle_terminates_and_visits_each_page_once() {
    let server = MockServer::start().await;

    mount_page(&server, "/docs", r#"<a href="/docs/a">A</a>"#).await;
    mount_page(
        &server,
        "/docs/a",
        r#"<a href="/docs/b">B</a><a href="/docs">Home</a><a href="/docs/a/">Self</a>"#,
    )
    .await;
    mount_page(&server, "/docs/b", r#"<a href="/docs/a">Back to A</a>"#).await;

    let tmp = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(create_test_config(&server, tmp.path(), &[])).unwrap();
    let summary = coordinator.run().await;

    assert_eq!(summary.pages_visited, 3);
    assert_eq!(summary.urls_seen, 3);
    assert_eq!(coordinator.store().load_records().unwrap().len(), 3);
}

#[tokio::test]
async fn test_depth_first_visit_order() {
    let server = MockServer::start().await;

    mount_page(&server, "/docs", r#"<a href="/docs/a">A</a><a href="/docs/b">B</a>"#).await;
    mount_page(&server, "/docs/a", r#"<a href="/docs/a1">A1</a>"#).await;
    mount_page(&server, "/docs/b", "<p>B</p>").await;
    mount_page(&server, "/docs/a1", "<p>A1</p>").await;

    let tmp = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(create_test_config(&server, tmp.path(), &[])).unwrap();
    coordinator.run().await;

    let visited: Vec<String> = server
        .received_requests()
        .await
        .expect("Request recording is enabled")
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();

    // Last link pushed is visited first
    assert_eq!(visited, vec!["/docs", "/docs/b", "/docs/a", "/docs/a1"]);
}

#[tokio::test]
async fn test_exclusions_and_base_path_are_enforced() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/docs",
        r##"
        <a href="/docs/public">Public</a>
        <a href="/docs/private/keys">Private</a>
        <a href="/pricing">Pricing</a>
        <a href="mailto:docs@example.com">Mail</a>
        <a href="#top">Top</a>
        "##,
    )
    .await;
    mount_page(&server, "/docs/public", "<p>Public</p>").await;
    mount_forbidden(&server, "/docs/private/keys").await;
    mount_forbidden(&server, "/pricing").await;

    let tmp = TempDir::new().unwrap();
    let config = create_test_config(&server, tmp.path(), &["/docs/private"]);
    let mut coordinator = Coordinator::new(config).unwrap();
    let summary = coordinator.run().await;

    assert_eq!(summary.pages_visited, 2);
    assert_eq!(summary.urls_seen, 2);
}

#[tokio::test]
async fn test_timeout_still_produces_record() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/docs", r#"<a href="/docs/slow">Slow</a>"#).await;
    Mock::given(method("GET"))
        .and(path("/docs/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<p>Too late</p>".to_string(), "text/html")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let tmp = TempDir::new().unwrap();
    let mut config = create_test_config(&server, tmp.path(), &[]);
    config.crawler.request_timeout_ms = 300;
    let mut coordinator = Coordinator::new(config).unwrap();
    let summary = coordinator.run().await;

    assert_eq!(summary.pages_visited, 2);
    assert_eq!(summary.pages_skipped, 1);
    assert_eq!(summary.records_written, 2);

    let slow_url = format!("{base}/docs/slow");
    let contents = std::fs::read_to_string(coordinator.store().path_for(&slow_url)).unwrap();
    assert_eq!(contents, format!("{slow_url}|"));
}

#[tokio::test]
async fn test_non_html_and_error_pages_recorded_without_links() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/docs",
        r#"<a href="/docs/guide.pdf">PDF</a><a href="/docs/missing">Missing</a>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/docs/guide.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"Binary-ish <a href="/docs/from-pdf">link</a>"#.to_string(),
            "application/pdf",
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(
            r#"<h1>Not Found</h1><a href="/docs/from-404">home</a>"#.to_string(),
            "text/html",
        ))
        .expect(1)
        .mount(&server)
        .await;
    mount_forbidden(&server, "/docs/from-pdf").await;
    mount_forbidden(&server, "/docs/from-404").await;

    let tmp = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(create_test_config(&server, tmp.path(), &[])).unwrap();
    let summary = coordinator.run().await;

    assert_eq!(summary.pages_visited, 3);
    assert_eq!(summary.pages_skipped, 2);

    let records = coordinator.store().load_records().unwrap();
    let text_of = |suffix: &str| {
        let url = format!("{base}{suffix}");
        records
            .iter()
            .find(|r| r.url == url)
            .map(|r| r.text.clone())
            .expect("record missing")
    };
    assert_eq!(text_of("/docs/guide.pdf"), "Binary-ish link");
    assert_eq!(text_of("/docs/missing"), "Not Foundhome");
}

#[tokio::test]
async fn test_javascript_only_page_is_flagged_but_recorded() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/docs",
        r#"<html><body><noscript>You need to enable JavaScript to run this app.</noscript><div id="root"></div></body></html>"#,
    )
    .await;

    let tmp = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(create_test_config(&server, tmp.path(), &[])).unwrap();
    let summary = coordinator.run().await;

    assert_eq!(summary.javascript_pages, 1);
    assert_eq!(summary.records_written, 1);

    let stats = load_statistics(coordinator.store()).unwrap();
    assert_eq!(stats.record_count, 1);
    assert_eq!(stats.javascript_pages, 1);
}

#[tokio::test]
async fn test_concurrent_crawl_visits_each_url_once() {
    let server = MockServer::start().await;

    // A small mesh where every page links to every other page
    let pages = ["/docs", "/docs/1", "/docs/2", "/docs/3", "/docs/4", "/docs/5"];
    let links: String = pages
        .iter()
        .map(|p| format!(r#"<a href="{p}">{p}</a>"#))
        .collect();
    for page in pages {
        mount_page(&server, page, &format!("<p>{page}</p>{links}")).await;
    }

    let tmp = TempDir::new().unwrap();
    let mut config = create_test_config(&server, tmp.path(), &[]);
    config.crawler.max_concurrent_fetches = 4;
    let mut coordinator = Coordinator::new(config).unwrap();
    let summary = coordinator.run().await;

    assert_eq!(summary.pages_visited, pages.len() as u64);
    assert_eq!(summary.urls_seen, pages.len() as u64);
    assert_eq!(
        coordinator.store().load_records().unwrap().len(),
        pages.len()
    );
}

#[tokio::test]
async fn test_rerun_overwrites_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/docs"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<p>Same page</p>".to_string(), "text/html"))
        .expect(2)
        .mount(&server)
        .await;

    let tmp = TempDir::new().unwrap();
    for _ in 0..2 {
        let mut coordinator =
            Coordinator::new(create_test_config(&server, tmp.path(), &[])).unwrap();
        coordinator.run().await;
    }

    let config = create_test_config(&server, tmp.path(), &[]);
    let coordinator = Coordinator::new(config).unwrap();
    let records = coordinator.store().load_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "Same page");
}
