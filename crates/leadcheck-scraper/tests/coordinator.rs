//! Integration tests for the scrape coordinator using wiremock HTTP mocks.

use std::time::Duration;

use chrono::Utc;
use leadcheck_core::{Confidence, HistoryWindow, LeadData, PLATFORMS};
use leadcheck_scraper::{ScrapeConfig, ScrapeCoordinator};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn lead() -> LeadData {
    LeadData {
        name: "Jane Doe".to_owned(),
        email: "jane@acme.io".to_owned(),
        title: "VP Engineering".to_owned(),
        company: "Acme".to_owned(),
        location: "Berlin".to_owned(),
        history_window: HistoryWindow::SixMonths,
        profile_links: None,
    }
}

fn test_config(base: &str) -> ScrapeConfig {
    ScrapeConfig {
        search_base_url: base.to_owned(),
        reddit_base_url: base.to_owned(),
        request_timeout: Duration::from_secs(5),
        scrape_timeout: Duration::from_secs(10),
        // Keep the test fast; interval and backoff behavior have their own
        // unit tests against a paused clock.
        min_request_interval: Duration::ZERO,
        max_retries: 2,
        retry_backoff_base: Duration::from_millis(1),
    }
}

fn search_page(anchors: usize, extra_text: &str) -> String {
    let mut html = String::from("<html><body>");
    for i in 0..anchors {
        html.push_str(&format!(r#"<a class="result__a" href="/r{i}">hit {i}</a>"#));
    }
    html.push_str(&format!("<p>{extra_text}</p></body></html>"));
    html
}

fn reddit_listing(posts: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "data": { "children": posts } })
}

#[tokio::test]
async fn complete_map_even_when_every_platform_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let coordinator = ScrapeCoordinator::new(test_config(&server.uri())).unwrap();
    let map = coordinator.scrape_all(&lead(), None).await;

    assert_eq!(map.len(), 5);
    for platform in PLATFORMS {
        let signals = map.get(platform).expect("entry for every platform");
        assert_eq!(signals.platform, platform);
        assert_eq!(signals.activity_score, 0);
        assert_eq!(signals.engagement_score, 0);
        assert_eq!(signals.recent_posts_count, 0);
        assert_eq!(signals.confidence, Confidence::Low);
        assert!(signals.data_points.is_empty());
    }
}

#[tokio::test]
async fn search_proxy_platforms_extract_signals() {
    let server = MockServer::start().await;

    let html = search_page(3, "We're hiring! We just raised a Series B. 500 likes, 40 comments");
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reddit_listing(
            serde_json::json!([]),
        )))
        .mount(&server)
        .await;

    let coordinator = ScrapeCoordinator::new(test_config(&server.uri())).unwrap();
    let map = coordinator.scrape_all(&lead(), None).await;

    let x = &map["x"];
    assert_eq!(x.recent_posts_count, 3);
    assert_eq!(x.activity_score, 18); // slope 6
    assert_eq!(x.engagement_score, 45); // likes + comments
    assert_eq!(x.confidence, Confidence::Medium);
    assert_eq!(
        x.data_points,
        vec!["Public search results indicate presence on X (best-effort)."]
    );
    assert!(x
        .hiring_signals
        .contains(&"Hiring language detected".to_owned()));
    assert!(x
        .growth_signals
        .contains(&"Funding/financing signals detected".to_owned()));

    // Slopes differ per platform over the same page.
    assert_eq!(map["instagram"].activity_score, 15);
    assert_eq!(map["linkedin"].activity_score, 12);
    assert_eq!(map["facebook"].activity_score, 12);
}

#[tokio::test]
async fn reddit_filters_posts_to_history_window_and_builds_data_points() {
    let server = MockServer::start().await;

    let now = Utc::now().timestamp();
    let in_window = now - 24 * 3600;
    let out_of_window = now - 400 * 24 * 3600;
    let listing = reddit_listing(serde_json::json!([
        { "data": {
            "created_utc": in_window,
            "title": "Acme is hiring now",
            "selftext": "we are hiring across the board",
            "score": 100,
            "num_comments": 10,
            "subreddit": "startups"
        }},
        { "data": {
            "created_utc": out_of_window,
            "title": "old thread",
            "selftext": "",
            "score": 5000,
            "num_comments": 900,
            "subreddit": "ancient"
        }}
    ]));

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "Jane Doe Acme"))
        .and(query_param("sort", "new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_page(0, "")))
        .mount(&server)
        .await;

    let coordinator = ScrapeCoordinator::new(test_config(&server.uri())).unwrap();
    let map = coordinator.scrape_all(&lead(), None).await;

    let reddit = &map["reddit"];
    assert_eq!(reddit.recent_posts_count, 1, "out-of-window post excluded");
    assert_eq!(reddit.activity_score, 8);
    // score*0.3 + comments*2 = 30 + 20 = 50 for the single in-window post.
    assert_eq!(reddit.engagement_score, 50);
    assert_eq!(reddit.confidence, Confidence::High);
    assert_eq!(reddit.data_points, vec!["r/startups: Acme is hiring now"]);
    assert!(reddit
        .hiring_signals
        .contains(&"Hiring language detected".to_owned()));
}

#[tokio::test]
async fn reddit_blocked_response_yields_explanatory_record_not_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_page(2, "")))
        .mount(&server)
        .await;

    let coordinator = ScrapeCoordinator::new(test_config(&server.uri())).unwrap();
    let map = coordinator.scrape_all(&lead(), None).await;

    let reddit = &map["reddit"];
    assert_eq!(reddit.recent_posts_count, 0);
    assert_eq!(reddit.confidence, Confidence::Low);
    assert_eq!(
        reddit.data_points,
        vec!["Reddit search unavailable or blocked"]
    );
    // The rest of the batch is unaffected.
    assert_eq!(map["x"].recent_posts_count, 2);
}

#[tokio::test]
async fn deadline_overrides_and_substitutes_placeholders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(search_page(5, ""))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let coordinator = ScrapeCoordinator::new(test_config(&server.uri())).unwrap();
    let map = coordinator
        .scrape_all(&lead(), Some(Duration::from_millis(200)))
        .await;

    assert_eq!(map.len(), 5);
    for platform in PLATFORMS {
        assert_eq!(map[platform].recent_posts_count, 0);
        assert!(map[platform].data_points.is_empty());
    }
}
