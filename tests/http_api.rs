//! HTTP API tests: routing, error contract, and CORS preflight.

use seo_scanner::{router, Config, Scanner};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGESPEED_BODY: &str = r#"{
    "lighthouseResult": {
        "audits": {"viewport": {"score": 1}},
        "categories": {
            "performance": {"score": 0.9},
            "accessibility": {"score": 0.81},
            "best-practices": {"score": 0.73},
            "seo": {"score": 0.835}
        }
    }
}"#;

/// Serves the app router on an ephemeral port and returns its base URL.
async fn serve_app(pagespeed_endpoint: String, api_key: Option<String>) -> String {
    if api_key.is_none() {
        // Shield the missing-key test from an ambient PAGESPEED_API_KEY.
        std::env::remove_var("PAGESPEED_API_KEY");
    }
    let config = Config {
        api_key,
        pagespeed_endpoint,
        ..Config::default()
    };
    let scanner = Scanner::new(&config).expect("scanner should initialize");
    let app = router(scanner);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has a local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server error");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_scan_endpoint_returns_report() {
    let pagespeed = MockServer::start().await;
    let page = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/runPagespeed"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(PAGESPEED_BODY, "application/json"),
        )
        .mount(&pagespeed)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html lang=\"en\"><head><title>Hello</title></head><body><h1>Hi</h1></body></html>",
        ))
        .mount(&page)
        .await;

    let base = serve_app(
        format!("{}/runPagespeed", pagespeed.uri()),
        Some("test-key".to_string()),
    )
    .await;

    let response = reqwest::Client::new()
        .post(format!("{base}/scan"))
        .json(&serde_json::json!({"url": page.uri()}))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("JSON body");

    // 0.835 rounds half-up to 84.
    assert_eq!(body["score"], 84);
    assert_eq!(body["technical"]["hasLang"], true);
    assert_eq!(body["content"]["h1Count"], 1);
    assert!(body["issues"].as_array().is_some_and(|a| !a.is_empty()));
}

#[tokio::test]
async fn test_scan_endpoint_missing_url_is_400() {
    let base = serve_app(
        "http://127.0.0.1:1/runPagespeed".to_string(),
        Some("test-key".to_string()),
    )
    .await;

    let response = reqwest::Client::new()
        .post(format!("{base}/scan"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("JSON body");
    assert_eq!(body["error"], "URL is required");
}

#[tokio::test]
async fn test_scan_endpoint_invalid_url_is_400() {
    let base = serve_app(
        "http://127.0.0.1:1/runPagespeed".to_string(),
        Some("test-key".to_string()),
    )
    .await;

    let response = reqwest::Client::new()
        .post(format!("{base}/scan"))
        .json(&serde_json::json!({"url": "not a url at all!!!"}))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("JSON body");
    assert!(body["error"]
        .as_str()
        .is_some_and(|msg| msg.starts_with("Invalid URL")));
}

#[tokio::test]
async fn test_scan_endpoint_missing_api_key_is_500() {
    let base = serve_app("http://127.0.0.1:1/runPagespeed".to_string(), None).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/scan"))
        .json(&serde_json::json!({"url": "https://example.com"}))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.expect("JSON body");
    assert_eq!(body["error"], "PageSpeed API key not configured");
}

#[tokio::test]
async fn test_scan_endpoint_analyzer_failure_is_502() {
    let pagespeed = MockServer::start().await;
    let page = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/runPagespeed"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&pagespeed)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&page)
        .await;

    let base = serve_app(
        format!("{}/runPagespeed", pagespeed.uri()),
        Some("test-key".to_string()),
    )
    .await;

    let response = reqwest::Client::new()
        .post(format!("{base}/scan"))
        .json(&serde_json::json!({"url": page.uri()}))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), 502);
    let body: serde_json::Value = response.json().await.expect("JSON body");
    assert_eq!(body["error"], "PageSpeed returned HTTP 503");
}

#[tokio::test]
async fn test_cors_preflight_is_permissive() {
    let base = serve_app(
        "http://127.0.0.1:1/runPagespeed".to_string(),
        Some("test-key".to_string()),
    )
    .await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{base}/scan"))
        .header("Origin", "https://agency.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("preflight should succeed");

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_healthz() {
    let base = serve_app(
        "http://127.0.0.1:1/runPagespeed".to_string(),
        Some("test-key".to_string()),
    )
    .await;

    let response = reqwest::Client::new()
        .get(format!("{base}/healthz"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("JSON body");
    assert_eq!(body["status"], "ok");
}
