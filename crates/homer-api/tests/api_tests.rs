//! API integration tests against a mocked Frinkiac, with no LLM key.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use homer_api::{create_router, ApiConfig, AppState};
use homer_frinkiac::{FrinkiacClient, FrinkiacConfig};

fn test_config() -> ApiConfig {
    ApiConfig {
        static_dir: "does-not-exist".into(),
        metrics_enabled: false,
        ..Default::default()
    }
}

fn router_with(server: &MockServer, config: ApiConfig) -> Router {
    let frinkiac = FrinkiacClient::new(FrinkiacConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .unwrap();
    create_router(AppState::from_parts(config, frinkiac, None), None)
}

fn router_for(server: &MockServer) -> Router {
    router_with(server, test_config())
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn mount_donut_search(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "donuts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Id": 1, "Episode": "S05E10", "Timestamp": 461210},
            {"Id": 2, "Episode": "S05E10", "Timestamp": 462000},
            {"Id": 3, "Episode": "S07E04", "Timestamp": 12000}
        ])))
        .mount(server)
        .await;
}

async fn mount_donut_caption(server: &MockServer) {
    Mock::given(path("/api/caption"))
        .and(query_param("e", "S05E10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Episode": {"Key": "S05E10", "Title": "$pringfield"},
            "Subtitles": [{"Content": "Mmm... donuts.", "StartTimestamp": 459000, "EndTimestamp": 462000}]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = MockServer::start().await;
    let (status, body) = get_json(router_for(&server), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ready_reports_llm_disabled() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let (status, body) = get_json(router_for(&server), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["frinkiac"]["status"], "ok");
    assert_eq!(body["checks"]["llm"]["status"], "disabled");
}

#[tokio::test]
async fn test_ready_degraded_when_frinkiac_down() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (status, body) = get_json(router_for(&server), "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn test_interpret_passes_scenario_through() {
    let server = MockServer::start().await;

    let (status, body) = get_json(router_for(&server), "/api/interpret?q=my%20boss%20walks%20in").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"queries": ["my boss walks in"]}));

    let (status, body) = get_json(router_for(&server), "/api/interpret?q=%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn test_search_proxy() {
    let server = MockServer::start().await;
    mount_donut_search(&server).await;

    let (status, body) = get_json(router_for(&server), "/api/search?q=donuts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body[0]["Episode"], "S05E10");

    let (status, _) = get_json(router_for(&server), "/api/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_upstream_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(path("/api/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, body) = get_json(router_for(&server), "/api/search?q=anything").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "upstream_error");
}

#[tokio::test]
async fn test_caption_validates_parameters() {
    let server = MockServer::start().await;
    mount_donut_caption(&server).await;

    let (status, body) = get_json(router_for(&server), "/api/caption?e=S05E10&t=461210").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Episode"]["Title"], "$pringfield");

    for uri in [
        "/api/caption?t=461210",
        "/api/caption?e=S05E10",
        "/api/caption?e=..%2Fetc&t=1",
        "/api/caption?e=S05E10&t=later",
    ] {
        let (status, _) = get_json(router_for(&server), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_download_same_origin_only() {
    let server = MockServer::start().await;
    Mock::given(path("/meme/S05E10/461210.jpg"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/jpeg")
                .set_body_bytes(vec![0xFF, 0xD8, 0xFF]),
        )
        .mount(&server)
        .await;

    let image_url = format!("{}/meme/S05E10/461210.jpg", server.uri());
    let uri = format!("/api/download?url={}", urlencode(&image_url));
    let (status, headers, body) = get(router_for(&server), &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/jpeg");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"simpsons-meme.jpg\""
    );
    assert_eq!(body, vec![0xFF, 0xD8, 0xFF]);

    let foreign = format!(
        "/api/download?url={}",
        urlencode("https://evil.example.com/meme.jpg")
    );
    let (status, _, _) = get(router_for(&server), &foreign).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = get(router_for(&server), "/api/download").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bestquote_without_llm_returns_captions() {
    let server = MockServer::start().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/bestquote")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"scenario": "diet", "captions": ["MMM... DONUTS.", "", "D'OH!"]}).to_string(),
        ))
        .unwrap();

    let response = router_for(&server).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value =
        serde_json::from_slice(&to_bytes(response.into_body(), usize::MAX).await.unwrap()).unwrap();
    assert_eq!(body, json!({"quotes": ["MMM... DONUTS.", "", "D'OH!"]}));
}

#[tokio::test]
async fn test_bestquote_rejects_malformed_body() {
    let server = MockServer::start().await;
    let post = |content_type: Option<&str>, body: &'static str| {
        let mut builder = Request::builder().method("POST").uri("/api/bestquote");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    };

    for request in [
        post(Some("application/json"), "not json"),
        post(Some("application/json"), r#"{"captions": "MMM... DONUTS."}"#),
        post(None, r#"{"captions": []}"#),
    ] {
        let response = router_for(&server).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value =
            serde_json::from_slice(&to_bytes(response.into_body(), usize::MAX).await.unwrap())
                .unwrap();
        assert_eq!(body["code"], "bad_request");
        assert!(body["detail"].is_string());
    }
}

#[tokio::test]
async fn test_memes_end_to_end() {
    let server = MockServer::start().await;
    mount_donut_search(&server).await;
    mount_donut_caption(&server).await;
    Mock::given(path("/api/caption"))
        .and(query_param("e", "S07E04"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (status, body) = get_json(router_for(&server), "/api/memes?q=donuts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "found");
    assert_eq!(body["queries"], json!(["donuts"]));
    assert_eq!(body["queries_fell_back"], true);

    // the 462000 frame is suppressed, S07E04 has no caption
    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["quote"], "MMM... DONUTS.");
    assert_eq!(
        cards[0]["image_url"],
        format!("{}/img/S05E10/461210/medium.jpg", server.uri())
    );
}

#[tokio::test]
async fn test_memes_empty_state() {
    let server = MockServer::start().await;
    Mock::given(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (status, body) = get_json(router_for(&server), "/api/memes?q=nothing&max=100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "empty");
    assert!(body["cards"].as_array().unwrap().is_empty());

    let (status, _) = get_json(router_for(&server), "/api/memes").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_presets_and_schema() {
    let server = MockServer::start().await;

    let (status, body) = get_json(router_for(&server), "/api/presets").await;
    assert_eq!(status, StatusCode::OK);
    let presets = body.as_array().unwrap();
    assert!(!presets.is_empty());
    assert!(presets[0]["scenario"].is_string());

    let (status, body) = get_json(router_for(&server), "/api/schema").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "SearchReport");
}

#[tokio::test]
async fn test_response_headers() {
    let server = MockServer::start().await;
    let (_, headers, _) = get(router_for(&server), "/health").await;
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_rate_limiting() {
    let server = MockServer::start().await;
    let app = router_with(
        &server,
        ApiConfig {
            rate_limit_rps: 1,
            ..test_config()
        },
    );

    let request = || {
        Request::builder()
            .uri("/api/presets")
            .header("X-Forwarded-For", "192.168.1.100")
            .body(Body::empty())
            .unwrap()
    };

    let first = app.clone().oneshot(request()).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.clone().oneshot(request()).await.unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(second.headers()[header::RETRY_AFTER], "1");
}

#[tokio::test]
async fn test_unknown_path_without_static_dir() {
    let server = MockServer::start().await;
    let (status, _, _) = get(router_for(&server), "/index.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

fn urlencode(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}
