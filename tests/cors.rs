//! Tests for the CORS allow-list behaviour on the /api routes.
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt as _;
use wiremock::MockServer;
use ytrewards_api::{
    app,
    state::AppState,
    upstream::{resend, supabase},
};

const ALLOWED_ORIGIN: &str = "https://rewards.example.com";

fn test_app(resend_server: &MockServer) -> Router {
    let state = AppState {
        supabase: supabase::Client::new(
            "http://supabase.invalid".to_owned(),
            "service-role-key".to_owned(),
        ),
        mailer: resend::Client::new(resend_server.uri(), "resend-key".to_owned()),
        webhook_secret: None,
    };
    app(&state, &[ALLOWED_ORIGIN.to_owned()])
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri("/api/send-email")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn preflight_from_allowed_origin_is_acknowledged() {
    let resend_server = MockServer::start().await;
    let app = test_app(&resend_server);

    let response = app.oneshot(preflight(ALLOWED_ORIGIN)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some(ALLOWED_ORIGIN)
    );
    let allowed_methods = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(allowed_methods.contains("POST"));
}

#[tokio::test]
async fn preflight_from_unlisted_origin_gets_no_allow_origin() {
    let resend_server = MockServer::start().await;
    let app = test_app(&resend_server);

    let response = app
        .oneshot(preflight("https://evil.example.net"))
        .await
        .unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn bare_options_without_preflight_headers_is_acknowledged() {
    let resend_server = MockServer::start().await;
    let app = test_app(&resend_server);

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/send-email")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn simple_response_echoes_the_allowed_origin() {
    let resend_server = MockServer::start().await;
    let app = test_app(&resend_server);

    let request = Request::builder()
        .method("POST")
        .uri("/api/send-email")
        .header(header::ORIGIN, ALLOWED_ORIGIN)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    // The request itself fails validation, but CORS headers are still set.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some(ALLOWED_ORIGIN)
    );
}
