//! Integration tests for the support request route, driven against a mocked
//! email provider.
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt as _;
use wiremock::{
    matchers::{body_partial_json, header as header_eq, method, path},
    Mock, MockServer, ResponseTemplate,
};
use ytrewards_api::{
    app,
    state::AppState,
    upstream::{resend, supabase},
};

const ALLOWED_ORIGIN: &str = "https://rewards.example.com";

fn test_app(resend_server: &MockServer) -> Router {
    std::env::set_var("SUPPORT_EMAIL", "support@example.com");
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

fn post_json(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/send-email")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn full_request() -> Value {
    json!({
        "name": "Viewer",
        "email": "viewer@example.com",
        "subject": "Payout question",
        "message": "First line.\nSecond line.",
    })
}

#[tokio::test]
async fn missing_field_is_rejected() {
    let resend_server = MockServer::start().await;
    let app = test_app(&resend_server);

    let mut body = full_request();
    body.as_object_mut().unwrap().remove("subject");
    let response = app.oneshot(post_json(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "All fields are required");
}

#[tokio::test]
async fn empty_field_is_rejected() {
    let resend_server = MockServer::start().await;
    let app = test_app(&resend_server);

    let mut body = full_request();
    body["message"] = json!("");
    let response = app.oneshot(post_json(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "All fields are required");
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let resend_server = MockServer::start().await;
    let app = test_app(&resend_server);

    let mut body = full_request();
    body["email"] = json!("not-an-email");
    let response = app.oneshot(post_json(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid email format");
}

#[tokio::test]
async fn provider_rejection_passes_message_through() {
    let resend_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "statusCode": 422,
            "name": "validation_error",
            "message": "The from address is not authorised",
        })))
        .mount(&resend_server)
        .await;
    let app = test_app(&resend_server);

    let response = app.oneshot(post_json(&full_request())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "The from address is not authorised");
}

#[tokio::test]
async fn support_request_is_forwarded() {
    let resend_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header_eq("authorization", "Bearer resend-key"))
        .and(body_partial_json(json!({
            "to": "support@example.com",
            "reply_to": "viewer@example.com",
            "subject": "Support Request: Payout question",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "email_777" })))
        .expect(1)
        .mount(&resend_server)
        .await;
    let app = test_app(&resend_server);

    let response = app.oneshot(post_json(&full_request())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Email sent successfully");
    assert_eq!(body["id"], "email_777");
}

#[tokio::test]
async fn non_post_method_is_rejected() {
    let resend_server = MockServer::start().await;
    let app = test_app(&resend_server);

    let request = Request::builder()
        .method("GET")
        .uri("/api/send-email")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
