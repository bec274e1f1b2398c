//! API routes within the application. Mainly exposes sub-routers which should
//! be nested with the main Axum router.
use axum::http::StatusCode;

pub mod support;
pub mod users;

/// Acknowledge a bare `OPTIONS` request with 200. Preflights carrying the
/// CORS request headers are answered by the CORS layer before they reach the
/// router; this covers `OPTIONS` calls without them.
pub(crate) async fn acknowledge_options() -> StatusCode {
    StatusCode::OK
}
