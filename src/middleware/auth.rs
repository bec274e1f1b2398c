//! Middleware used for checking webhook authorisation.
use crate::{state::AppState, utils::httperror::HttpError};
use axum::{
    extract::{Request, State},
    http::{header, Method, StatusCode},
    middleware::Next,
    response::Response,
};

/// Middleware requiring the configured shared secret as a bearer token. The
/// check is skipped entirely when no secret is configured, and `OPTIONS`
/// requests pass through so preflight stays unauthenticated.
pub async fn webhook_auth_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, HttpError> {
    let Some(expected) = state.webhook_secret.as_deref() else {
        return Ok(next.run(req).await);
    };
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }
    let expected_header = format!("Bearer {expected}");
    let provided = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    if provided != Some(expected_header.as_str()) {
        eprintln!("Rejected webhook call with a missing or incorrect bearer token.");
        return Err(HttpError::new(StatusCode::UNAUTHORIZED, "Unauthorized"));
    }
    Ok(next.run(req).await)
}
