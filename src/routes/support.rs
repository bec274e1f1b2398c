//! Route for forwarding support requests to the support inbox.
use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    services::mail,
    state::AppState,
    upstream::errors::UpstreamError,
    utils::{email::EmailAddress, httperror::HttpError},
};

/// Create a router for the support request route.
pub fn create_router() -> Router<AppState> {
    Router::new().route(
        "/send-email",
        post(send_email).options(super::acknowledge_options),
    )
}

/// Request body for /api/send-email. All fields are required; they are
/// validated in the handler to keep the original response bodies.
#[derive(Deserialize)]
struct SendEmailRequest {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

/// Response body for /api/send-email.
#[derive(Serialize)]
struct SendEmailResponse {
    success: bool,
    message: &'static str,
    id: String,
}

/// Forward a support request to the support inbox, with replies directed
/// back at the requester's address.
async fn send_email(
    State(state): State<AppState>,
    Json(body): Json<SendEmailRequest>,
) -> Result<Json<SendEmailResponse>, HttpError> {
    let missing = || HttpError::new(StatusCode::BAD_REQUEST, "All fields are required");
    let name = body.name.filter(|field| !field.is_empty()).ok_or_else(missing)?;
    let raw_email = body.email.filter(|field| !field.is_empty()).ok_or_else(missing)?;
    let subject = body.subject.filter(|field| !field.is_empty()).ok_or_else(missing)?;
    let message = body.message.filter(|field| !field.is_empty()).ok_or_else(missing)?;
    let email = EmailAddress::try_from(raw_email)
        .map_err(|reason| HttpError::new(StatusCode::BAD_REQUEST, reason))?;
    let sent = mail::send_support_request(&state.mailer, &name, &email, &subject, &message)
        .await
        .map_err(|err| match err {
            UpstreamError::Service { .. } => {
                eprintln!("Support request rejected by email provider: {err}");
                HttpError::new(StatusCode::BAD_REQUEST, err.to_string())
            }
            UpstreamError::Transport(_) => {
                eprintln!("Error forwarding support request: {err}");
                HttpError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send email. Please try again later.",
                )
            }
        })?;
    Ok(Json(SendEmailResponse {
        success: true,
        message: "Email sent successfully",
        id: sent.id,
    }))
}
