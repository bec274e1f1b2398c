//! Webhook-facing route for provisioning rewards accounts.
use axum::{
    extract::{Json, State},
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    middleware::auth::webhook_auth_middleware,
    services::provisioning::{self, WelcomeDelivery},
    state::AppState,
    utils::{email::EmailAddress, httperror::HttpError},
};

/// Create a router for the user provisioning route.
pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/create-user",
            post(create_user).options(super::acknowledge_options),
        )
        .layer(from_fn_with_state(state.clone(), webhook_auth_middleware))
}

/// Request body for /api/create-user.
#[derive(Deserialize)]
struct CreateUserRequest {
    /// The address to register. Validated in the handler so the response
    /// bodies distinguish a missing address from a malformed one.
    email: Option<String>,
    /// An optional display name; the local part of the address is used
    /// otherwise.
    name: Option<String>,
}

/// The created account as echoed back to the caller.
#[derive(Serialize)]
struct CreatedUserBody {
    id: Uuid,
    email: String,
}

/// Response body for /api/create-user.
#[derive(Serialize)]
struct CreateUserResponse {
    success: bool,
    message: &'static str,
    user: CreatedUserBody,
    #[serde(rename = "emailId", skip_serializing_if = "Option::is_none")]
    email_id: Option<String>,
    #[serde(rename = "tempPassword", skip_serializing_if = "Option::is_none")]
    temp_password: Option<String>,
    #[serde(rename = "emailError", skip_serializing_if = "Option::is_none")]
    email_error: Option<String>,
}

/// Provision a rewards account: auth user, profile row, and a welcome email
/// carrying the temporary credentials.
async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreateUserResponse>), HttpError> {
    let raw_email = body
        .email
        .filter(|email| !email.is_empty())
        .ok_or_else(|| HttpError::new(StatusCode::BAD_REQUEST, "Email is required"))?;
    let email = EmailAddress::try_from(raw_email)
        .map_err(|reason| HttpError::new(StatusCode::BAD_REQUEST, reason))?;
    let account = provisioning::signup(email, body.name, &state.supabase, &state.mailer).await?;
    let user = CreatedUserBody {
        id: account.user_id,
        email: String::from(account.email),
    };
    let response = match account.delivery {
        WelcomeDelivery::Sent { email_id } => CreateUserResponse {
            success: true,
            message: "User created and welcome email sent",
            user,
            email_id: Some(email_id),
            temp_password: None,
            email_error: None,
        },
        WelcomeDelivery::Failed {
            temp_password,
            error,
        } => CreateUserResponse {
            success: true,
            message: "User created but email failed to send",
            user,
            email_id: None,
            temp_password: Some(temp_password),
            email_error: Some(error),
        },
    };
    Ok((StatusCode::CREATED, Json(response)))
}

impl From<provisioning::errors::SignupError> for HttpError {
    fn from(value: provisioning::errors::SignupError) -> Self {
        use crate::services::provisioning::errors::SignupError;
        match value {
            SignupError::DuplicateEmail => {
                eprintln!("Attempt to provision an already registered email.");
                Self::new(StatusCode::CONFLICT, "User already exists")
                    .with_message("This email is already registered in the system")
            }
            SignupError::Rejected(err) => {
                eprintln!("Auth service rejected user creation: {err}");
                Self::new(StatusCode::BAD_REQUEST, "Failed to create user")
                    .with_message(err.to_string())
            }
            SignupError::ProfileRejected(err) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user profile")
                    .with_message(err.to_string())
            }
            SignupError::Transport(err) => err.into(),
        }
    }
}
