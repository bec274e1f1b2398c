//! Service-role client for the hosted auth/database service.
//!
//! All requests carry the elevated "service role" credential, so this client
//! must only ever be reachable from trusted server-side code.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::UpstreamError;
use crate::utils::email::EmailAddress;

/// An admin client scoped to a single project URL and service role key.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    service_role_key: String,
}

/// The auth user record returned when an account is created.
#[derive(Deserialize)]
pub struct CreatedUser {
    /// The identifier assigned to the new auth user.
    pub id: Uuid,
}

/// A new row for the `profiles` table, created alongside each auth user.
#[derive(Serialize)]
pub struct ProfileInsert {
    user_id: Uuid,
    email: String,
    display_name: String,
    balance: u32,
    withdrawal_goal: u32,
    daily_reviews_completed: u32,
    total_reviews: u32,
    current_streak: u32,
    requires_password_change: bool,
}

impl ProfileInsert {
    /// A fresh profile: zeroed counters, the default withdrawal goal, and a
    /// forced password change on first login.
    pub fn new(user_id: Uuid, email: &EmailAddress, display_name: &str) -> Self {
        Self {
            user_id,
            email: email.as_str().to_owned(),
            display_name: display_name.to_owned(),
            balance: 0,
            withdrawal_goal: 1000,
            daily_reviews_completed: 0,
            total_reviews: 0,
            current_streak: 0,
            requires_password_change: true,
        }
    }
}

/// The parsed body of a rejected request.
#[derive(Deserialize)]
struct Rejection {
    #[serde(alias = "message", alias = "error_description")]
    msg: Option<String>,
    error_code: Option<String>,
}

impl Rejection {
    async fn read(response: reqwest::Response) -> Self {
        let raw = response.text().await.unwrap_or_default();
        serde_json::from_str(&raw).unwrap_or_else(|_| Self {
            msg: (!raw.is_empty()).then_some(raw),
            error_code: None,
        })
    }

    fn message(&self) -> String {
        self.msg
            .clone()
            .unwrap_or_else(|| "Unexpected response from auth service".to_owned())
    }

    /// Whether the rejection means the address is already registered. The
    /// provider has signalled this as an `email_exists` code and an
    /// "already registered" message across versions. The status alone is not
    /// a signal: other validation failures share 422.
    fn is_duplicate(&self) -> bool {
        self.error_code.as_deref() == Some("email_exists")
            || self.message().contains("already registered")
    }
}

impl Client {
    /// Construct a client for a project at `base_url`, authenticating with
    /// the given service role key.
    pub fn new(base_url: String, service_role_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            service_role_key,
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{path}", self.base_url))
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
    }

    /// Create an auth user with a pre-confirmed email address so they can
    /// log in immediately with the supplied password.
    pub async fn create_user(
        &self,
        email: &EmailAddress,
        password: &str,
        display_name: &str,
    ) -> Result<CreatedUser, errors::CreateUserError> {
        let response = self
            .request(reqwest::Method::POST, "/auth/v1/admin/users")
            .json(&serde_json::json!({
                "email": email.as_str(),
                "password": password,
                "email_confirm": true,
                "user_metadata": { "display_name": display_name },
            }))
            .send()
            .await
            .map_err(UpstreamError::from)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await.map_err(UpstreamError::from)?);
        }
        let rejection = Rejection::read(response).await;
        if rejection.is_duplicate() {
            return Err(errors::CreateUserError::AlreadyRegistered);
        }
        Err(UpstreamError::Service {
            status,
            message: rejection.message(),
        }
        .into())
    }

    /// Delete an auth user. Used to roll back a half-provisioned account.
    pub async fn delete_user(&self, user_id: Uuid) -> Result<(), UpstreamError> {
        let response = self
            .request(
                reqwest::Method::DELETE,
                &format!("/auth/v1/admin/users/{user_id}"),
            )
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(UpstreamError::Service {
            status,
            message: Rejection::read(response).await.message(),
        })
    }

    /// Insert a profile row through the row-store REST interface.
    pub async fn insert_profile(&self, profile: &ProfileInsert) -> Result<(), UpstreamError> {
        let response = self
            .request(reqwest::Method::POST, "/rest/v1/profiles")
            .header("Prefer", "return=minimal")
            .json(profile)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(UpstreamError::Service {
            status,
            message: Rejection::read(response).await.message(),
        })
    }
}

pub mod errors {
    pub use super::super::errors::UpstreamError;
    use thiserror::Error;

    /// Errors raised while creating an auth user.
    #[derive(Error, Debug)]
    pub enum CreateUserError {
        /// The address already has an account.
        #[error("This email is already registered in the system")]
        AlreadyRegistered,
        /// Any other failure from the auth service.
        #[error(transparent)]
        Upstream(#[from] UpstreamError),
    }
}
