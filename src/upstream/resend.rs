//! Client for the transactional email provider.
use serde::{Deserialize, Serialize};

use super::errors::UpstreamError;

/// A client scoped to a provider endpoint and API key.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// An email to hand to the provider for delivery.
#[derive(Serialize)]
pub struct OutboundEmail {
    /// The sender, in `Name <address>` form.
    pub from: String,
    /// The recipient address.
    pub to: String,
    /// An optional address replies should go to instead of `from`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    /// The subject line.
    pub subject: String,
    /// The rendered HTML body.
    pub html: String,
}

/// The provider's receipt for an accepted email.
#[derive(Deserialize)]
pub struct SentEmail {
    /// The provider-assigned message id.
    pub id: String,
}

/// The provider's error body.
#[derive(Deserialize)]
struct Rejection {
    message: Option<String>,
}

impl Client {
    /// Construct a client for the provider at `base_url` with the given API
    /// key.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key,
        }
    }

    /// Submit an email for delivery.
    pub async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, UpstreamError> {
        let response = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let raw = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Rejection>(&raw)
            .ok()
            .and_then(|rejection| rejection.message)
            .unwrap_or_else(|| "Unexpected response from email provider".to_owned());
        Err(UpstreamError::Service { status, message })
    }
}
