//! Defines the state shared across the Axum application.
use crate::{
    constants,
    upstream::{resend, supabase},
};

#[derive(Clone)]
/// The state struct shared across routers.
pub struct AppState {
    /// Service-role client for the hosted auth/database service.
    pub supabase: supabase::Client,
    /// Client for the transactional email provider.
    pub mailer: resend::Client,
    /// Shared secret required on webhook-facing routes, when configured.
    pub webhook_secret: Option<String>,
}

impl AppState {
    /// Build the state from the environment-backed constants.
    pub fn from_env() -> Self {
        Self {
            supabase: supabase::Client::new(
                constants::supabase::SUPABASE_URL.clone(),
                constants::supabase::SERVICE_ROLE_KEY.clone(),
            ),
            mailer: resend::Client::new(
                constants::resend::RESEND_API_URL.clone(),
                constants::resend::RESEND_API_KEY.clone(),
            ),
            webhook_secret: constants::api::WEBHOOK_SECRET_KEY.clone(),
        }
    }
}
