//! Transactional email provider constants.
use std::{env::var, sync::LazyLock};

use super::secrets::read_secret;

/// The sender used for onboarding email.
pub const ONBOARDING_FROM: &str = "YT Rewards <onboarding@resend.dev>";

/// The sender used for forwarded support requests.
pub const SUPPORT_FROM: &str = "YT Rewards Support <onboarding@resend.dev>";

/// The provider API endpoint. Overridable for local testing.
pub static RESEND_API_URL: LazyLock<String> = LazyLock::new(|| {
    var("RESEND_API_URL").unwrap_or_else(|_| String::from("https://api.resend.com"))
});

/// The provider API key.
pub static RESEND_API_KEY: LazyLock<String> = LazyLock::new(|| {
    var("RESEND_API_KEY").unwrap_or_else(|_| {
        let secret_path = var("RESEND_API_KEY_DOCKER_SECRET").expect(
            "Neither RESEND_API_KEY nor RESEND_API_KEY_DOCKER_SECRET provided in environment variables"
        );
        read_secret(&secret_path).expect("Failed to read RESEND_API_KEY docker secret")
    })
});

/// The inbox support requests are forwarded to.
pub static SUPPORT_EMAIL: LazyLock<String> = LazyLock::new(|| {
    var("SUPPORT_EMAIL").expect("SUPPORT_EMAIL not provided in environment variables")
});
