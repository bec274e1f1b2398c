//! Constants related to the general configuration of the entire API and its deployment.

use std::{env::var, sync::LazyLock};

use super::secrets::read_secret;

/// The address and port the HTTP listener binds to.
pub static BIND_ADDRESS: LazyLock<String> =
    LazyLock::new(|| var("BIND_ADDRESS").unwrap_or_else(|_| String::from("0.0.0.0:8080")));

/// The canonical production deployment of the frontend.
pub const PRODUCTION_APP_URL: &str = "https://ytrewards-sigma.vercel.app";

/// The public URL of the frontend, linked from outbound email.
pub static APP_URL: LazyLock<String> =
    LazyLock::new(|| var("APP_URL").unwrap_or_else(|_| String::from(PRODUCTION_APP_URL)));

/// Origins allowed to call the API from a browser.
pub static ALLOWED_ORIGINS: LazyLock<Vec<String>> = LazyLock::new(|| {
    vec![
        var("APP_URL").unwrap_or_else(|_| String::from("http://localhost:8080")),
        String::from(PRODUCTION_APP_URL),
    ]
});

/// The shared secret webhook callers must present as a bearer token. The
/// check is disabled when neither the variable nor a secret file is set.
pub static WEBHOOK_SECRET_KEY: LazyLock<Option<String>> = LazyLock::new(|| {
    var("WEBHOOK_SECRET_KEY").ok().or_else(|| {
        let secret_path = var("WEBHOOK_SECRET_KEY_DOCKER_SECRET").ok()?;
        Some(read_secret(&secret_path).expect("Failed to read WEBHOOK_SECRET_KEY docker secret"))
    })
});
