//! Hosted auth/database service connection constants.
use std::{env::var, sync::LazyLock};

use super::secrets::read_secret;

/// The project URL of the hosted auth/database service.
pub static SUPABASE_URL: LazyLock<String> = LazyLock::new(|| {
    var("SUPABASE_URL").expect("SUPABASE_URL not provided in environment variables")
});

/// The elevated service role key used for admin operations.
pub static SERVICE_ROLE_KEY: LazyLock<String> = LazyLock::new(|| {
    var("SUPABASE_SERVICE_ROLE_KEY").unwrap_or_else(|_| {
        let secret_path = var("SUPABASE_SERVICE_ROLE_KEY_DOCKER_SECRET").expect(
            "Neither SUPABASE_SERVICE_ROLE_KEY nor SUPABASE_SERVICE_ROLE_KEY_DOCKER_SECRET provided in environment variables"
        );
        read_secret(&secret_path).expect("Failed to read SUPABASE_SERVICE_ROLE_KEY docker secret")
    })
});
