//! Constants (primary environment variables/secrets) used across the application.
pub mod api;
pub mod resend;
mod secrets;
pub mod supabase;
