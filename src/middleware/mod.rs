//! Middleware layered onto webhook-facing routes.
pub mod auth;
