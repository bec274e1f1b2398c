//! Small shared helpers used across routes and services.
pub mod email;
pub mod httperror;
pub mod passwords;
