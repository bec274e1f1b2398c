//! Services which correspond to routes and define core business logic.
pub mod mail;
pub mod provisioning;
