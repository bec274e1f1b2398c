//! Clients for the hosted services this API fronts: the auth/database
//! service (accessed with the elevated service role) and the transactional
//! email provider.
pub mod errors;
pub mod resend;
pub mod supabase;
