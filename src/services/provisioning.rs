//! Account provisioning: create the auth user, its profile row, and send
//! the welcome email.
use uuid::Uuid;

use super::mail;
use crate::{
    upstream::{
        resend,
        supabase::{self, ProfileInsert},
    },
    utils::{email::EmailAddress, passwords},
};

/// A successfully provisioned account.
pub struct ProvisionedAccount {
    /// The auth user id assigned by the hosted service.
    pub user_id: Uuid,
    /// The address the account was registered under.
    pub email: EmailAddress,
    /// What happened to the welcome email.
    pub delivery: WelcomeDelivery,
}

/// The outcome of the welcome email send. Delivery failure is non-fatal;
/// the temporary password is handed back for out-of-band delivery instead.
pub enum WelcomeDelivery {
    /// The provider accepted the email.
    Sent {
        /// The provider-assigned message id.
        email_id: String,
    },
    /// The provider did not accept the email; the account is kept.
    Failed {
        /// The credentials that could not be delivered.
        temp_password: String,
        /// The provider's description of the failure.
        error: String,
    },
}

/// Provision a new rewards account. The auth user is created with a
/// temporary password and a pre-confirmed email; the profile row is inserted
/// next, and the just-created user is deleted again if that fails, so no
/// account is left without a profile.
pub async fn signup(
    email: EmailAddress,
    name: Option<String>,
    supabase: &supabase::Client,
    mailer: &resend::Client,
) -> Result<ProvisionedAccount, errors::SignupError> {
    let display_name = name.unwrap_or_else(|| email.local_part().to_owned());
    let temp_password = passwords::generate_temporary();
    let created = supabase
        .create_user(&email, &temp_password, &display_name)
        .await?;
    let profile = ProfileInsert::new(created.id, &email, &display_name);
    if let Err(err) = supabase.insert_profile(&profile).await {
        eprintln!("Profile creation failed for user {}: {err}", created.id);
        if let Err(cleanup_err) = supabase.delete_user(created.id).await {
            eprintln!(
                "Failed to clean up auth user {} after profile error: {cleanup_err}",
                created.id
            );
        }
        return Err(errors::SignupError::ProfileRejected(err));
    }
    let delivery = match mail::send_welcome(mailer, &email, &display_name, &temp_password).await {
        Ok(sent) => WelcomeDelivery::Sent { email_id: sent.id },
        Err(err) => {
            eprintln!("Welcome email delivery failed for {email}: {err}");
            WelcomeDelivery::Failed {
                temp_password,
                error: err.to_string(),
            }
        }
    };
    Ok(ProvisionedAccount {
        user_id: created.id,
        email,
        delivery,
    })
}

pub mod errors {
    use crate::upstream::{errors::UpstreamError, supabase::errors::CreateUserError};
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum SignupError {
        /// The address already has an account.
        #[error("This email is already registered in the system")]
        DuplicateEmail,
        /// The auth service rejected the account creation.
        #[error("{0}")]
        Rejected(UpstreamError),
        /// The profile row was rejected; the auth user has been rolled back.
        #[error("{0}")]
        ProfileRejected(UpstreamError),
        /// An upstream could not be reached at all.
        #[error("{0}")]
        Transport(UpstreamError),
    }

    impl From<CreateUserError> for SignupError {
        fn from(value: CreateUserError) -> Self {
            match value {
                CreateUserError::AlreadyRegistered => Self::DuplicateEmail,
                CreateUserError::Upstream(err @ UpstreamError::Service { .. }) => {
                    Self::Rejected(err)
                }
                CreateUserError::Upstream(err) => Self::Transport(err),
            }
        }
    }
}
