//! Account sign-up and sign-in against the remote record store.
//!
//! There is no credential check: possession of a registered email is the
//! whole flow, and the resulting identity only scopes local data. On
//! success the caller persists the `CurrentUser` through [`Session`].
//!
//! [`Session`]: crate::session::Session

use thiserror::Error;
use tracing::info;
use visualiza_core::Email;

use crate::models::session::CurrentUser;
use crate::models::user::User;
use crate::remote::users::UserRepository;
use crate::remote::{RecordStoreClient, RecordStoreError};

/// Errors that can occur during sign-up or sign-in.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No account is registered under the given email.
    #[error("No account registered for {0}")]
    UserNotFound(String),

    /// An account already exists under the given email.
    #[error("An account already exists for {0}")]
    EmailTaken(String),

    /// The record store call failed.
    #[error(transparent)]
    Records(#[from] RecordStoreError),
}

/// Sign-up and sign-in flows.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service.
    #[must_use]
    pub const fn new(records: &'a RecordStoreClient) -> Self {
        Self {
            users: UserRepository::new(records),
        }
    }

    /// Register a new account and return its session identity.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailTaken` when the email is already
    /// registered, or a record store error.
    pub async fn sign_up(&self, email: &Email, name: &str) -> Result<CurrentUser, AuthError> {
        if self.users.get_by_email(email).await?.is_some() {
            return Err(AuthError::EmailTaken(email.as_str().to_owned()));
        }
        let user = self.users.create(email, name).await?;
        info!(user_id = %user.id, "account created");
        Ok(CurrentUser::from(&user))
    }

    /// Sign in to an existing account by email.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` when no account matches, or a
    /// record store error.
    pub async fn sign_in(&self, email: &Email) -> Result<CurrentUser, AuthError> {
        let user: User = self
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(email.as_str().to_owned()))?;
        info!(user_id = %user.id, "signed in");
        Ok(CurrentUser::from(&user))
    }
}
