//! User account records.

use visualiza_core::Email;

use crate::models::user::{NewUser, User};
use crate::remote::{Query, RecordStoreClient, RecordStoreError};

const COLLECTION: &str = "users";

/// Repository for user accounts.
pub struct UserRepository<'a> {
    records: &'a RecordStoreClient,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(records: &'a RecordStoreClient) -> Self {
        Self { records }
    }

    /// Create a new user account.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the row, for example when
    /// the email is already registered.
    pub async fn create(&self, email: &Email, name: &str) -> Result<User, RecordStoreError> {
        let row = NewUser {
            email: email.clone(),
            name: name.to_owned(),
        };
        let created: Vec<User> = self.records.insert(COLLECTION, &[row]).await?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RecordStoreError::Parse("insert returned no representation".to_owned()))
    }

    /// Look up a user by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. An unknown email is `Ok(None)`.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RecordStoreError> {
        let rows: Vec<User> = self
            .records
            .select(COLLECTION, &Query::new().eq("email", email.as_str()))
            .await?;
        Ok(rows.into_iter().next())
    }
}
