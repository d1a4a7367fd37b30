//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use visualiza_core::{Email, UserId};

/// A registered user, as stored in the remote `users` collection.
///
/// Created at signup and immutable afterwards; its ID is the namespace for
/// all of the user's local persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// When the user record was created.
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the `users` collection.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub email: Email,
    pub name: String,
}
