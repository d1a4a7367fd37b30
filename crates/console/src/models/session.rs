//! Session-related types.
//!
//! Types stored in session-scoped local storage to identify the current
//! user.

use serde::{Deserialize, Serialize};

use visualiza_core::{Email, UserId};

use crate::models::user::User;

/// Session-stored user identity.
///
/// Minimal data kept in local storage to identify the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's record ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name.
    pub name: String,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// Storage keys for session data.
///
/// These keys are deliberately not user-suffixed: they are what identifies
/// the user in the first place.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "visualiza_user";
}
