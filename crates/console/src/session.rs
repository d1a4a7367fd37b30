//! Session user context.
//!
//! Resolves the "current user" identity from session-scoped storage. There
//! is no expiry, no token refresh, and no check that the identity still
//! exists remotely; a null identity simply means "not authenticated", and
//! everything that touches namespaced keys is constructed from the user
//! [`require_user`](Session::require_user) yields.

use std::sync::Arc;

use crate::error::{ConsoleError, Result};
use crate::models::session::{CurrentUser, keys};
use crate::storage::{StorageBackend, StorageError};

/// Read/write access to the session's user identity.
#[derive(Clone)]
pub struct Session {
    backend: Arc<dyn StorageBackend>,
}

impl Session {
    /// Create a session over a shared storage backend.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// The logged-in user, if any.
    ///
    /// A malformed stored identity is treated as absent.
    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        let raw = self.backend.get(keys::CURRENT_USER)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::warn!(%error, "malformed session identity, treating as logged out");
                None
            }
        }
    }

    /// The logged-in user, or `ConsoleError::NotAuthenticated`.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::NotAuthenticated` when no identity is stored.
    pub fn require_user(&self) -> Result<CurrentUser> {
        self.current_user().ok_or(ConsoleError::NotAuthenticated)
    }

    /// Store the identity of the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the identity cannot be written.
    pub fn set_current_user(&self, user: &CurrentUser) -> std::result::Result<(), StorageError> {
        let json = serde_json::to_string(user)?;
        self.backend.set(keys::CURRENT_USER, &json)
    }

    /// Remove the stored identity (logout).
    pub fn clear_current_user(&self) {
        self.backend.remove(keys::CURRENT_USER);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use visualiza_core::{Email, UserId};

    use crate::storage::MemoryBackend;

    fn session_with_backend() -> (Session, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::unbounded());
        let session = Session::new(Arc::clone(&backend) as Arc<dyn StorageBackend>);
        (session, backend)
    }

    fn user() -> CurrentUser {
        CurrentUser {
            id: UserId::new("u-1"),
            email: Email::parse("dra@visualiza.app.br").unwrap(),
            name: "Dra. Marina".to_string(),
        }
    }

    #[test]
    fn test_set_get_clear() {
        let (session, _) = session_with_backend();
        assert!(session.current_user().is_none());

        session.set_current_user(&user()).unwrap();
        assert_eq!(session.current_user().unwrap(), user());

        session.clear_current_user();
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_require_user_when_logged_out() {
        let (session, _) = session_with_backend();
        let err = session.require_user().unwrap_err();
        assert!(matches!(err, ConsoleError::NotAuthenticated));
    }

    #[test]
    fn test_malformed_identity_is_logged_out() {
        let (session, backend) = session_with_backend();
        backend.set(keys::CURRENT_USER, "{{{").unwrap();
        assert!(session.current_user().is_none());
    }
}
