//! Per-user namespaced local persistence.
//!
//! The console keeps its working data in a keyed string store (the browser
//! `localStorage` in the deployed shell). Access goes through two layers:
//!
//! - [`StorageBackend`] - physical string keys to string values, with a
//!   quota the backend may enforce on writes.
//! - [`NamespacedStore`] - typed JSON blobs addressed by
//!   ([`StorageKey`], [`UserId`]). This is the only path to namespaced
//!   data, so a caller can neither forget the user suffix nor collide two
//!   users' keys.
//!
//! Reads are forgiving by design: an absent or corrupt blob loads as
//! `None` (first-run behavior) rather than an error. Writes are not: a
//! failed write is reported to the caller, who decides whether to retry
//! with reduced data.

pub mod memory;

pub use memory::MemoryBackend;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use visualiza_core::{StorageKey, UserId};

/// Errors that can occur when persisting local data.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The value could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend refused the write because the storage budget is spent.
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// The backend failed for another reason.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A keyed string store.
///
/// Implementations take `&self`; shared backends synchronize internally.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::QuotaExceeded` if the write would exceed the
    /// backend's byte budget, or `StorageError::Backend` on other failures.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// Typed JSON persistence scoped by (logical key, user id).
#[derive(Clone)]
pub struct NamespacedStore {
    backend: Arc<dyn StorageBackend>,
}

impl NamespacedStore {
    /// Create a store over a shared backend.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Serialize `value` to JSON and write it under the user's key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the backend write fails.
    /// The previously stored value is untouched on failure.
    pub fn save<T: Serialize>(
        &self,
        key: StorageKey,
        user_id: &UserId,
        value: &T,
    ) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.backend.set(&key.physical(user_id), &json).inspect_err(
            |error| tracing::error!(%key, %user_id, %error, "failed to persist local data"),
        )
    }

    /// Load and parse the user's blob under `key`.
    ///
    /// Returns `None` when the blob is absent or does not parse as `T`;
    /// a malformed blob is logged and treated as absent, never an error.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: StorageKey, user_id: &UserId) -> Option<T> {
        let raw = self.backend.get(&key.physical(user_id))?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(%key, %user_id, %error, "malformed persisted data, treating as absent");
                None
            }
        }
    }

    /// Remove the user's blob under `key`.
    pub fn remove(&self, key: StorageKey, user_id: &UserId) {
        self.backend.remove(&key.physical(user_id));
    }
}
