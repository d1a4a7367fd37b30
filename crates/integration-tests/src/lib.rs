//! Integration tests for Visualiza.
//!
//! These tests exercise the console crate end to end against the in-memory
//! storage backend: the session context, the namespaced store, the gallery
//! writer, and the productivity tracker with its derived alerts and badges.
//! The remote record store is only covered for failure paths; everything
//! else runs fully in process.
//!
//! Run with: `cargo test -p visualiza-integration-tests`

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Once};

use tracing_subscriber::EnvFilter;

use visualiza_console::session::Session;
use visualiza_console::storage::{NamespacedStore, StorageBackend};
use visualiza_console::storage::memory::MemoryBackend;
use visualiza_core::UserId;

static TRACING: Once = Once::new();

/// Initialise the tracing subscriber once for the whole test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .init();
    });
}

/// Shared fixture: one storage backend with the views the console
/// components take over it.
pub struct TestContext {
    pub backend: Arc<MemoryBackend>,
    pub store: NamespacedStore,
    pub session: Session,
}

impl TestContext {
    /// Context over an unbounded backend.
    #[must_use]
    pub fn new() -> Self {
        init_tracing();
        Self::on(Arc::new(MemoryBackend::unbounded()))
    }

    /// Context over a backend with a total-byte quota.
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        init_tracing();
        Self::on(Arc::new(MemoryBackend::with_quota(quota_bytes)))
    }

    fn on(backend: Arc<MemoryBackend>) -> Self {
        Self {
            store: NamespacedStore::new(Arc::clone(&backend) as Arc<dyn StorageBackend>),
            session: Session::new(Arc::clone(&backend) as Arc<dyn StorageBackend>),
            backend,
        }
    }

    /// A second context sharing this one's backend, as another browser tab
    /// over the same storage would.
    #[must_use]
    pub fn reopen(&self) -> Self {
        Self::on(Arc::clone(&self.backend))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A fixed user ID for single-user tests.
#[must_use]
pub fn test_user() -> UserId {
    UserId::new("11111111-1111-1111-1111-111111111111")
}
