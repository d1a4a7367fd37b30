//! In-memory storage backend with browser-like quota semantics.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{StorageBackend, StorageError};

/// An in-memory [`StorageBackend`].
///
/// Models the deployed shell's `localStorage`: a flat string-to-string map
/// with an optional total byte budget. The budget counts key and value
/// bytes; a write that would push usage past it fails with
/// [`StorageError::QuotaExceeded`] and leaves the previous value in place.
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    /// A backend with no byte budget.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota_bytes: None,
        }
    }

    /// A backend capped at `quota_bytes` total key+value bytes.
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Total key+value bytes currently stored.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.lock().iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map; a panicked writer left no
        // half-written entry because insert is atomic under the lock.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.lock();
        if let Some(quota) = self.quota_bytes {
            let used: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded);
            }
        }
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let backend = MemoryBackend::unbounded();
        assert!(backend.get("k").is_none());

        backend.set("k", "v").unwrap();
        assert_eq!(backend.get("k").as_deref(), Some("v"));

        backend.remove("k");
        assert!(backend.get("k").is_none());
    }

    #[test]
    fn test_quota_rejects_oversized_write() {
        let backend = MemoryBackend::with_quota(10);
        let err = backend.set("key", "a-long-value").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded));
        assert!(backend.get("key").is_none());
    }

    #[test]
    fn test_quota_counts_replacement_not_double() {
        let backend = MemoryBackend::with_quota(10);
        backend.set("k", "12345678").unwrap(); // 1 + 8 = 9 bytes
        // Replacing the same key re-budgets the old value.
        backend.set("k", "87654321").unwrap();
        assert_eq!(backend.get("k").as_deref(), Some("87654321"));
    }

    #[test]
    fn test_failed_write_preserves_previous_value() {
        let backend = MemoryBackend::with_quota(8);
        backend.set("k", "small").unwrap();
        let err = backend.set("k", "value-too-big").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded));
        assert_eq!(backend.get("k").as_deref(), Some("small"));
    }

    #[test]
    fn test_used_bytes() {
        let backend = MemoryBackend::unbounded();
        backend.set("ab", "cde").unwrap();
        assert_eq!(backend.used_bytes(), 5);
    }
}
