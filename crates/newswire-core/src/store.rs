//! Credential storage trait and in-memory implementation.
//!
//! The credential store is a plain string key-value surface holding the
//! two session entries. It carries no logic of its own; the request
//! pipeline decides when entries are written or scrubbed.

use std::collections::HashMap;
use std::sync::Mutex;

/// Store key for the short-lived access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Store key for the longer-lived refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// A persistent, synchronous key-value store for session credentials.
///
/// Implementations must be shareable across concurrently in-flight
/// requests. There is no locking around the token pair as a whole:
/// concurrent refreshes race and the last writer wins.
pub trait CredentialStore: Send + Sync {
    /// Read a value. Never fails: an absent key and a backend read
    /// error both yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, overwriting unconditionally.
    fn set(&self, key: &str, value: &str);

    /// Delete a value. Idempotent; removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// An in-memory credential store.
///
/// Used by tests and by embedders that manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_yields_none() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn set_overwrites_unconditionally() {
        let store = MemoryCredentialStore::new();
        store.set(ACCESS_TOKEN_KEY, "first");
        store.set(ACCESS_TOKEN_KEY, "second");
        assert_eq!(store.get(ACCESS_TOKEN_KEY), Some("second".to_string()));
    }

    #[test]
    fn remove_is_idempotent() {
        let store = MemoryCredentialStore::new();
        store.set(REFRESH_TOKEN_KEY, "tok");
        store.remove(REFRESH_TOKEN_KEY);
        store.remove(REFRESH_TOKEN_KEY);
        assert_eq!(store.get(REFRESH_TOKEN_KEY), None);
    }

    #[test]
    fn entries_are_independent() {
        let store = MemoryCredentialStore::new();
        store.set(ACCESS_TOKEN_KEY, "a");
        store.set(REFRESH_TOKEN_KEY, "r");
        store.remove(ACCESS_TOKEN_KEY);
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(store.get(REFRESH_TOKEN_KEY), Some("r".to_string()));
    }
}
