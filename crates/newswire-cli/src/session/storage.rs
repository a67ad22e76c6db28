//! File-backed credential store.
//!
//! Persists the session entries as a flat JSON object so they survive
//! process restarts, mirroring the browser storage of the web frontend.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::warn;

use newswire_core::CredentialStore;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Credential store backed by a JSON file.
///
/// Reads degrade to "absent" on any failure, per the store contract:
/// a missing or corrupt session file behaves like an empty store.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Open the store at the platform data directory.
    pub fn open_default() -> Result<Self> {
        let dirs =
            ProjectDirs::from("", "", "newswire").context("Could not determine config directory")?;

        let data_dir = dirs.data_dir();
        fs::create_dir_all(data_dir).context("Failed to create data directory")?;

        Ok(Self {
            path: data_dir.join("session.json"),
        })
    }

    /// Open a store at an explicit path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> HashMap<String, String> {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return HashMap::new();
        };

        match serde_json::from_str(&json) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Ignoring unreadable session file");
                HashMap::new()
            }
        }
    }

    fn write_entries(&self, entries: &HashMap<String, String>) {
        let json = match serde_json::to_string_pretty(entries) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize session entries");
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, &json) {
            warn!(error = %e, path = %self.path.display(), "Failed to write session file");
            return;
        }

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            if let Ok(metadata) = fs::metadata(&self.path) {
                let mut perms = metadata.permissions();
                perms.set_mode(0o600);
                if let Err(e) = fs::set_permissions(&self.path, perms) {
                    warn!(error = %e, "Failed to restrict session file permissions");
                }
            }
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.read_entries();
        if entries.remove(key).is_some() {
            self.write_entries(&entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newswire_core::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

    fn temp_store() -> (tempfile::TempDir, FileCredentialStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::at_path(dir.path().join("session.json"));
        (dir, store)
    }

    #[test]
    fn round_trips_entries() {
        let (_dir, store) = temp_store();
        store.set(ACCESS_TOKEN_KEY, "A1");
        store.set(REFRESH_TOKEN_KEY, "R1");

        assert_eq!(store.get(ACCESS_TOKEN_KEY), Some("A1".to_string()));
        assert_eq!(store.get(REFRESH_TOKEN_KEY), Some("R1".to_string()));
    }

    #[test]
    fn survives_reopening() {
        let (_dir, store) = temp_store();
        store.set(ACCESS_TOKEN_KEY, "A1");

        let reopened = FileCredentialStore::at_path(store.path());
        assert_eq!(reopened.get(ACCESS_TOKEN_KEY), Some("A1".to_string()));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "not json at all").unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn remove_is_idempotent() {
        let (_dir, store) = temp_store();
        store.set(ACCESS_TOKEN_KEY, "A1");
        store.remove(ACCESS_TOKEN_KEY);
        store.remove(ACCESS_TOKEN_KEY);
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_owner_only() {
        let (_dir, store) = temp_store();
        store.set(ACCESS_TOKEN_KEY, "A1");

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
