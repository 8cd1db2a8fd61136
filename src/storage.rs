//! File-backed key/value store for engine state.
//!
//! Every piece of persisted engine state (notification list, dedup ledger,
//! reminders, followed teams, last-seen country) lives in this store as a
//! JSON document, one file per key under the data directory. The store is
//! deliberately fault tolerant: a missing or corrupted file reads back as
//! "no value" and a failed write is logged and dropped, so persistence
//! problems can never take the engine down.
//!
//! There is no atomicity and no cross-process locking. A single engine
//! process is the unit of serialization; two processes sharing a data
//! directory can race each other and double-fire alerts.

use std::path::PathBuf;

use log::{error, warn};
use serde::{Serialize, de::DeserializeOwned};
use tokio::fs;

/// String-keyed JSON store rooted at a data directory.
///
/// Cloning is cheap; clones share the same directory and therefore the
/// same persisted state.
///
/// # Examples
///
/// ```no_run
/// use matchday::storage::Storage;
///
/// # async fn example() {
/// let storage = Storage::new("./matchday-data");
/// storage.set("followed_teams", &vec!["MEX".to_string()]).await;
/// let teams: Option<Vec<String>> = storage.get("followed_teams").await;
/// # }
/// ```
#[derive(Clone)]
pub struct Storage {
    /// Directory holding one `<key>.json` file per stored key.
    dir: PathBuf,
}

impl Storage {
    /// Creates a store rooted at `dir`. The directory is created on first
    /// write if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Storage { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Reads and deserializes the value stored under `key`.
    ///
    /// Returns `None` when the file is missing or does not deserialize into
    /// `T`. Corruption is logged and treated as an empty value, never
    /// surfaced to the caller.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let Ok(serialized) = fs::read_to_string(self.path_for(key)).await else {
            return None;
        };

        match serde_json::from_str(&serialized) {
            Ok(value) => Some(value),
            Err(e) => {
                error!("discarding corrupted value for key {}: {}", key, e);
                None
            }
        }
    }

    /// Serializes and persists `value` under `key`.
    ///
    /// Serialization or write failures are logged and swallowed.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) {
        let serialized = match serde_json::to_string(value) {
            Ok(serialized) => serialized,
            Err(e) => {
                error!("failed to serialize value for key {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = fs::create_dir_all(&self.dir).await {
            error!("failed to create data directory: {}", e);
            return;
        }

        if let Err(e) = fs::write(self.path_for(key), &serialized).await {
            error!("failed to persist key {}: {}", key, e);
        }
    }

    /// Deletes the value stored under `key`, if any.
    pub async fn remove(&self, key: &str) {
        if let Err(e) = fs::remove_file(self.path_for(key)).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("failed to remove key {}: {}", key, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_get_missing_key_returns_none() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path());

        let value: Option<Vec<String>> = storage.get("missing").await;
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path());

        storage.set("teams", &vec!["MEX".to_string(), "CAN".to_string()]).await;

        let value: Option<Vec<String>> = storage.get("teams").await;
        assert_eq!(value.unwrap(), vec!["MEX".to_string(), "CAN".to_string()]);
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path());

        storage.set("country", &"US".to_string()).await;
        storage.set("country", &"MX".to_string()).await;

        let value: Option<String> = storage.get("country").await;
        assert_eq!(value.unwrap(), "MX");
    }

    #[tokio::test]
    async fn test_corrupted_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path());

        fs::write(dir.path().join("broken.json"), "{ not json at all")
            .await
            .unwrap();

        let value: Option<Vec<String>> = storage.get("broken").await;
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_remove_deletes_value() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path());

        storage.set("country", &"US".to_string()).await;
        storage.remove("country").await;

        let value: Option<String> = storage.get("country").await;
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_silent() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path());

        storage.remove("never_set").await;
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path());
        let clone = storage.clone();

        storage.set("country", &"CA".to_string()).await;

        let value: Option<String> = clone.get("country").await;
        assert_eq!(value.unwrap(), "CA");
    }
}
