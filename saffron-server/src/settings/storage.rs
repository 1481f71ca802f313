//! redb-based storage for connection settings
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `connections` | service name | `ApiConnection` (JSON) | API connection toggles/keys |
//!
//! Values are JSON-serialized so the schema can grow without a redb
//! migration.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::{ApiConnection, ApiConnectionUpdate};
use thiserror::Error;

/// Table for connection settings: key = service name, value = JSON-serialized ApiConnection
const CONNECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("connections");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Connection settings storage backed by redb
#[derive(Clone)]
pub struct SettingsStorage {
    db: Arc<Database>,
}

impl SettingsStorage {
    /// Open (or create) the settings database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Make sure the table exists so first reads do not fail
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CONNECTIONS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Fetch one service's connection entry
    pub fn get(&self, service: &str) -> StorageResult<Option<ApiConnection>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CONNECTIONS_TABLE)?;

        match table.get(service)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes.value())?)),
            None => Ok(None),
        }
    }

    /// List all stored connection entries, keyed by service name
    pub fn list(&self) -> StorageResult<Vec<(String, ApiConnection)>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CONNECTIONS_TABLE)?;

        let mut entries = Vec::new();
        for item in table.iter()? {
            let (key, value) = item?;
            entries.push((
                key.value().to_string(),
                serde_json::from_slice(value.value())?,
            ));
        }
        Ok(entries)
    }

    /// Store a full connection entry for a service
    pub fn put(&self, service: &str, connection: &ApiConnection) -> StorageResult<()> {
        let bytes = serde_json::to_vec(connection)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CONNECTIONS_TABLE)?;
            table.insert(service, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Apply a partial update to a service's entry, creating it if absent
    pub fn update(
        &self,
        service: &str,
        update: ApiConnectionUpdate,
    ) -> StorageResult<ApiConnection> {
        let mut connection = self.get(service)?.unwrap_or_default();
        connection.apply(update);
        self.put(service, &connection)?;
        Ok(connection)
    }

    /// Remove a service's entry
    pub fn remove(&self, service: &str) -> StorageResult<bool> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(CONNECTIONS_TABLE)?;
            table.remove(service)?.is_some()
        };
        write_txn.commit()?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_temp() -> (tempfile::TempDir, SettingsStorage) {
        let dir = tempdir().unwrap();
        let storage = SettingsStorage::open(dir.path().join("settings.redb")).unwrap();
        (dir, storage)
    }

    #[test]
    fn test_missing_entry_is_none() {
        let (_dir, storage) = open_temp();
        assert!(storage.get("upsell").unwrap().is_none());
    }

    #[test]
    fn test_put_then_get() {
        let (_dir, storage) = open_temp();
        let connection = ApiConnection {
            enabled: true,
            api_key: Some("key-123".into()),
            api_url: Some("https://upsell.example/api".into()),
        };
        storage.put("upsell", &connection).unwrap();

        assert_eq!(storage.get("upsell").unwrap().unwrap(), connection);
    }

    #[test]
    fn test_partial_update_creates_entry() {
        let (_dir, storage) = open_temp();
        let updated = storage
            .update(
                "geocode",
                ApiConnectionUpdate {
                    enabled: Some(true),
                    api_key: Some("pk.abc".into()),
                    api_url: None,
                },
            )
            .unwrap();

        assert!(updated.enabled);
        assert_eq!(updated.api_key.as_deref(), Some("pk.abc"));
        assert!(updated.api_url.is_none());
    }

    #[test]
    fn test_partial_update_preserves_other_fields() {
        let (_dir, storage) = open_temp();
        storage
            .put(
                "geocode",
                &ApiConnection {
                    enabled: true,
                    api_key: Some("pk.abc".into()),
                    api_url: Some("https://geo.example".into()),
                },
            )
            .unwrap();

        let updated = storage
            .update(
                "geocode",
                ApiConnectionUpdate {
                    enabled: Some(false),
                    api_key: None,
                    api_url: None,
                },
            )
            .unwrap();

        assert!(!updated.enabled);
        assert_eq!(updated.api_key.as_deref(), Some("pk.abc"));
        assert_eq!(updated.api_url.as_deref(), Some("https://geo.example"));
    }

    #[test]
    fn test_list_and_remove() {
        let (_dir, storage) = open_temp();
        storage.put("a", &ApiConnection::default()).unwrap();
        storage.put("b", &ApiConnection::default()).unwrap();

        assert_eq!(storage.list().unwrap().len(), 2);
        assert!(storage.remove("a").unwrap());
        assert!(!storage.remove("a").unwrap());
        assert_eq!(storage.list().unwrap().len(), 1);
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.redb");
        {
            let storage = SettingsStorage::open(&path).unwrap();
            storage
                .put(
                    "upsell",
                    &ApiConnection {
                        enabled: true,
                        api_key: None,
                        api_url: None,
                    },
                )
                .unwrap();
        }
        let storage = SettingsStorage::open(&path).unwrap();
        assert!(storage.get("upsell").unwrap().unwrap().enabled);
    }
}
