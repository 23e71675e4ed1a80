//! SQLite-backed key-value store using rusqlite.

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::kv::KeyValueStore;
use crate::storage::schema::{CURRENT_VERSION, SCHEMA, SCHEMA_VERSION_TABLE};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::path::Path;

const UPSERT_ENTRY: &str = "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// Database wrapper for SQLite operations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> StorageResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::IoError(e.to_string()))?;
        }

        let conn =
            Connection::open(path).map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        tracing::debug!("Opened database at {}", path.display());

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Initialize the database schema.
    fn initialize(&self) -> StorageResult<()> {
        self.conn
            .execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;

        let current_version = self.schema_version()?;

        if current_version < CURRENT_VERSION {
            self.migrate(current_version)?;
        }

        Ok(())
    }

    /// Get the current schema version.
    pub fn schema_version(&self) -> StorageResult<i32> {
        let result: SqliteResult<i32> = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        );

        match result {
            Ok(version) => Ok(version),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(StorageError::QueryFailed(e.to_string())),
        }
    }

    /// Run database migrations.
    fn migrate(&self, from_version: i32) -> StorageResult<()> {
        if from_version < 1 {
            self.conn
                .execute_batch(SCHEMA)
                .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;

            self.conn
                .execute(
                    "INSERT INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
                    [CURRENT_VERSION],
                )
                .map_err(|e| StorageError::MigrationFailed(e.to_string()))?;

            tracing::info!("Database migrated to version {}", CURRENT_VERSION);
        }

        Ok(())
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> StorageResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_entries ORDER BY key")
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| row.get(0))
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;

        rows.collect::<Result<Vec<String>, _>>()
            .map_err(|e| StorageError::QueryFailed(e.to_string()))
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StorageError::QueryFailed(e.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn
            .execute(UPSERT_ENTRY, params![key, value, Utc::now().to_rfc3339()])
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> StorageResult<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| StorageError::TransactionFailed(e.to_string()))?;

        let updated_at = Utc::now().to_rfc3339();
        for (key, value) in entries {
            // Dropping `tx` on error rolls back the earlier writes
            tx.execute(UPSERT_ENTRY, params![*key, value, updated_at])
                .map_err(|e| StorageError::QueryFailed(e.to_string()))?;
        }

        tx.commit()
            .map_err(|e| StorageError::TransactionFailed(e.to_string()))
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM kv_entries WHERE key = ?1", params![key])
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;
        Ok(deleted > 0)
    }
}
