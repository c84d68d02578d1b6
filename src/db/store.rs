//! Opaque string-keyed storage.
//!
//! The rest of the application only ever sees `get`/`set`/`remove` on the
//! well-known keys below; nothing outside this module issues SQL.

use sqlx::{Row, SqlitePool};

use crate::errors::AppError;

/// The persisted keys. Values are JSON-encoded text, except the session key
/// which holds a plain email string.
pub mod keys {
    /// The roster document.
    pub const ROSTER: &str = "colegioData";
    /// The current session email.
    pub const SESSION: &str = "usuario";
    /// The flat incident report array.
    pub const REPORTS: &str = "reportes";
    /// The trip start instant (epoch milliseconds), present only while a trip
    /// is running.
    pub const TRIP_START: &str = "inicioViaje";
}

/// Asynchronous key-value store backed by the SQLite pool.
#[derive(Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Read the value stored under `key`, if any.
    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get("value")))
    }

    /// Write `value` under `key`, replacing any prior value.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO kv (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete the value stored under `key`. Deleting an absent key is fine.
    pub async fn remove(&self, key: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM kv WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn store() -> (KvStore, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let pool = init_database(&dir.path().join("test.sqlite"))
            .await
            .expect("init db");
        (KvStore::new(pool), dir)
    }

    #[tokio::test]
    async fn test_get_set_remove_round_trip() {
        let (store, _dir) = store().await;

        assert_eq!(store.get("missing").await.unwrap(), None);

        store.set("k", "v1").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v1"));

        store.set("k", "v2").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));

        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);

        // Removing again is not an error.
        store.remove("k").await.unwrap();
    }
}
