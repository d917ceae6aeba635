//! Session-scoped version cache
//!
//! A session is the span during which a resolved tag stays valid. For a
//! single process that is the process lifetime ([`MemoryStore`]); a site
//! build that runs the binary many times shares one named session through
//! [`SqliteStore`] and ends it with [`SessionStore::clear`].

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

#[cfg(test)]
use mockall::automock;
use rusqlite::Connection;
use tracing::{debug, info};

use crate::version::error::CacheError;

/// Key/value storage that lives for one session
#[cfg_attr(test, automock)]
pub trait SessionStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores `value`, replacing any previous value for `key`
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Ends the session, dropping every entry
    fn clear(&self) -> Result<(), CacheError>;
}

/// Session store backed by a map; the session ends with the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, CacheError> {
        self.entries.lock().map_err(|_| CacheError::LockPoisoned)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), CacheError> {
        self.lock()?.clear();
        Ok(())
    }
}

/// Session store persisted in SQLite, partitioned by session id
pub struct SqliteStore {
    conn: Mutex<Connection>,
    session: String,
}

impl SqliteStore {
    pub fn open(db_path: &Path, session: &str) -> Result<Self, CacheError> {
        info!("Opening session cache at {:?} (session {})", db_path, session);

        let conn = Connection::open(db_path)?;

        // Several invocations of one build may share the file
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;

        let store = Self {
            conn: Mutex::new(conn),
            session: session.to_string(),
        };

        store.create_schema()?;
        Ok(store)
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    /// Acquire database connection lock with proper error handling
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, CacheError> {
        self.conn.lock().map_err(|_| CacheError::LockPoisoned)
    }

    /// Get current timestamp in milliseconds since UNIX epoch
    fn current_timestamp_ms() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default()
    }

    fn create_schema(&self) -> Result<(), CacheError> {
        debug!("Creating session cache schema");

        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS session_entries (
                session TEXT NOT NULL,
                cache_key TEXT NOT NULL,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (session, cache_key)
            )
            "#,
            [],
        )?;

        Ok(())
    }
}

impl SessionStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let conn = self.lock_conn()?;
        let result = conn.query_row(
            "SELECT value FROM session_entries WHERE session = ?1 AND cache_key = ?2",
            (&self.session, key),
            |row| row.get(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let now = Self::current_timestamp_ms();
        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            INSERT INTO session_entries (session, cache_key, value, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(session, cache_key)
            DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
            (&self.session, key, value, now),
        )?;

        debug!("Cached {} = {} (session {})", key, value, self.session);
        Ok(())
    }

    fn clear(&self) -> Result<(), CacheError> {
        let conn = self.lock_conn()?;
        let removed = conn.execute(
            "DELETE FROM session_entries WHERE session = ?1",
            [&self.session],
        )?;

        info!("Ended session {}: {} entries removed", self.session, removed);
        Ok(())
    }
}
