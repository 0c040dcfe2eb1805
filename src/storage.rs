//! Key-value store adapter.
//!
//! Every persisted record lives under one of a handful of fixed keys as an
//! opaque text blob. Backends never surface their failures: a broken or
//! missing backend reads as absent and ignores writes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rusqlite::OptionalExtension;

use crate::db::{DbConnection, DbPool};
use crate::error::Result;

pub const PROFILE_KEY: &str = "fitol_user";
pub const WORKOUTS_KEY: &str = "fitol_workouts";
pub const PROGRAMS_KEY: &str = "fitol_programs";
pub const VERSION_KEY: &str = "fitol_version";
pub const PROGRAMS_BACKUP_KEY: &str = "fitol_programs_backup";

pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;

    fn write(&self, key: &str, value: &str) -> bool;

    fn remove(&self, key: &str) -> bool;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

/// Persistent store backed by a single SQLite table.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn shared(pool: DbPool) -> SharedStore {
        Arc::new(Self::new(pool))
    }

    fn conn(&self) -> Result<DbConnection> {
        Ok(self.pool.get()?)
    }

    fn try_read(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn()?;
        let value = conn
            .query_row("SELECT value FROM kv_store WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn try_write(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value, Utc::now()],
        )?;
        Ok(())
    }

    fn try_remove(&self, key: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM kv_store WHERE key = ?", [key])?;
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn read(&self, key: &str) -> Option<String> {
        self.try_read(key).unwrap_or_else(|e| {
            tracing::warn!("Store read of {} failed, treating as absent: {}", key, e);
            None
        })
    }

    fn write(&self, key: &str, value: &str) -> bool {
        match self.try_write(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Store write of {} failed: {}", key, e);
                false
            }
        }
    }

    fn remove(&self, key: &str) -> bool {
        match self.try_remove(key) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Store remove of {} failed: {}", key, e);
                false
            }
        }
    }
}

/// Process-local store, mostly for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> bool {
        match self.entries.lock() {
            Ok(mut entries) => {
                entries.insert(key.to_string(), value.to_string());
                true
            }
            Err(_) => false,
        }
    }

    fn remove(&self, key: &str) -> bool {
        match self.entries.lock() {
            Ok(mut entries) => {
                entries.remove(key);
                true
            }
            Err(_) => false,
        }
    }
}

/// Stand-in for an environment with no persistent backend at all.
pub struct UnavailableStore;

impl UnavailableStore {
    pub fn shared() -> SharedStore {
        Arc::new(Self)
    }
}

impl KeyValueStore for UnavailableStore {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, key: &str, _value: &str) -> bool {
        tracing::debug!("No storage backend, dropping write of {}", key);
        false
    }

    fn remove(&self, _key: &str) -> bool {
        false
    }
}
