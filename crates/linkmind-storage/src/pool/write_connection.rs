//! Single write connection behind a mutex.
//! Serialized writes, so a read-modify-write inside one closure is atomic.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use linkmind_core::errors::LinkMindResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// A single write connection protected by a mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a new write connection to the given database path.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> LinkMindResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> LinkMindResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, 0)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> LinkMindResult<T>
    where
        F: FnOnce(&Connection) -> LinkMindResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("write connection mutex poisoned"))?;
        f(&guard)
    }
}
