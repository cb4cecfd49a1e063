//! Database connection management
//!
//! Every connection handed out here has foreign keys enforced, which the
//! cascade-delete semantics of the schema depend on.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default location of the database file, relative to the working directory
pub const DEFAULT_DB_PATH: &str = ".peoplex/store.db";

/// How long a connection waits on a locked database before failing
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for a file-backed store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub busy_timeout: Duration,
}

impl StoreConfig {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

/// Open a SQLite database at the given path with default settings
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    open_configured(&StoreConfig::new(path))
}

/// Open a SQLite database described by `config`
///
/// Creates the parent directory if needed, applies the busy timeout, enables
/// foreign keys and switches the journal to WAL.
pub fn open_configured(config: &StoreConfig) -> Result<Connection> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| crate::errors::io_error("create_db_dir", e))?;
        }
    }

    let conn = Connection::open(&config.path).map_err(from_rusqlite)?;
    conn.busy_timeout(config.busy_timeout)
        .map_err(from_rusqlite)?;
    configure(&conn)?;

    let journal_mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(from_rusqlite)?;
    tracing::debug!(
        path = %config.path.display(),
        journal_mode = %journal_mode,
        "opened store"
    );

    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection for this schema
pub fn configure(conn: &Connection) -> Result<()> {
    // SQLite ships with foreign keys off; cascades need them on
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(from_rusqlite)?;

    Ok(())
}
