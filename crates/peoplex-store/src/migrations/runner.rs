//! Migration runner

#![allow(clippy::result_large_err)]

use std::collections::HashMap;

use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::{get_migrations, Migration};
use rusqlite::{params, Connection};

const CREATE_SCHEMA_VERSION: &str = "CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY,
    migration_id TEXT NOT NULL UNIQUE,
    applied_at INTEGER NOT NULL,
    checksum TEXT
)";

/// Bring the schema up to date
///
/// Each embedded migration runs at most once, in its own transaction. A
/// migration that was already applied is skipped, but its recorded checksum
/// must still match the embedded SQL.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    conn.execute(CREATE_SCHEMA_VERSION, []).map_err(from_rusqlite)?;
    let applied = recorded_checksums(conn)?;

    for migration in get_migrations() {
        let checksum = compute_checksum(migration.sql);
        match applied.get(migration.id) {
            Some(Some(recorded)) if *recorded != checksum => {
                return Err(checksum_mismatch(migration.id, recorded, &checksum));
            }
            Some(_) => continue,
            None => run_migration(conn, &migration, &checksum)?,
        }
    }

    Ok(())
}

fn recorded_checksums(conn: &Connection) -> Result<HashMap<String, Option<String>>> {
    let mut stmt = conn
        .prepare("SELECT migration_id, checksum FROM schema_version")
        .map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<HashMap<_, _>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

fn run_migration(conn: &mut Connection, migration: &Migration, checksum: &str) -> Result<()> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(migration.sql)
        .map_err(|e| migration_error(migration.id, &e.to_string()))?;
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?1, ?2, ?3)",
        params![migration.id, chrono::Utc::now().timestamp(), checksum],
    )
    .map_err(from_rusqlite)?;
    tx.commit().map_err(from_rusqlite)?;

    tracing::info!(migration_id = migration.id, "applied migration");
    Ok(())
}
