//! SQLite repository implementation
//!
//! Inserts, point lookups and cascading deletes. Rows are never updated.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use peoplex_core::errors::PeopleXError;
use peoplex_core::model::{NewPerson, Observatory, Person, Site};
use rusqlite::{Connection, OptionalExtension};

/// Rows per transaction in `insert_people_batched` unless told otherwise
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// SQLite repository for the three entity tables
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert an Observatory, returning its new id
    pub fn insert_observatory(conn: &Connection, name: &str) -> Result<i64> {
        conn.execute("INSERT INTO observatories (name) VALUES (?1)", [name])
            .map_err(from_rusqlite)?;
        Ok(conn.last_insert_rowid())
    }

    /// Insert a Site under an existing Observatory, returning its new id
    ///
    /// A missing Observatory is a `ConstraintViolation`.
    pub fn insert_site(conn: &Connection, name: &str, observatory_id: i64) -> Result<i64> {
        conn.execute(
            "INSERT INTO sites (name, observatory_id) VALUES (?1, ?2)",
            rusqlite::params![name, observatory_id],
        )
        .map_err(from_rusqlite)?;
        Ok(conn.last_insert_rowid())
    }

    /// Insert a Person at an existing Site, returning its new id
    ///
    /// A missing Site is a `ConstraintViolation`.
    pub fn insert_person(conn: &Connection, person: &NewPerson) -> Result<i64> {
        conn.execute(
            "INSERT INTO people (name, site_id, notes) VALUES (?1, ?2, ?3)",
            rusqlite::params![person.name, person.site_id, person.notes],
        )
        .map_err(from_rusqlite)?;
        Ok(conn.last_insert_rowid())
    }

    /// Insert many people, committing every `batch_size` rows
    ///
    /// Returns the number of rows inserted. A failure rolls back only the
    /// batch in progress; earlier batches stay committed.
    pub fn insert_people_batched(
        conn: &mut Connection,
        people: &[NewPerson],
        batch_size: usize,
    ) -> Result<usize> {
        if batch_size == 0 {
            return Err(PeopleXError::InvalidBatchSize { batch_size }.into());
        }

        let mut inserted = 0;
        for batch in people.chunks(batch_size) {
            let tx = conn.transaction().map_err(from_rusqlite)?;
            {
                let mut stmt = tx
                    .prepare_cached("INSERT INTO people (name, site_id, notes) VALUES (?1, ?2, ?3)")
                    .map_err(from_rusqlite)?;
                for person in batch {
                    stmt.execute(rusqlite::params![person.name, person.site_id, person.notes])
                        .map_err(from_rusqlite)?;
                }
            }
            tx.commit().map_err(from_rusqlite)?;
            inserted += batch.len();
            tracing::debug!(batch_rows = batch.len(), inserted, "committed people batch");
        }

        Ok(inserted)
    }

    /// Get an Observatory by id
    pub fn get_observatory(conn: &Connection, observatory_id: i64) -> Result<Option<Observatory>> {
        conn.query_row(
            "SELECT id, name FROM observatories WHERE id = ?1",
            [observatory_id],
            |row| Ok(Observatory::new(row.get(0)?, row.get::<_, String>(1)?)),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get an Observatory by exact name (lowest id wins on duplicates)
    pub fn find_observatory_by_name(conn: &Connection, name: &str) -> Result<Option<Observatory>> {
        conn.query_row(
            "SELECT id, name FROM observatories WHERE name = ?1 ORDER BY id LIMIT 1",
            [name],
            |row| Ok(Observatory::new(row.get(0)?, row.get::<_, String>(1)?)),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get a Site by id
    pub fn get_site(conn: &Connection, site_id: i64) -> Result<Option<Site>> {
        conn.query_row(
            "SELECT id, name, observatory_id FROM sites WHERE id = ?1",
            [site_id],
            |row| Ok(Site::new(row.get(0)?, row.get::<_, String>(1)?, row.get(2)?)),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get a Site by name within one Observatory
    pub fn find_site_by_name(
        conn: &Connection,
        observatory_id: i64,
        name: &str,
    ) -> Result<Option<Site>> {
        conn.query_row(
            "SELECT id, name, observatory_id FROM sites
             WHERE observatory_id = ?1 AND name = ?2 ORDER BY id LIMIT 1",
            rusqlite::params![observatory_id, name],
            |row| Ok(Site::new(row.get(0)?, row.get::<_, String>(1)?, row.get(2)?)),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List all Sites ordered by id
    pub fn list_sites(conn: &Connection) -> Result<Vec<Site>> {
        let mut stmt = conn
            .prepare("SELECT id, name, observatory_id FROM sites ORDER BY id")
            .map_err(from_rusqlite)?;

        let sites = stmt
            .query_map([], |row| {
                Ok(Site::new(row.get(0)?, row.get::<_, String>(1)?, row.get(2)?))
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(sites)
    }

    /// Get a Person by id with all columns loaded
    pub fn get_person(conn: &Connection, person_id: i64) -> Result<Option<Person>> {
        conn.query_row(
            "SELECT id, name, site_id, notes FROM people WHERE id = ?1",
            [person_id],
            |row| {
                Ok(Person::new(
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Delete an Observatory together with its Sites and their People
    ///
    /// Returns false if no such Observatory existed.
    pub fn delete_observatory(conn: &Connection, observatory_id: i64) -> Result<bool> {
        let deleted = conn
            .execute("DELETE FROM observatories WHERE id = ?1", [observatory_id])
            .map_err(from_rusqlite)?;
        Ok(deleted > 0)
    }

    /// Delete a Site together with its People
    pub fn delete_site(conn: &Connection, site_id: i64) -> Result<bool> {
        let deleted = conn
            .execute("DELETE FROM sites WHERE id = ?1", [site_id])
            .map_err(from_rusqlite)?;
        Ok(deleted > 0)
    }

    pub fn delete_person(conn: &Connection, person_id: i64) -> Result<bool> {
        let deleted = conn
            .execute("DELETE FROM people WHERE id = ?1", [person_id])
            .map_err(from_rusqlite)?;
        Ok(deleted > 0)
    }

    pub fn count_observatories(conn: &Connection) -> Result<u64> {
        count_rows(conn, "SELECT COUNT(*) FROM observatories")
    }

    pub fn count_sites(conn: &Connection) -> Result<u64> {
        count_rows(conn, "SELECT COUNT(*) FROM sites")
    }

    pub fn count_people(conn: &Connection) -> Result<u64> {
        count_rows(conn, "SELECT COUNT(*) FROM people")
    }
}

fn count_rows(conn: &Connection, sql: &str) -> Result<u64> {
    let count: i64 = conn
        .query_row(sql, [], |row| row.get(0))
        .map_err(from_rusqlite)?;
    Ok(count.max(0) as u64)
}
