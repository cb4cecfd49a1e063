//! Store handle with fetch accounting
//!
//! Every method that talks to SQLite counts as one fetch. Relations are never
//! loaded implicitly: a caller that wants a Person's Site either asks for an
//! eager load up front or calls `fetch_site` per row, so the cost of each
//! access pattern is visible at the call site.

#![allow(clippy::result_large_err)]

use std::cell::Cell;

use peoplex_core::errors::PeopleXError;
use peoplex_core::model::{Observatory, Person, PersonRow, Site};
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};

use crate::errors::{from_rusqlite, Result};
use crate::query::PersonQuery;

/// Person columns fetched alongside an eager load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonColumns {
    /// id, name, site_id, notes
    All,
    /// id, name, site_id; notes deferred
    NameAndSite,
}

/// Explicitly passed handle over one connection
pub struct StoreHandle<'c> {
    conn: &'c Connection,
    fetches: Cell<u64>,
}

impl<'c> StoreHandle<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self {
            conn,
            fetches: Cell::new(0),
        }
    }

    /// Number of fetches issued since creation or the last reset
    pub fn fetch_count(&self) -> u64 {
        self.fetches.get()
    }

    pub fn reset_fetch_count(&self) {
        self.fetches.set(0);
    }

    fn record_fetch(&self, op: &'static str) {
        self.fetches.set(self.fetches.get() + 1);
        tracing::trace!(op, fetches = self.fetches.get(), "fetch");
    }

    fn query_rows<T, F>(&self, op: &'static str, sql: &str, params: &[i64], map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        self.record_fetch(op);
        let mut stmt = self.conn.prepare(sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map(params_from_iter(params.iter()), map)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }

    // ---------------------------------------------------------------------
    // Collection primitives
    // ---------------------------------------------------------------------

    /// Full iteration: every Person column, no relations
    pub fn people(&self, query: &PersonQuery) -> Result<Vec<Person>> {
        let (sql, params) = query
            .to_sql("SELECT people.id, people.name, people.site_id, people.notes FROM people");
        self.query_rows("people", &sql, &params, |row| {
            Ok(Person::new(
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, String>(3)?,
            ))
        })
    }

    /// Column restriction: (id, name, site_id) only, notes deferred
    pub fn people_only(&self, query: &PersonQuery) -> Result<Vec<Person>> {
        let (sql, params) =
            query.to_sql("SELECT people.id, people.name, people.site_id FROM people");
        self.query_rows("people_only", &sql, &params, |row| {
            Ok(Person::deferred(row.get::<_, i64>(0)?, row.get::<_, String>(1)?, row.get::<_, i64>(2)?))
        })
    }

    /// Eager load along `site__observatory` in a single joined fetch
    pub fn people_with_relations(
        &self,
        query: &PersonQuery,
        columns: PersonColumns,
    ) -> Result<Vec<PersonRow>> {
        let notes_column = match columns {
            PersonColumns::All => "people.notes",
            PersonColumns::NameAndSite => "NULL",
        };
        let select = format!(
            "SELECT people.id, people.name, people.site_id, {notes_column},
                    sites.id, sites.name, sites.observatory_id,
                    observatories.id, observatories.name
             FROM people
             JOIN sites ON sites.id = people.site_id
             JOIN observatories ON observatories.id = sites.observatory_id"
        );
        let (sql, params) = query.to_sql(&select);

        self.query_rows("people_with_relations", &sql, &params, |row| {
            let person = Person {
                id: row.get(0)?,
                name: row.get(1)?,
                site_id: row.get(2)?,
                notes: row.get::<_, Option<String>>(3)?,
            };
            let site = Site::new(row.get(4)?, row.get::<_, String>(5)?, row.get(6)?);
            let observatory = Observatory::new(row.get(7)?, row.get::<_, String>(8)?);
            Ok(PersonRow::new(person, observatory, site))
        })
    }

    /// Flat projection: (person name, site name, observatory name)
    ///
    /// Columns come back in source order; callers reorder as needed.
    pub fn people_values(&self, query: &PersonQuery) -> Result<Vec<(String, String, String)>> {
        let (sql, params) = query.to_sql(
            "SELECT people.name, sites.name, observatories.name
             FROM people
             JOIN sites ON sites.id = people.site_id
             JOIN observatories ON observatories.id = sites.observatory_id",
        );
        self.query_rows("people_values", &sql, &params, |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })
    }

    // ---------------------------------------------------------------------
    // Fetch-on-demand accessors
    // ---------------------------------------------------------------------

    /// Fetch one Site by id
    pub fn fetch_site(&self, site_id: i64) -> Result<Site> {
        self.record_fetch("fetch_site");
        self.conn
            .query_row(
                "SELECT id, name, observatory_id FROM sites WHERE id = ?1",
                [site_id],
                |row| Ok(Site::new(row.get(0)?, row.get::<_, String>(1)?, row.get(2)?)),
            )
            .optional()
            .map_err(from_rusqlite)?
            .ok_or_else(|| PeopleXError::SiteNotFound { site_id }.into())
    }

    /// Fetch one Observatory by id
    pub fn fetch_observatory(&self, observatory_id: i64) -> Result<Observatory> {
        self.record_fetch("fetch_observatory");
        self.conn
            .query_row(
                "SELECT id, name FROM observatories WHERE id = ?1",
                [observatory_id],
                |row| Ok(Observatory::new(row.get(0)?, row.get::<_, String>(1)?)),
            )
            .optional()
            .map_err(from_rusqlite)?
            .ok_or_else(|| PeopleXError::ObservatoryNotFound { observatory_id }.into())
    }

    /// Load a deferred notes column for one Person
    pub fn fetch_person_notes(&self, person_id: i64) -> Result<String> {
        self.record_fetch("fetch_person_notes");
        self.conn
            .query_row(
                "SELECT notes FROM people WHERE id = ?1",
                [person_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)?
            .ok_or_else(|| PeopleXError::PersonNotFound { person_id }.into())
    }

    /// Fill in `person.notes` if it was deferred; no fetch if already loaded
    pub fn load_notes(&self, person: &mut Person) -> Result<()> {
        if person.notes.is_none() {
            person.notes = Some(self.fetch_person_notes(person.id)?);
        }
        Ok(())
    }
}
