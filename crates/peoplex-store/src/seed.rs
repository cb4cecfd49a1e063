//! Reference observatories and sites
//!
//! Every populated store starts from the same two observatories and three
//! sites. Seeding is idempotent: rows are looked up by name before insert.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::SqliteRepo;
use rusqlite::Connection;

pub const GREEN_BANK_OBSERVATORY: &str = "Green Bank Observatory";
pub const NRAO: &str = "National Radio Astronomy Observatory";
pub const GREEN_BANK: &str = "Green Bank";
pub const SOCORRO: &str = "Socorro";
pub const CHARLOTTESVILLE: &str = "Charlottesville";

/// Ids of the reference rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceSites {
    pub green_bank_observatory: i64,
    pub nrao: i64,
    pub green_bank: i64,
    pub socorro: i64,
    pub charlottesville: i64,
}

impl ReferenceSites {
    /// Site ids in a fixed order, for assigning people round-robin
    pub fn site_ids(&self) -> [i64; 3] {
        [self.green_bank, self.socorro, self.charlottesville]
    }
}

/// Create the reference observatories and sites if missing
pub fn seed_reference_sites(conn: &mut Connection) -> Result<ReferenceSites> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    let green_bank_observatory = observatory_id(&tx, GREEN_BANK_OBSERVATORY)?;
    let nrao = observatory_id(&tx, NRAO)?;
    let sites = ReferenceSites {
        green_bank_observatory,
        nrao,
        green_bank: site_id(&tx, green_bank_observatory, GREEN_BANK)?,
        socorro: site_id(&tx, nrao, SOCORRO)?,
        charlottesville: site_id(&tx, nrao, CHARLOTTESVILLE)?,
    };

    tx.commit().map_err(from_rusqlite)?;
    tracing::info!(?sites, "reference sites ready");

    Ok(sites)
}

fn observatory_id(conn: &Connection, name: &str) -> Result<i64> {
    match SqliteRepo::find_observatory_by_name(conn, name)? {
        Some(observatory) => Ok(observatory.id),
        None => SqliteRepo::insert_observatory(conn, name),
    }
}

fn site_id(conn: &Connection, observatory_id: i64, name: &str) -> Result<i64> {
    match SqliteRepo::find_site_by_name(conn, observatory_id, name)? {
        Some(site) => Ok(site.id),
        None => SqliteRepo::insert_site(conn, name, observatory_id),
    }
}
