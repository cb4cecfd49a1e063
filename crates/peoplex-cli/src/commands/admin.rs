//! Schema and row administration commands
//!
//! Usage:
//!   peoplex migrate
//!   peoplex seed-sites
//!   peoplex add-person --name <NAME> --site-id <ID> [--notes <TEXT>]
//!   peoplex delete-observatory <ID>
//!   peoplex delete-site <ID>

use clap::Args;
use peoplex_core::model::NewPerson;
use peoplex_store::db::{open_configured, StoreConfig};
use peoplex_store::repo::SqliteRepo;
use peoplex_store::seed::seed_reference_sites;
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct AddPersonArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub site_id: i64,

    #[arg(long, default_value = "")]
    pub notes: String,
}

/// Open the store and bring its schema up to date
pub fn open_migrated(config: &StoreConfig) -> Result<Connection, Box<dyn std::error::Error>> {
    let mut conn = open_configured(config)?;
    peoplex_store::migrations::apply_migrations(&mut conn)?;
    Ok(conn)
}

pub fn execute_migrate(config: &StoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    open_migrated(config)?;
    println!("✓ Migrated {}", config.path.display());
    Ok(())
}

pub fn execute_seed_sites(config: &StoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = open_migrated(config)?;
    seed_reference_sites(&mut conn)?;

    for site in SqliteRepo::list_sites(&conn)? {
        println!(
            "site {}\t{}\tobservatory {}",
            site.id, site.name, site.observatory_id
        );
    }
    Ok(())
}

pub fn execute_add_person(
    args: AddPersonArgs,
    config: &StoreConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_migrated(config)?;
    let person = NewPerson::new(args.name, args.site_id, args.notes);
    let id = SqliteRepo::insert_person(&conn, &person)?;
    println!("✓ Added person {}", id);
    Ok(())
}

pub fn execute_delete_observatory(
    id: i64,
    config: &StoreConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_migrated(config)?;
    if !SqliteRepo::delete_observatory(&conn, id)? {
        return Err(format!("observatory {} not found", id).into());
    }
    println!("✓ Deleted observatory {}", id);
    Ok(())
}

pub fn execute_delete_site(id: i64, config: &StoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_migrated(config)?;
    if !SqliteRepo::delete_site(&conn, id)? {
        return Err(format!("site {} not found", id).into());
    }
    println!("✓ Deleted site {}", id);
    Ok(())
}
