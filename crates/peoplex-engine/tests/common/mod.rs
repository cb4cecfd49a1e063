use peoplex_core::model::NewPerson;
use peoplex_store::repo::{SqliteRepo, DEFAULT_BATCH_SIZE};
use peoplex_store::seed::{seed_reference_sites, ReferenceSites};
use rusqlite::Connection;

/// Create a migrated in-memory store
#[allow(dead_code)]
pub fn setup_test_db() -> Connection {
    let mut conn = peoplex_store::db::open_in_memory().unwrap();
    peoplex_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

/// Create a migrated store with the reference sites and the given people
///
/// `people` pairs a name with an index into `ReferenceSites::site_ids()`.
#[allow(dead_code)]
pub fn setup_populated_db(people: &[(&str, usize)]) -> (Connection, ReferenceSites) {
    let mut conn = setup_test_db();
    let sites = seed_reference_sites(&mut conn).unwrap();
    let site_ids = sites.site_ids();

    let new_people: Vec<NewPerson> = people
        .iter()
        .map(|(name, site)| NewPerson::new(*name, site_ids[*site % site_ids.len()], "notes"))
        .collect();
    SqliteRepo::insert_people_batched(&mut conn, &new_people, DEFAULT_BATCH_SIZE).unwrap();

    (conn, sites)
}
