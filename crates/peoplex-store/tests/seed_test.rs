// Integration tests for reference site seeding

use peoplex_store::repo::SqliteRepo;
use peoplex_store::seed::{seed_reference_sites, CHARLOTTESVILLE, GREEN_BANK, NRAO, SOCORRO};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    let mut conn = peoplex_store::db::open_in_memory().unwrap();
    peoplex_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

#[test]
fn test_seed_creates_reference_rows() {
    let mut conn = setup_test_db();

    let sites = seed_reference_sites(&mut conn).unwrap();

    assert_eq!(SqliteRepo::count_observatories(&conn).unwrap(), 2);
    assert_eq!(SqliteRepo::count_sites(&conn).unwrap(), 3);

    let green_bank = SqliteRepo::get_site(&conn, sites.green_bank).unwrap().unwrap();
    assert_eq!(green_bank.name, GREEN_BANK);
    assert_eq!(green_bank.observatory_id, sites.green_bank_observatory);

    let nrao = SqliteRepo::get_observatory(&conn, sites.nrao).unwrap().unwrap();
    assert_eq!(nrao.name, NRAO);
    for site_id in [sites.socorro, sites.charlottesville] {
        let site = SqliteRepo::get_site(&conn, site_id).unwrap().unwrap();
        assert_eq!(site.observatory_id, sites.nrao);
        assert!(site.name == SOCORRO || site.name == CHARLOTTESVILLE);
    }
}

#[test]
fn test_seed_is_idempotent() {
    let mut conn = setup_test_db();

    let first = seed_reference_sites(&mut conn).unwrap();
    let second = seed_reference_sites(&mut conn).unwrap();

    assert_eq!(first, second);
    assert_eq!(SqliteRepo::count_sites(&conn).unwrap(), 3);
}
