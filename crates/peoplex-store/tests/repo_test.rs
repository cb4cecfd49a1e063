// Integration tests for the SQLite repository

use peoplex_core::model::NewPerson;
use peoplex_core::ExErrorKind;
use peoplex_store::repo::SqliteRepo;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    let mut conn = peoplex_store::db::open_in_memory().unwrap();
    peoplex_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

#[test]
fn test_insert_and_get_round_trip() {
    let conn = setup_test_db();

    let obs_id = SqliteRepo::insert_observatory(&conn, "Green Bank Observatory").unwrap();
    let site_id = SqliteRepo::insert_site(&conn, "Green Bank", obs_id).unwrap();
    let person_id =
        SqliteRepo::insert_person(&conn, &NewPerson::new("Ada", site_id, "notes")).unwrap();

    let obs = SqliteRepo::get_observatory(&conn, obs_id).unwrap().unwrap();
    let site = SqliteRepo::get_site(&conn, site_id).unwrap().unwrap();
    let person = SqliteRepo::get_person(&conn, person_id).unwrap().unwrap();

    assert_eq!(obs.name, "Green Bank Observatory");
    assert_eq!(site.observatory_id, obs_id);
    assert_eq!(person.site_id, site_id);
    assert_eq!(person.notes.as_deref(), Some("notes"));
}

#[test]
fn test_get_missing_returns_none() {
    let conn = setup_test_db();

    assert!(SqliteRepo::get_observatory(&conn, 1).unwrap().is_none());
    assert!(SqliteRepo::get_site(&conn, 1).unwrap().is_none());
    assert!(SqliteRepo::get_person(&conn, 1).unwrap().is_none());
}

#[test]
fn test_person_with_missing_site_is_constraint_violation() {
    // Given: An empty store
    let conn = setup_test_db();

    // When: A person references a site that does not exist
    let err = SqliteRepo::insert_person(&conn, &NewPerson::new("Ada", 404, "")).unwrap_err();

    // Then: Referential integrity rejects the row
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(SqliteRepo::count_people(&conn).unwrap(), 0);
}

#[test]
fn test_site_with_missing_observatory_is_constraint_violation() {
    let conn = setup_test_db();

    let err = SqliteRepo::insert_site(&conn, "Nowhere", 404).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
}

#[test]
fn test_delete_observatory_cascades() {
    // Given: Observatory O with Site S with Person P
    let conn = setup_test_db();
    let obs_id = SqliteRepo::insert_observatory(&conn, "O").unwrap();
    let site_id = SqliteRepo::insert_site(&conn, "S", obs_id).unwrap();
    let person_id = SqliteRepo::insert_person(&conn, &NewPerson::new("P", site_id, "")).unwrap();

    // When: O is deleted
    assert!(SqliteRepo::delete_observatory(&conn, obs_id).unwrap());

    // Then: S and P are gone too
    assert!(SqliteRepo::get_site(&conn, site_id).unwrap().is_none());
    assert!(SqliteRepo::get_person(&conn, person_id).unwrap().is_none());
    assert_eq!(SqliteRepo::count_sites(&conn).unwrap(), 0);
}

#[test]
fn test_delete_site_keeps_observatory() {
    let conn = setup_test_db();
    let obs_id = SqliteRepo::insert_observatory(&conn, "O").unwrap();
    let site_a = SqliteRepo::insert_site(&conn, "A", obs_id).unwrap();
    let site_b = SqliteRepo::insert_site(&conn, "B", obs_id).unwrap();
    SqliteRepo::insert_person(&conn, &NewPerson::new("at A", site_a, "")).unwrap();
    SqliteRepo::insert_person(&conn, &NewPerson::new("at B", site_b, "")).unwrap();

    assert!(SqliteRepo::delete_site(&conn, site_a).unwrap());

    assert_eq!(SqliteRepo::count_observatories(&conn).unwrap(), 1);
    assert_eq!(SqliteRepo::count_sites(&conn).unwrap(), 1);
    assert_eq!(SqliteRepo::count_people(&conn).unwrap(), 1);
}

#[test]
fn test_delete_missing_returns_false() {
    let conn = setup_test_db();

    assert!(!SqliteRepo::delete_observatory(&conn, 7).unwrap());
    assert!(!SqliteRepo::delete_site(&conn, 7).unwrap());
    assert!(!SqliteRepo::delete_person(&conn, 7).unwrap());
}

#[test]
fn test_insert_people_batched_counts_rows() {
    let mut conn = setup_test_db();
    let obs_id = SqliteRepo::insert_observatory(&conn, "O").unwrap();
    let site_id = SqliteRepo::insert_site(&conn, "S", obs_id).unwrap();
    let people: Vec<NewPerson> = (0..25)
        .map(|i| NewPerson::new(format!("person {}", i), site_id, "x"))
        .collect();

    let inserted = SqliteRepo::insert_people_batched(&mut conn, &people, 10).unwrap();

    assert_eq!(inserted, 25);
    assert_eq!(SqliteRepo::count_people(&conn).unwrap(), 25);
}

#[test]
fn test_insert_people_batched_rejects_zero_batch() {
    let mut conn = setup_test_db();

    let err = SqliteRepo::insert_people_batched(&mut conn, &[], 0).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}

#[test]
fn test_failed_batch_keeps_earlier_batches() {
    // Given: Two full batches followed by one containing a bad site id
    let mut conn = setup_test_db();
    let obs_id = SqliteRepo::insert_observatory(&conn, "O").unwrap();
    let site_id = SqliteRepo::insert_site(&conn, "S", obs_id).unwrap();
    let mut people: Vec<NewPerson> = (0..4)
        .map(|i| NewPerson::new(format!("ok {}", i), site_id, ""))
        .collect();
    people.push(NewPerson::new("bad", site_id + 100, ""));

    // When: Inserted two at a time
    let err = SqliteRepo::insert_people_batched(&mut conn, &people, 2).unwrap_err();

    // Then: The committed batches survive
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(SqliteRepo::count_people(&conn).unwrap(), 4);
}
