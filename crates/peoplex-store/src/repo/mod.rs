//! Repository layer for Observatory / Site / Person rows

pub mod sqlite_repo;

pub use sqlite_repo::{SqliteRepo, DEFAULT_BATCH_SIZE};
