//! PeopleX Store - SQLite persistence and the store handle
//!
//! Provides:
//! - Connection configuration (foreign keys, WAL, busy timeout)
//! - Embedded, checksummed SQL migrations
//! - Repository functions for Observatory / Site / Person rows
//! - `StoreHandle`: the query primitives the fetch strategies are built on,
//!   with per-handle fetch accounting
//! - Reference observatory and site fixtures

pub mod db;
pub mod errors;
pub mod migrations;
pub mod query;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use query::{PersonColumns, PersonQuery, StoreHandle};
