//! PeopleX Core - entity types, error facility and logging facility
//!
//! This crate provides the foundations shared by the store and engine layers:
//! - Observatory / Site / Person entity definitions
//! - Structured error facility (`ExError`, `ExErrorKind`) and the domain
//!   error taxonomy (`PeopleXError`)
//! - Canonical logging facility with structured operation macros

pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-exported for the logging macros
pub use peoplex_core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, PeopleXError, Result};
pub use model::{NewPerson, Observatory, Person, PersonRow, Site};
