//! Core types shared across PeopleX facilities
//!
//! - **Schema constants**: canonical field keys and event names used by the
//!   logging and error facilities

pub mod schema;
