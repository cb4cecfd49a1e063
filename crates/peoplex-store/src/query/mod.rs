//! Query primitives over the Person collection
//!
//! `PersonQuery` describes which people to fetch; `StoreHandle` executes the
//! four primitives (full iteration, column restriction, eager load by path,
//! flat projection) plus fetch-on-demand accessors for related rows.

mod filter;
mod handle;

pub use filter::PersonQuery;
pub use handle::{PersonColumns, StoreHandle};
