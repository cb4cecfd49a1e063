pub mod admin;
pub mod list;
