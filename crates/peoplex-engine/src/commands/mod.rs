pub mod compare;
pub mod engine_query;
pub mod get_people;
pub mod strategy;
