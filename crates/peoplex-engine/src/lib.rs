//! PeopleX Engine - fetch strategies over the store
//!
//! Five ways to list (person, observatory, site) that agree on content and
//! order but differ in how many fetches they issue and what each fetch loads.

pub mod commands;

pub use commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};
pub use commands::compare::{compare_strategies, StrategyMeasurement, StrategyReport};
pub use commands::strategy::{
    list_people, strategy_catalog, FetchStrategy, PeopleListing, StrategyInfo,
};
