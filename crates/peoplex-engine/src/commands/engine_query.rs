//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for callers that want
//! logged, timed access to the fetch strategies. It takes a shared connection
//! and never writes.

#![allow(clippy::result_large_err)]

use std::time::Instant;

use peoplex_core::{log_op_end, log_op_error, log_op_start};
use peoplex_store::errors::Result;
use peoplex_store::{PersonQuery, StoreHandle};
use rusqlite::Connection;
use serde::Serialize;

use crate::commands::compare::{compare_strategies, StrategyReport};
use crate::commands::strategy::{list_people, FetchStrategy, PeopleListing};

/// Read-only queries supported by the engine.
#[derive(Debug, Clone)]
pub enum EngineQuery {
    /// Run one strategy.
    ListPeople {
        strategy: FetchStrategy,
        query: PersonQuery,
    },
    /// Run every strategy and report their costs.
    CompareStrategies { query: PersonQuery },
}

/// Output of a `ListPeople` query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyRun {
    pub strategy: FetchStrategy,
    pub fetches: u64,
    pub duration_ms: u64,
    pub listing: PeopleListing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineQueryResult {
    People(StrategyRun),
    Comparison(StrategyReport),
}

/// Apply a read-only engine query.
///
/// # Errors
///
/// Store failures propagate unchanged; nothing is retried.
pub fn apply_engine_query(query: EngineQuery, conn: &Connection) -> Result<EngineQueryResult> {
    match query {
        EngineQuery::ListPeople { strategy, query } => {
            log_op_start!("list_people", strategy = strategy.as_str());
            let start = Instant::now();
            let store = StoreHandle::new(conn);

            let result = list_people(&store, &query, strategy);

            let elapsed = start.elapsed().as_millis() as u64;
            match result {
                Ok(listing) => {
                    log_op_end!(
                        "list_people",
                        duration_ms = elapsed,
                        strategy = strategy.as_str(),
                        rows = listing.len(),
                        fetches = store.fetch_count()
                    );
                    Ok(EngineQueryResult::People(StrategyRun {
                        strategy,
                        fetches: store.fetch_count(),
                        duration_ms: elapsed,
                        listing,
                    }))
                }
                Err(e) => {
                    log_op_error!(
                        "list_people",
                        e.clone(),
                        duration_ms = elapsed,
                        strategy = strategy.as_str()
                    );
                    Err(e)
                }
            }
        }

        EngineQuery::CompareStrategies { query } => {
            log_op_start!("compare_strategies");
            let start = Instant::now();

            let result = compare_strategies(conn, &query);

            let elapsed = start.elapsed().as_millis() as u64;
            match result {
                Ok(report) => {
                    log_op_end!(
                        "compare_strategies",
                        duration_ms = elapsed,
                        consistent = report.consistent
                    );
                    Ok(EngineQueryResult::Comparison(report))
                }
                Err(e) => {
                    log_op_error!("compare_strategies", e.clone(), duration_ms = elapsed);
                    Err(e)
                }
            }
        }
    }
}
