//! Side-by-side comparison of every fetch strategy

#![allow(clippy::result_large_err)]

use std::time::Instant;

use peoplex_store::errors::Result;
use peoplex_store::{PersonQuery, StoreHandle};
use rusqlite::Connection;
use serde::Serialize;

use crate::commands::strategy::{list_people, FetchStrategy};

/// Cost of one strategy run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyMeasurement {
    pub strategy: FetchStrategy,
    pub rows: usize,
    pub fetches: u64,
    pub duration_ms: u64,
}

/// Measurements for every strategy over the same query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyReport {
    pub measurements: Vec<StrategyMeasurement>,
    /// True when every strategy produced the same names in the same order
    pub consistent: bool,
}

impl StrategyReport {
    pub fn measurement(&self, strategy: FetchStrategy) -> Option<&StrategyMeasurement> {
        self.measurements.iter().find(|m| m.strategy == strategy)
    }
}

/// Run every strategy once, each on a fresh fetch counter
pub fn compare_strategies(conn: &Connection, query: &PersonQuery) -> Result<StrategyReport> {
    let mut measurements = Vec::with_capacity(FetchStrategy::ALL.len());
    let mut baseline = None;
    let mut consistent = true;

    for strategy in FetchStrategy::ALL {
        let store = StoreHandle::new(conn);
        let start = Instant::now();
        let listing = list_people(&store, query, strategy)?;
        let duration_ms = start.elapsed().as_millis() as u64;

        let labels = listing.labels();
        match &baseline {
            None => baseline = Some(labels),
            Some(expected) => consistent &= *expected == labels,
        }

        measurements.push(StrategyMeasurement {
            strategy,
            rows: listing.len(),
            fetches: store.fetch_count(),
            duration_ms,
        });
    }

    Ok(StrategyReport {
        measurements,
        consistent,
    })
}
