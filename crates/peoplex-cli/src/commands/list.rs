//! Strategy listing and comparison commands
//!
//! Usage:
//!   peoplex list --strategy <NAME> [--site-id <ID>] [--observatory-id <ID>] [--limit <N>] [--json]
//!   peoplex compare [--site-id <ID>] [--observatory-id <ID>] [--limit <N>] [--json]
//!   peoplex strategies

use clap::Args;
use peoplex_engine::{
    apply_engine_query, strategy_catalog, EngineQuery, EngineQueryResult, FetchStrategy,
};
use peoplex_store::db::StoreConfig;
use peoplex_store::PersonQuery;

use crate::commands::admin::open_migrated;

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Only people at this site
    #[arg(long)]
    pub site_id: Option<i64>,

    /// Only people at sites of this observatory
    #[arg(long)]
    pub observatory_id: Option<i64>,

    /// Keep at most this many people
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl FilterArgs {
    fn to_query(&self) -> PersonQuery {
        let mut query = PersonQuery::all();
        if let Some(site_id) = self.site_id {
            query = query.site(site_id);
        }
        if let Some(observatory_id) = self.observatory_id {
            query = query.observatory(observatory_id);
        }
        if let Some(limit) = self.limit {
            query = query.limit(limit);
        }
        query
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// One of: naive, select_related_only, select_related, qs_only, values
    #[arg(long)]
    pub strategy: String,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn execute_list(args: ListArgs, config: &StoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    let strategy: FetchStrategy = args.strategy.parse()?;
    let conn = open_migrated(config)?;

    let query = EngineQuery::ListPeople {
        strategy,
        query: args.filter.to_query(),
    };
    let result = apply_engine_query(query, &conn)?;

    if args.filter.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if let EngineQueryResult::People(run) = result {
        for (person, observatory, site) in run.listing.labels() {
            println!("{}\t{}\t{}", person, observatory, site);
        }
        println!(
            "{}: {} rows, {} fetches, {} ms",
            run.strategy,
            run.listing.len(),
            run.fetches,
            run.duration_ms
        );
    }
    Ok(())
}

pub fn execute_compare(
    args: CompareArgs,
    config: &StoreConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_migrated(config)?;

    let query = EngineQuery::CompareStrategies {
        query: args.filter.to_query(),
    };
    let result = apply_engine_query(query, &conn)?;

    if args.filter.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if let EngineQueryResult::Comparison(report) = result {
        println!("{:<20} {:>8} {:>8} {:>8}", "strategy", "rows", "fetches", "ms");
        for m in &report.measurements {
            println!(
                "{:<20} {:>8} {:>8} {:>8}",
                m.strategy.as_str(),
                m.rows,
                m.fetches,
                m.duration_ms
            );
        }
        if report.consistent {
            println!("✓ All strategies returned the same people");
        } else {
            println!("✗ Strategies disagree on the result");
        }
    }
    Ok(())
}

pub fn execute_strategies() -> Result<(), Box<dyn std::error::Error>> {
    for info in strategy_catalog() {
        println!("{:<20} {}", info.name, info.title);
        println!("{:<20} {}", "", info.description);
    }
    Ok(())
}
