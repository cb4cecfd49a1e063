//! PeopleX CLI
//!
//! Command-line interface for inspecting the fetch strategies

use clap::{Parser, Subcommand, ValueEnum};
use peoplex_core::logging_facility::{init, Profile};
use std::time::Duration;

use peoplex_store::db::{StoreConfig, DEFAULT_BUSY_TIMEOUT, DEFAULT_DB_PATH};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "peoplex")]
#[command(about = "PeopleX - compare relational fetch strategies", long_about = None)]
struct Cli {
    /// Path to the SQLite database
    #[arg(long, global = true, env = "PEOPLEX_DB", default_value = DEFAULT_DB_PATH)]
    db: String,

    /// Milliseconds to wait on a locked database before failing
    #[arg(long, global = true, default_value_t = DEFAULT_BUSY_TIMEOUT.as_millis() as u64)]
    busy_timeout_ms: u64,

    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply database migrations
    Migrate,
    /// Create the reference observatories and sites
    SeedSites,
    /// Insert one person at an existing site
    AddPerson(commands::admin::AddPersonArgs),
    /// Delete an observatory with its sites and their people
    DeleteObservatory { id: i64 },
    /// Delete a site with its people
    DeleteSite { id: i64 },
    /// List people using one fetch strategy
    List(commands::list::ListArgs),
    /// Run every fetch strategy and compare their costs
    Compare(commands::list::CompareArgs),
    /// Describe the available fetch strategies
    Strategies,
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Text => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let config =
        StoreConfig::new(&cli.db).with_busy_timeout(Duration::from_millis(cli.busy_timeout_ms));
    let result = match cli.command {
        Commands::Migrate => commands::admin::execute_migrate(&config),
        Commands::SeedSites => commands::admin::execute_seed_sites(&config),
        Commands::AddPerson(args) => commands::admin::execute_add_person(args, &config),
        Commands::DeleteObservatory { id } => {
            commands::admin::execute_delete_observatory(id, &config)
        }
        Commands::DeleteSite { id } => commands::admin::execute_delete_site(id, &config),
        Commands::List(args) => commands::list::execute_list(args, &config),
        Commands::Compare(args) => commands::list::execute_compare(args, &config),
        Commands::Strategies => commands::list::execute_strategies(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
