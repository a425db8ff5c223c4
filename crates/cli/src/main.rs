mod table;
mod watch;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use filter_engine::{apply_filter, refresh, FilterCriteria};
use roster_data::RosterIndex;
use std::path::PathBuf;
use std::time::Instant;
use table::TableView;

/// Roster - live filtering of the F1 driver roster
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Filter the crawled F1 driver roster by name, nationality and team", long_about = None)]
struct Cli {
    /// Path to the crawled drivers.json
    #[arg(short, long, env = "ROSTER_DATA_FILE", default_value = "data/drivers.json")]
    data_file: PathBuf,

    /// Year ages are computed against when the roster lacks them
    #[arg(long, env = "ROSTER_REFERENCE_YEAR", default_value = "2025")]
    reference_year: u16,

    #[command(subcommand)]
    command: Commands,
}

/// The three filter inputs
#[derive(Args, Clone, Default)]
struct CriteriaArgs {
    /// Free-text search on the driver name
    #[arg(short, long, default_value = "")]
    query: String,

    /// Nationality filter (substring, case-insensitive)
    #[arg(short, long, default_value = "")]
    nationality: String,

    /// Team filter (substring, case-insensitive)
    #[arg(short, long, default_value = "")]
    team: String,
}

impl From<CriteriaArgs> for FilterCriteria {
    fn from(args: CriteriaArgs) -> Self {
        FilterCriteria::new(args.query, args.nationality, args.team)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the roster table with the given filters applied
    Filter {
        #[command(flatten)]
        criteria: CriteriaArgs,
    },

    /// Print matching drivers as JSON ({"count", "drivers"})
    Query {
        #[command(flatten)]
        criteria: CriteriaArgs,
    },

    /// Re-filter interactively from stdin (q=..., nat=..., team=..., clear, quit)
    Watch {
        #[command(flatten)]
        criteria: CriteriaArgs,
    },

    /// Show details for one driver
    Driver {
        /// Exact display name, e.g. "Lewis Hamilton"
        #[arg(long)]
        name: String,
    },

    /// List the nationalities and teams available as filters
    Options,

    /// Show aggregate counts by nationality, team and birth decade
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let index = RosterIndex::load_from_file(&cli.data_file, cli.reference_year)
        .with_context(|| format!("Failed to load roster from {}", cli.data_file.display()))?;
    tracing::debug!("Loaded roster in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Filter { criteria } => handle_filter(&index, criteria.into()),
        Commands::Query { criteria } => handle_query(&index, criteria.into())?,
        Commands::Watch { criteria } => watch::run(&index, criteria.into()).await?,
        Commands::Driver { name } => handle_driver(&index, &name)?,
        Commands::Options => handle_options(&index),
        Commands::Stats => handle_stats(&index),
    }

    Ok(())
}

/// Handle the 'filter' command
fn handle_filter(index: &RosterIndex, criteria: FilterCriteria) {
    let mut table = TableView::new(index);
    table.set_criteria(criteria);
    refresh(&mut table);
    table.print();
}

/// Handle the 'query' command
fn handle_query(index: &RosterIndex, criteria: FilterCriteria) -> Result<()> {
    let body = query_body(index, criteria);
    println!(
        "{}",
        serde_json::to_string_pretty(&body).context("Failed to serialize query result")?
    );
    Ok(())
}

/// `{"count", "drivers"}` for the sanitized criteria, drivers in roster order
fn query_body(index: &RosterIndex, criteria: FilterCriteria) -> serde_json::Value {
    let result = apply_filter(index.records(), &criteria.sanitized());
    let drivers: Vec<_> = result
        .visible_rows()
        .map(|(row, _)| &index.drivers()[row])
        .collect();

    serde_json::json!({
        "count": result.visible_count,
        "drivers": drivers,
    })
}

/// Handle the 'driver' command
fn handle_driver(index: &RosterIndex, name: &str) -> Result<()> {
    let driver = index.find_driver(name)?;

    println!("{}", driver.name.bold().blue());
    println!("{}Born: {} (age {})", "• ".green(), driver.dob, driver.age_display());
    println!("{}Birthplace: {}", "• ".green(), driver.birthplace);
    println!("{}Nationality: {}", "• ".green(), driver.nationality);
    println!("{}Team: {}", "• ".green(), driver.team);
    println!("{}Number: {}", "• ".green(), driver.number);
    println!("{}Championships: {}", "• ".cyan(), driver.titles);
    println!("{}Wins: {}", "• ".cyan(), driver.wins);
    println!("{}Podiums: {}", "• ".cyan(), driver.podiums);
    println!("{}Poles: {}", "• ".cyan(), driver.poles);
    if !driver.wiki_url.is_empty() {
        println!("{}", driver.wiki_url.dimmed());
    }
    Ok(())
}

/// Handle the 'options' command
fn handle_options(index: &RosterIndex) {
    println!("{}", "Nationalities:".bold().blue());
    for nationality in index.nationalities() {
        println!("  - {}", nationality);
    }
    println!("{}", "Teams:".bold().blue());
    for team in index.teams() {
        println!("  - {}", team);
    }
}

/// Handle the 'stats' command
fn handle_stats(index: &RosterIndex) {
    let stats = index.stats();

    println!("{}", format!("Drivers: {}", stats.total).bold().blue());
    println!("By nationality:");
    for (nationality, count) in &stats.by_nationality {
        println!("  - {}: {}", nationality, count);
    }
    println!("By team:");
    for (team, count) in &stats.by_team {
        println!("  - {}: {}", team, count);
    }
    println!("By birth decade:");
    for (decade, count) in &stats.by_decade {
        println!("  - {}: {}", decade, count);
    }
}
