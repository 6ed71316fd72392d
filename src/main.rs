use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::{Parser, Subcommand};

use cityloc_boundary::Location as JsonLocation;
use cityloc_core::{gateways::summary::SummaryGateway, repositories::LocationRepo, usecases};
use cityloc_db_sqlite::Connections;

mod config;
mod gateways;

use config::Config;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Look up a single city and print the result
    Lookup { city: String },
    /// Print all stored locations
    List,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    cityloc_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(connections, cfg),
        Command::Lookup { city } => lookup(&connections, &cfg, &city),
        Command::List => list(&connections),
    }
}

fn serve(connections: Connections, cfg: Config) -> Result<()> {
    let geocoding = Arc::new(gateways::geocoding_gateway(&cfg.geocoding)?);
    let summary = gateways::summary_gateway(&cfg.summary)
        .map(|gw| Arc::new(gw) as Arc<dyn SummaryGateway + Send + Sync>);
    let web_cfg = cityloc_webserver::Cfg {
        history_capacity: cfg.history.capacity,
    };
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(cityloc_webserver::run(
        connections,
        cfg.webserver.enable_cors,
        web_cfg,
        geocoding,
        summary,
        env!("CARGO_PKG_VERSION"),
    ));
    Ok(())
}

fn lookup(connections: &Connections, cfg: &Config, city: &str) -> Result<()> {
    let geocoding = gateways::geocoding_gateway(&cfg.geocoding)?;
    let summary = gateways::summary_gateway(&cfg.summary);
    let location = usecases::lookup_location(
        connections,
        &geocoding,
        summary.as_ref().map(|gw| gw as &dyn SummaryGateway),
        city,
    )?;
    if let Err(err) = remember_query(connections, cfg.history.capacity, &location.city) {
        log::warn!("Failed to remember query '{}': {err}", location.city);
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonLocation::from(location))?
    );
    Ok(())
}

fn remember_query(connections: &Connections, capacity: usize, city: &str) -> Result<()> {
    let db = connections.exclusive()?;
    usecases::remember_query(&db, capacity, city)?;
    Ok(())
}

fn list(connections: &Connections) -> Result<()> {
    let locations: Vec<_> = connections
        .all_locations()?
        .into_iter()
        .map(JsonLocation::from)
        .collect();
    log::info!("{} location(s) in database", locations.len());
    println!("{}", serde_json::to_string_pretty(&locations)?);
    Ok(())
}
