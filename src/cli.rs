use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use activitydb_db_sqlite::{self as sqlite, Connections};

use crate::{config::Config, import};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Import activities from a JSON file
    Import {
        /// JSON array of activities
        json_file: PathBuf,
    },
}

pub async fn run() -> Result<()> {
    let Args {
        config,
        db_url,
        enable_cors,
        command,
    } = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if enable_cors {
        cfg.webserver.enable_cors = true;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let web_cfg = activitydb_webserver::Cfg {
                enable_cors: cfg.webserver.enable_cors,
                frontend_dir: cfg.webserver.frontend_dir,
            };
            activitydb_webserver::run(connections, web_cfg, env!("CARGO_PKG_VERSION")).await;
        }
        Command::Import { json_file } => {
            let count = import::import_activities_from_file(&connections, &json_file)?;
            log::info!("Imported {count} activities from {}", json_file.display());
        }
    }
    Ok(())
}
