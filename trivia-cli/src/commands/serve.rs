//! HTTP server command for the trivia API

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool_with_options, migrations};
use trivia_server::{run_server, AppState, PgStore};

use crate::config::TriviaConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "TRIVIA_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections (default: 5)
    #[arg(long)]
    pub max_connections: Option<u32>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = TriviaConfig::load()?;
    let database_url = config.database_url(args.database_url)?;
    let server_config = config.server_config(args.bind);

    tracing::info!("Starting trivia server on {}", server_config.bind_addr);

    let pool = create_pool_with_options(&database_url, config.max_connections(args.max_connections))
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to create trivia tables")?;

    // Blocks until shutdown
    run_server(AppState::new(PgStore::new(pool)), server_config)
        .await
        .context("Server error")?;

    Ok(())
}
