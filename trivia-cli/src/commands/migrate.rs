//! Create the trivia tables without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool, migrations};

use crate::config::TriviaConfig;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = TriviaConfig::load()?;
    let database_url = config.database_url(args.database_url)?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    migrations::run(&pool)
        .await
        .context("Failed to create trivia tables")?;

    println!("Trivia tables ready");
    Ok(())
}
