//! Create the database and orders table, then exit

use anyhow::{Context, Result};
use clap::Parser;

use cafe_server::{ensure_schema, ConnectionProvider};

use crate::config::DbArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let db_config = args.db.into_config()?;
    let database = db_config.database.clone();
    let provider = ConnectionProvider::new(db_config);

    ensure_schema(&provider)
        .await
        .with_context(|| format!("Failed to initialize database '{database}'"))?;

    println!("Database '{database}' is ready");
    Ok(())
}
