//! HTTP server command
//!
//! Bootstraps the schema, then serves the order API until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use cafe_server::{ensure_schema, run_server, ConnectionProvider, ServerConfig};

use crate::config::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "CAFE_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Refuse to start if the schema bootstrap fails
    #[arg(long)]
    pub require_schema: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db.into_config()?;
    tracing::info!(?db_config, "Starting cafe server on {}", args.bind);

    let provider = ConnectionProvider::new(db_config);

    // Already logged inside ensure_schema; only fatal when asked to be.
    if let Err(e) = ensure_schema(&provider).await {
        if args.require_schema {
            return Err(e).context("Schema bootstrap failed");
        }
        tracing::warn!("Continuing without a verified schema");
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(provider, config).await.context("Server error")?;

    Ok(())
}
