use std::time::Duration;

use anyhow::{Context, Result};
use cafe_server::DbConfig;
use clap::Args;

/// Database connection flags shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// MySQL host
    #[arg(long, env = "CAFE_DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// MySQL port
    #[arg(long, env = "CAFE_DB_PORT", default_value_t = 3306)]
    pub db_port: u16,

    /// Database holding the orders table (created if missing)
    #[arg(long, env = "CAFE_DB_NAME", default_value = "cafe_db")]
    pub db_name: String,

    /// MySQL user
    #[arg(long, env = "CAFE_DB_USER", default_value = "root")]
    pub db_user: String,

    /// MySQL password
    #[arg(long, env = "CAFE_DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    /// Seconds to wait for a connection (0 waits forever)
    #[arg(long, env = "CAFE_DB_CONNECT_TIMEOUT", default_value_t = 10)]
    pub db_connect_timeout: u64,
}

impl DbArgs {
    /// Build and validate the database config. Nothing connects until this
    /// has passed.
    pub fn into_config(self) -> Result<DbConfig> {
        let config = DbConfig {
            host: self.db_host,
            port: self.db_port,
            database: self.db_name,
            user: self.db_user,
            password: self.db_password,
            connect_timeout: (self.db_connect_timeout > 0)
                .then(|| Duration::from_secs(self.db_connect_timeout)),
        };
        config.validate().context("Invalid database configuration")?;
        Ok(config)
    }
}
