//! Connection provider
//!
//! Opens a fresh MySQL connection per operation. There is no
//! pool: callers hold a [`ScopedConnection`] for the length of one
//! statement (or transaction) and release it straight after.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::{Duration, Instant};

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

use crate::config::DbConfig;

/// Could not open a connection to the configured instance
#[derive(Debug, thiserror::Error)]
pub enum ConnectionFailure {
    #[error("could not connect to MySQL at {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: sqlx::Error,
    },

    #[error("timed out after {after:?} connecting to MySQL at {host}:{port}")]
    TimedOut {
        host: String,
        port: u16,
        after: Duration,
    },
}

/// Hands out connections built from one validated [`DbConfig`]
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    config: Arc<DbConfig>,
}

impl ConnectionProvider {
    pub fn new(config: DbConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Connect with the configured database selected.
    ///
    /// Failures are logged here and returned as a value; this never panics.
    pub async fn acquire(&self) -> Result<ScopedConnection, ConnectionFailure> {
        let options = self.server_options().database(&self.config.database);
        self.connect(options).await
    }

    /// Connect without selecting a database.
    ///
    /// Only the schema bootstrap needs this, since the database may not
    /// exist yet.
    pub async fn acquire_server(&self) -> Result<ScopedConnection, ConnectionFailure> {
        self.connect(self.server_options()).await
    }

    fn server_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .username(&self.config.user)
            .password(&self.config.password)
    }

    async fn connect(
        &self,
        options: MySqlConnectOptions,
    ) -> Result<ScopedConnection, ConnectionFailure> {
        let connecting = MySqlConnection::connect_with(&options);

        let result = match self.config.connect_timeout {
            Some(limit) => match tokio::time::timeout(limit, connecting).await {
                Ok(result) => result.map_err(|source| self.connect_failure(source)),
                Err(_) => Err(ConnectionFailure::TimedOut {
                    host: self.config.host.clone(),
                    port: self.config.port,
                    after: limit,
                }),
            },
            None => connecting
                .await
                .map_err(|source| self.connect_failure(source)),
        };

        match result {
            Ok(conn) => Ok(ScopedConnection {
                conn,
                acquired_at: Instant::now(),
            }),
            Err(e) => {
                tracing::error!(
                    host = %self.config.host,
                    port = self.config.port,
                    database = %self.config.database,
                    "Error connecting to MySQL: {}",
                    e
                );
                Err(e)
            }
        }
    }

    fn connect_failure(&self, source: sqlx::Error) -> ConnectionFailure {
        ConnectionFailure::Connect {
            host: self.config.host.clone(),
            port: self.config.port,
            source,
        }
    }
}

/// An open connection that must be handed back with [`release`].
///
/// Dropping the guard without releasing still closes the socket, only
/// without the graceful `COM_QUIT` exchange.
///
/// [`release`]: ScopedConnection::release
pub struct ScopedConnection {
    conn: MySqlConnection,
    acquired_at: Instant,
}

impl ScopedConnection {
    /// Close the connection. Close errors are logged, not returned.
    pub async fn release(self) {
        let held = self.acquired_at.elapsed();
        if let Err(e) = self.conn.close().await {
            tracing::warn!("Failed to close MySQL connection cleanly: {}", e);
        }
        tracing::debug!(held_ms = held.as_millis() as u64, "Released MySQL connection");
    }
}

impl Deref for ScopedConnection {
    type Target = MySqlConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for ScopedConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}
