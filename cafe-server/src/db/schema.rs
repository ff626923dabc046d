//! Schema bootstrap for the orders table
//!
//! Every statement is `IF NOT EXISTS`, so running this on every start is
//! safe. MySQL commits DDL implicitly; a failure part-way leaves whatever
//! the earlier steps created.

use sqlx::mysql::MySqlConnection;

use super::provider::{ConnectionFailure, ConnectionProvider};

const CREATE_ORDERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS orders (
        id INT AUTO_INCREMENT PRIMARY KEY,
        item VARCHAR(255) NOT NULL,
        quantity INT NOT NULL
    )
"#;

/// Schema bootstrap failure
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error(transparent)]
    Connection(#[from] ConnectionFailure),

    #[error("failed to {step}: {source}")]
    Statement {
        step: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Create the database and the `orders` table if they are missing.
///
/// The error is logged before it is returned; whether it is fatal is up to
/// the caller.
pub async fn ensure_schema(provider: &ConnectionProvider) -> Result<(), SchemaError> {
    let database = &provider.config().database;
    tracing::info!(%database, "Ensuring database schema...");

    let result = match provider.acquire_server().await {
        Ok(mut conn) => {
            let result = bootstrap(&mut conn, database).await;
            conn.release().await;
            result
        }
        Err(e) => Err(SchemaError::Connection(e)),
    };

    match &result {
        Ok(()) => tracing::info!(%database, "Database schema ready"),
        Err(e) => tracing::error!(%database, "Error initializing database: {}", e),
    }
    result
}

async fn bootstrap(conn: &mut MySqlConnection, database: &str) -> Result<(), SchemaError> {
    // `USE` is not preparable, so these go over the text protocol.
    let create_database = format!("CREATE DATABASE IF NOT EXISTS `{database}`");
    run(conn, "create database", &create_database).await?;

    let use_database = format!("USE `{database}`");
    run(conn, "select database", &use_database).await?;

    run(conn, "create orders table", CREATE_ORDERS_TABLE).await
}

async fn run(
    conn: &mut MySqlConnection,
    step: &'static str,
    sql: &str,
) -> Result<(), SchemaError> {
    sqlx::raw_sql(sql)
        .execute(&mut *conn)
        .await
        .map_err(|source| SchemaError::Statement { step, source })?;
    tracing::debug!(step, "Schema step complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::DbConfig;

    #[tokio::test]
    async fn unreachable_database_is_a_connection_error() {
        let provider = ConnectionProvider::new(DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            connect_timeout: Some(Duration::from_secs(5)),
            ..DbConfig::default()
        });

        let err = ensure_schema(&provider).await.unwrap_err();
        assert!(matches!(err, SchemaError::Connection(_)));
    }

    #[test]
    fn statement_error_names_the_step() {
        let err = SchemaError::Statement {
            step: "create orders table",
            source: sqlx::Error::PoolClosed,
        };
        assert!(err.to_string().starts_with("failed to create orders table"));
    }

    #[test]
    fn table_definition_matches_order_columns() {
        assert!(CREATE_ORDERS_TABLE.contains("IF NOT EXISTS orders"));
        assert!(CREATE_ORDERS_TABLE.contains("id INT AUTO_INCREMENT PRIMARY KEY"));
        assert!(CREATE_ORDERS_TABLE.contains("item VARCHAR(255) NOT NULL"));
        assert!(CREATE_ORDERS_TABLE.contains("quantity INT NOT NULL"));
    }
}
