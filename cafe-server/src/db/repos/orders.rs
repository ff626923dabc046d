//! Order repository
//!
//! - create: parameterized INSERT inside a transaction, returns the new id
//! - list: every row, in whatever order MySQL returns them

use serde::Serialize;
use sqlx::mysql::MySqlConnection;
use sqlx::{Connection, FromRow};
use utoipa::ToSchema;

use crate::db::provider::{ConnectionFailure, ConnectionProvider};
use crate::models::NewOrder;

/// Message shown to HTTP callers when no connection could be opened.
pub const CONNECTION_FAILURE_MESSAGE: &str = "could not connect to the database";

/// Database-assigned order id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct OrderId(pub i32);

/// Order record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct Order {
    #[schema(value_type = i32, example = 1)]
    pub id: OrderId,
    #[schema(example = "Latte")]
    pub item: String,
    pub quantity: i32,
}

/// Repository error type
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Connection(#[from] ConnectionFailure),

    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

impl RepoError {
    /// Text safe to return in an HTTP error body.
    ///
    /// Query failures carry MySQL's own message through unchanged.
    pub fn client_message(&self) -> String {
        match self {
            Self::Connection(_) => CONNECTION_FAILURE_MESSAGE.to_string(),
            Self::Query(sqlx::Error::Database(e)) => e.message().to_string(),
            Self::Query(e) => e.to_string(),
        }
    }
}

/// Order repository
pub struct OrderRepo<'a> {
    provider: &'a ConnectionProvider,
}

impl<'a> OrderRepo<'a> {
    pub fn new(provider: &'a ConnectionProvider) -> Self {
        Self { provider }
    }

    /// Insert one order and return the id MySQL assigned to it.
    pub async fn create(&self, order: &NewOrder) -> Result<OrderId, RepoError> {
        let mut conn = self.provider.acquire().await?;
        let result = insert(&mut conn, order).await;
        conn.release().await;

        let id = result?;
        tracing::debug!(id = id.0, item = %order.item, "Order created");
        Ok(id)
    }

    /// Fetch every order. No ordering is imposed.
    pub async fn list_all(&self) -> Result<Vec<Order>, RepoError> {
        let mut conn = self.provider.acquire().await?;
        let result = sqlx::query_as::<_, Order>("SELECT id, item, quantity FROM orders")
            .fetch_all(&mut *conn)
            .await;
        conn.release().await;

        let orders = result?;
        tracing::debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }
}

async fn insert(conn: &mut MySqlConnection, order: &NewOrder) -> Result<OrderId, RepoError> {
    let mut tx = conn.begin().await?;

    let done = sqlx::query("INSERT INTO orders (item, quantity) VALUES (?, ?)")
        .bind(&order.item)
        .bind(order.quantity)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    // The column is INT, so MySQL cannot hand back anything wider.
    let id = i32::try_from(done.last_insert_id())
        .map_err(|e| RepoError::Query(sqlx::Error::Decode(Box::new(e))))?;
    Ok(OrderId(id))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::DbConfig;

    fn unreachable_provider() -> ConnectionProvider {
        ConnectionProvider::new(DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            connect_timeout: Some(Duration::from_secs(5)),
            ..DbConfig::default()
        })
    }

    #[test]
    fn order_serializes_with_plain_fields() {
        let order = Order {
            id: OrderId(7),
            item: "Latte".into(),
            quantity: 2,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "item": "Latte", "quantity": 2}));
    }

    #[test]
    fn query_errors_pass_message_through() {
        let err = RepoError::Query(sqlx::Error::RowNotFound);
        assert_eq!(err.client_message(), sqlx::Error::RowNotFound.to_string());
    }

    #[tokio::test]
    async fn create_without_database_is_connection_error() {
        let provider = unreachable_provider();
        let order = NewOrder {
            item: "Latte".into(),
            quantity: 2,
        };

        let err = OrderRepo::new(&provider).create(&order).await.unwrap_err();
        assert!(matches!(err, RepoError::Connection(_)));
        assert_eq!(err.client_message(), CONNECTION_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn list_without_database_is_connection_error() {
        let provider = unreachable_provider();
        let err = OrderRepo::new(&provider).list_all().await.unwrap_err();
        assert!(matches!(err, RepoError::Connection(_)));
    }
}
