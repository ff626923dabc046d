//! cafe-server: HTTP API for coffee-shop orders
//!
//! Records and lists orders stored in a single MySQL table. Each request
//! opens its own connection through [`db::ConnectionProvider`] and releases
//! it before the response is written.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DbConfig};
pub use db::{ensure_schema, ConnectionProvider, OrderRepo, RepoError, SchemaError};
pub use http::{build_router, run_server, ServerConfig};
