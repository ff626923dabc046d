//! Database layer - connection provider, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - One connection per operation, no pool
//! - Every acquired connection goes through [`ScopedConnection::release`]
//! - Parameterized statements only; DDL identifiers come from validated config
//! - Failures become typed results at this boundary, never panics

pub mod provider;
pub mod repos;
pub mod schema;

pub use provider::{ConnectionFailure, ConnectionProvider, ScopedConnection};
pub use repos::{Order, OrderId, OrderRepo, RepoError};
pub use schema::{ensure_schema, SchemaError};
