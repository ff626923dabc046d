//! Repository implementations for database access
//!
//! Each repository acquires its own connection per call and releases it
//! before returning, whatever the outcome.

pub mod orders;

pub use orders::{Order, OrderId, OrderRepo, RepoError};
