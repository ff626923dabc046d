//! Request models with shape validation
//!
//! Persisted records live with their repository in `db::repos`.

mod order;
mod validation;

pub use order::{CreateOrderRequest, NewOrder};
pub use validation::ValidationError;
