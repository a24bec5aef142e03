//! Shared types for the catalog query workspace.

pub mod ids;

pub use ids::{CustomerId, OrderId, ProductId};
