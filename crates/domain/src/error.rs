//! Domain error types.

use std::path::PathBuf;

use common::{CustomerId, OrderId, ProductId};
use thiserror::Error;

/// A broken relationship or value constraint found while loading a dataset.
///
/// These are only raised at the load boundary; queries assume a dataset
/// that already passed these checks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    /// An order points at a customer that was never loaded.
    #[error("order {order_id} references unknown customer {customer_id}")]
    UnknownCustomer {
        order_id: OrderId,
        customer_id: CustomerId,
    },

    /// An order lists a product that was never loaded.
    #[error("order {order_id} references unknown product {product_id}")]
    UnknownProduct {
        order_id: OrderId,
        product_id: ProductId,
    },

    /// Two entities of the same kind share an identifier.
    #[error("duplicate {entity} id {id}")]
    DuplicateId { entity: &'static str, id: u64 },

    /// A product price that is negative, NaN or infinite.
    #[error("product {product_id} has invalid price {price} (must be finite and non-negative)")]
    InvalidPrice { product_id: ProductId, price: f64 },
}

/// Errors that can occur while building or loading a dataset.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The data violates an entity invariant.
    #[error("Invariant violation: {0}")]
    InvariantViolation(#[from] InvariantViolation),

    /// The fixture document could not be parsed.
    #[error("Fixture deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The fixture file could not be read.
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
