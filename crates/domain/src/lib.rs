//! Domain layer for the catalog query workspace.
//!
//! This crate provides the read-only data the query layer works on:
//! - [`Customer`], [`Order`] and [`Product`] entities
//! - [`Dataset`], which links orders to customers and products in both directions
//! - [`Fixture`], a JSON data provider with a bundled seed catalog

pub mod dataset;
pub mod error;
pub mod fixture;
pub mod model;

pub use common::{CustomerId, OrderId, ProductId};
pub use dataset::{Dataset, DatasetBuilder, OrderRecord};
pub use error::{DomainError, InvariantViolation, Result};
pub use fixture::Fixture;
pub use model::{Customer, Order, Product};
