//! JSON fixture provider.
//!
//! A fixture is the serialized form of the three collections. Orders refer
//! to customers and products by identifier; references are resolved when
//! the fixture is turned into a [`Dataset`].

use std::path::Path;

use chrono::NaiveDate;
use common::{CustomerId, OrderId, ProductId};
use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, OrderRecord};
use crate::error::{DomainError, Result};
use crate::model::{Customer, Product};

const SEED: &str = include_str!("../fixtures/seed.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerEntry {
    pub id: CustomerId,
    pub name: String,
    pub tier: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderEntry {
    pub id: OrderId,
    /// Calendar date in `YYYY-MM-DD` form.
    pub order_date: NaiveDate,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
}

/// Serialized catalog: customers, products and orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub customers: Vec<CustomerEntry>,
    #[serde(default)]
    pub products: Vec<ProductEntry>,
    #[serde(default)]
    pub orders: Vec<OrderEntry>,
}

impl Fixture {
    /// Parses a fixture from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a fixture file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DomainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The demo catalog bundled with the crate.
    pub fn seed() -> Result<Self> {
        Self::from_json_str(SEED)
    }

    /// Validates the fixture and links it into a dataset.
    pub fn into_dataset(self) -> Result<Dataset> {
        let products = self
            .products
            .into_iter()
            .map(|p| Product::new(p.id, p.name, p.category, p.price))
            .collect::<std::result::Result<Vec<_>, _>>()
            .inspect_err(|violation| tracing::warn!(%violation, "fixture rejected"))?;

        Dataset::builder()
            .customers(
                self.customers
                    .into_iter()
                    .map(|c| Customer::new(c.id, c.name, c.tier)),
            )
            .products(products)
            .orders(self.orders.into_iter().map(|o| OrderRecord {
                id: o.id,
                order_date: o.order_date,
                customer_id: o.customer_id,
                product_ids: o.product_ids,
            }))
            .build()
            .inspect_err(|violation| tracing::warn!(%violation, "fixture rejected"))
            .map_err(DomainError::from)
    }
}
