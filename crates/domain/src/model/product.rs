use std::collections::BTreeSet;

use common::{OrderId, ProductId};
use serde::Serialize;

use crate::error::InvariantViolation;

/// A catalog product.
///
/// Products are immutable. Price changes produce a new value through
/// [`Product::with_price`] or [`Product::with_discount`]; the original is
/// left untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    price: f64,
    /// Orders this product appears in, filled in when the dataset is built.
    order_ids: BTreeSet<OrderId>,
}

impl Product {
    /// Creates a product with no order references.
    ///
    /// Fails if `price` is negative or not finite.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Result<Self, InvariantViolation> {
        let id = id.into();
        check_price(id, price)?;
        Ok(Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            order_ids: BTreeSet::new(),
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Identifiers of the orders that contain this product.
    pub fn order_ids(&self) -> &BTreeSet<OrderId> {
        &self.order_ids
    }

    /// Returns true if the product is part of the given order.
    pub fn appears_in(&self, order_id: OrderId) -> bool {
        self.order_ids.contains(&order_id)
    }

    /// Returns a copy of this product with a different price.
    pub fn with_price(&self, price: f64) -> Result<Self, InvariantViolation> {
        check_price(self.id, price)?;
        Ok(Self {
            price,
            ..self.clone()
        })
    }

    /// Returns a copy with the price multiplied by `factor`.
    ///
    /// Plain floating point multiplication; no rounding is applied.
    pub fn with_discount(&self, factor: f64) -> Result<Self, InvariantViolation> {
        self.with_price(self.price * factor)
    }

    pub(crate) fn with_order_ids(self, order_ids: BTreeSet<OrderId>) -> Self {
        Self { order_ids, ..self }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (#{}, {}, {:.2})",
            self.name, self.id, self.category, self.price
        )
    }
}

fn check_price(product_id: ProductId, price: f64) -> Result<(), InvariantViolation> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(InvariantViolation::InvalidPrice { product_id, price })
    }
}
