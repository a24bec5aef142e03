//! The read-only dataset the query layer runs against.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;
use common::{CustomerId, OrderId, ProductId};

use crate::error::InvariantViolation;
use crate::model::{Customer, Order, Product};

/// An order as it arrives from a data provider, before references are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: OrderId,
    pub order_date: NaiveDate,
    pub customer_id: CustomerId,
    pub product_ids: Vec<ProductId>,
}

impl OrderRecord {
    /// Creates a new order record.
    pub fn new(
        id: impl Into<OrderId>,
        order_date: NaiveDate,
        customer_id: impl Into<CustomerId>,
        product_ids: impl IntoIterator<Item = impl Into<ProductId>>,
    ) -> Self {
        Self {
            id: id.into(),
            order_date,
            customer_id: customer_id.into(),
            product_ids: product_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Collects entities and links them into a [`Dataset`].
///
/// [`DatasetBuilder::build`] is the load boundary: every reference is
/// resolved and every product learns which orders it appears in. Nothing is
/// mutated afterwards.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    customers: Vec<Customer>,
    products: Vec<Product>,
    orders: Vec<OrderRecord>,
}

impl DatasetBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer(mut self, customer: Customer) -> Self {
        self.customers.push(customer);
        self
    }

    pub fn product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    pub fn order(mut self, order: OrderRecord) -> Self {
        self.orders.push(order);
        self
    }

    pub fn customers(mut self, customers: impl IntoIterator<Item = Customer>) -> Self {
        self.customers.extend(customers);
        self
    }

    pub fn products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products.extend(products);
        self
    }

    pub fn orders(mut self, orders: impl IntoIterator<Item = OrderRecord>) -> Self {
        self.orders.extend(orders);
        self
    }

    /// Validates the collected entities and links them together.
    pub fn build(self) -> Result<Dataset, InvariantViolation> {
        check_unique("customer", self.customers.iter().map(|c| c.id().get()))?;
        check_unique("product", self.products.iter().map(|p| p.id().get()))?;
        check_unique("order", self.orders.iter().map(|o| o.id.get()))?;

        let customers: Vec<Arc<Customer>> = self.customers.into_iter().map(Arc::new).collect();
        let customer_index: HashMap<CustomerId, Arc<Customer>> = customers
            .iter()
            .map(|c| (c.id(), Arc::clone(c)))
            .collect();

        // Each reference is resolved exactly once; back references are
        // derived from the same pass so both directions agree.
        let product_positions: HashMap<ProductId, usize> = self
            .products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id(), position))
            .collect();
        let mut back_refs: HashMap<ProductId, BTreeSet<OrderId>> = HashMap::new();
        let mut resolved = Vec::with_capacity(self.orders.len());
        for record in self.orders {
            let customer = customer_index.get(&record.customer_id).cloned().ok_or(
                InvariantViolation::UnknownCustomer {
                    order_id: record.id,
                    customer_id: record.customer_id,
                },
            )?;
            let positions = record
                .product_ids
                .iter()
                .map(|&product_id| {
                    let position = product_positions.get(&product_id).copied().ok_or(
                        InvariantViolation::UnknownProduct {
                            order_id: record.id,
                            product_id,
                        },
                    )?;
                    back_refs.entry(product_id).or_default().insert(record.id);
                    Ok(position)
                })
                .collect::<Result<Vec<usize>, InvariantViolation>>()?;
            resolved.push((record, customer, positions));
        }

        let products: Vec<Arc<Product>> = self
            .products
            .into_iter()
            .map(|product| {
                let order_ids = back_refs.remove(&product.id()).unwrap_or_default();
                Arc::new(product.with_order_ids(order_ids))
            })
            .collect();
        let product_index: HashMap<ProductId, Arc<Product>> = products
            .iter()
            .map(|p| (p.id(), Arc::clone(p)))
            .collect();

        let orders: Vec<Order> = resolved
            .into_iter()
            .map(|(record, customer, positions)| {
                let lines = positions
                    .into_iter()
                    .map(|position| Arc::clone(&products[position]))
                    .collect();
                Order::new(record.id, record.order_date, customer, lines)
            })
            .collect();

        let order_index = orders
            .iter()
            .enumerate()
            .map(|(position, order)| (order.id(), position))
            .collect();

        tracing::info!(
            customers = customers.len(),
            products = products.len(),
            orders = orders.len(),
            "dataset built"
        );

        Ok(Dataset {
            customers,
            products,
            orders,
            customer_index,
            product_index,
            order_index,
        })
    }
}

fn check_unique(
    entity: &'static str,
    ids: impl Iterator<Item = u64>,
) -> Result<(), InvariantViolation> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(InvariantViolation::DuplicateId { entity, id });
        }
    }
    Ok(())
}

/// The three read-only collections: customers, products and orders.
///
/// Collections iterate in load order. Shared references make the dataset
/// cheap to clone.
#[derive(Debug, Clone)]
pub struct Dataset {
    customers: Vec<Arc<Customer>>,
    products: Vec<Arc<Product>>,
    orders: Vec<Order>,
    customer_index: HashMap<CustomerId, Arc<Customer>>,
    product_index: HashMap<ProductId, Arc<Product>>,
    order_index: HashMap<OrderId, usize>,
}

impl Dataset {
    /// Returns a builder for a new dataset.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    pub fn customers(&self) -> impl ExactSizeIterator<Item = &Customer> + Clone + '_ {
        self.customers.iter().map(Arc::as_ref)
    }

    pub fn products(&self) -> impl ExactSizeIterator<Item = &Product> + Clone + '_ {
        self.products.iter().map(Arc::as_ref)
    }

    pub fn orders(&self) -> impl ExactSizeIterator<Item = &Order> + Clone + '_ {
        self.orders.iter()
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customer_index.get(&id).map(Arc::as_ref)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.product_index.get(&id).map(Arc::as_ref)
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.order_index.get(&id).map(|&position| &self.orders[position])
    }

    /// Orders a product appears in, following its back references.
    pub fn orders_of<'a>(&'a self, product: &'a Product) -> impl Iterator<Item = &'a Order> + 'a {
        product.order_ids().iter().filter_map(|&id| self.order(id))
    }

    /// Returns true if any product carries the given category.
    pub fn has_category(&self, category: &str) -> bool {
        self.products().any(|p| p.category() == category)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products()
            .map(Product::category)
            .filter(|category| seen.insert(*category))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.products.is_empty() && self.orders.is_empty()
    }
}
