//! Order questions: nested-product joins, recency, date windows and totals.

use chrono::NaiveDate;
use domain::{Dataset, Order, OrderId, Product};
use indexmap::IndexMap;

use super::predicates::{category_is, contains_category, placed_on, placed_within};
use super::record_query;
use crate::error::{QueryError, Result};
use crate::grouping::{reduce, to_map};
use crate::join::flat_join;
use crate::ordering::{SortOrder, comparing, top_n};
use crate::predicate::filter;
use crate::range::DateRange;
use crate::stats::{average, summarize};

/// Questions about orders.
#[derive(Debug, Clone, Copy)]
pub struct OrderView<'d> {
    dataset: &'d Dataset,
}

impl<'d> OrderView<'d> {
    pub fn new(dataset: &'d Dataset) -> Self {
        Self { dataset }
    }

    /// Fails if no product carries `category`.
    fn require_category(&self, category: &str) -> Result<()> {
        if self.dataset.has_category(category) {
            Ok(())
        } else {
            Err(QueryError::UnknownCategory(category.to_string()))
        }
    }

    fn orders_within(&self, range: DateRange) -> Vec<&'d Order> {
        filter(self.dataset.orders(), &placed_within(range))
    }

    fn products_on(&self, date: NaiveDate) -> Vec<&'d Product> {
        flat_join(filter(self.dataset.orders(), &placed_on(date)), Order::products)
    }

    /// Orders with at least one product in `category`.
    #[tracing::instrument(skip(self))]
    pub fn containing_category(&self, category: &str) -> Result<Vec<&'d Order>> {
        record_query("orders_containing_category");
        self.require_category(category)?;
        let orders = filter(self.dataset.orders(), &contains_category(category));
        tracing::debug!(matched = orders.len(), "orders selected");
        Ok(orders)
    }

    /// Products of `category` across every order, in order-then-product
    /// sequence and keeping repeats.
    #[tracing::instrument(skip(self))]
    pub fn ordered_products_in_category(&self, category: &str) -> Result<Vec<&'d Product>> {
        record_query("ordered_products_in_category");
        self.require_category(category)?;
        Ok(filter(
            flat_join(self.dataset.orders(), Order::products),
            &category_is(category),
        ))
    }

    /// The `n` most recently placed orders, newest first.
    #[tracing::instrument(skip(self))]
    pub fn most_recent(&self, n: usize) -> Vec<&'d Order> {
        record_query("most_recent_orders");
        top_n(
            self.dataset.orders(),
            comparing(Order::order_date, SortOrder::Descending),
            n,
        )
    }

    /// Orders placed within `range`, in load order.
    #[tracing::instrument(skip(self))]
    pub fn placed_within(&self, range: DateRange) -> Vec<&'d Order> {
        record_query("orders_placed_within");
        self.orders_within(range)
    }

    /// Every product of every order placed on `date`, repeats kept.
    #[tracing::instrument(skip(self))]
    pub fn products_ordered_on(&self, date: NaiveDate) -> Vec<&'d Product> {
        record_query("products_ordered_on");
        self.products_on(date)
    }

    /// Sum of product prices over all orders placed within `range`.
    #[tracing::instrument(skip(self))]
    pub fn total_within(&self, range: DateRange) -> f64 {
        record_query("total_within");
        let orders = self.orders_within(range);
        summarize(flat_join(orders, Order::products), Product::price).sum()
    }

    /// Same total as [`total_within`](Self::total_within), folded with an
    /// explicit accumulator.
    #[tracing::instrument(skip(self))]
    pub fn total_within_by_reduce(&self, range: DateRange) -> f64 {
        record_query("total_within_by_reduce");
        let orders = self.orders_within(range);
        reduce(flat_join(orders, Order::products), 0.0, |total, product| {
            total + product.price()
        })
    }

    /// Mean product price over the orders placed on `date`.
    ///
    /// Fails with [`QueryError::EmptyResult`] when nothing was ordered that day.
    #[tracing::instrument(skip(self))]
    pub fn average_product_price_on(&self, date: NaiveDate) -> Result<f64> {
        record_query("average_product_price_on");
        average(
            self.products_on(date)
                .into_iter()
                .map(Product::price),
        )
    }

    /// Number of products per order.
    #[tracing::instrument(skip(self))]
    pub fn product_count_by_order(&self) -> Result<IndexMap<OrderId, usize>> {
        record_query("product_count_by_order");
        to_map(self.dataset.orders(), Order::id, Order::product_count)
    }

    /// Total price per order.
    #[tracing::instrument(skip(self))]
    pub fn totals_by_order(&self) -> Result<IndexMap<OrderId, f64>> {
        record_query("totals_by_order");
        to_map(self.dataset.orders(), Order::id, Order::total_price)
    }

    /// Total price per order, folding each order's products with [`reduce`].
    #[tracing::instrument(skip(self))]
    pub fn totals_by_order_via_reduce(&self) -> Result<IndexMap<OrderId, f64>> {
        record_query("totals_by_order_via_reduce");
        to_map(self.dataset.orders(), Order::id, |order| {
            reduce(order.products(), 0.0, |total, product| total + product.price())
        })
    }
}
