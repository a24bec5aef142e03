//! Customer questions: order counts, order ids and spending per customer.

use domain::{Customer, CustomerId, Dataset, Order, OrderId};
use indexmap::IndexMap;

use super::record_query;
use crate::grouping::group_by;
use crate::ordering::{SortOrder, comparing, top_n};

/// Per-customer spending, ranked by [`CustomerView::top_spenders`].
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSpend<'d> {
    pub customer: &'d Customer,
    pub order_count: usize,
    pub total_spent: f64,
}

/// Questions about customers, answered from their orders.
///
/// Customers without orders do not appear in any grouping.
#[derive(Debug, Clone, Copy)]
pub struct CustomerView<'d> {
    dataset: &'d Dataset,
}

impl<'d> CustomerView<'d> {
    pub fn new(dataset: &'d Dataset) -> Self {
        Self { dataset }
    }

    /// Number of orders per customer, customers in first-order sequence.
    #[tracing::instrument(skip(self))]
    pub fn order_count_by_customer(&self) -> IndexMap<&'d Customer, usize> {
        record_query("order_count_by_customer");
        group_by(self.dataset.orders(), Order::customer).counting()
    }

    /// Order ids per customer id.
    #[tracing::instrument(skip(self))]
    pub fn order_ids_by_customer(&self) -> IndexMap<CustomerId, Vec<OrderId>> {
        record_query("order_ids_by_customer");
        group_by(self.dataset.orders(), |order: &Order| order.customer().id()).mapping(Order::id)
    }

    /// Spending per customer.
    #[tracing::instrument(skip(self))]
    pub fn spending_by_customer(&self) -> Vec<CustomerSpend<'d>> {
        record_query("spending_by_customer");
        self.spending()
    }

    /// The `n` customers who spent the most, highest first.
    #[tracing::instrument(skip(self))]
    pub fn top_spenders(&self, n: usize) -> Vec<CustomerSpend<'d>> {
        record_query("top_spenders");
        let spending = self.spending();
        top_n(
            &spending,
            comparing(|s: &CustomerSpend<'d>| s.total_spent, SortOrder::Descending),
            n,
        )
        .into_iter()
        .cloned()
        .collect()
    }

    fn spending(&self) -> Vec<CustomerSpend<'d>> {
        group_by(self.dataset.orders(), Order::customer)
            .reduce_each(|orders| {
                (
                    orders.len(),
                    orders.iter().map(|order| order.total_price()).sum::<f64>(),
                )
            })
            .into_iter()
            .map(|(customer, (order_count, total_spent))| CustomerSpend {
                customer,
                order_count,
                total_spent,
            })
            .collect()
    }
}
