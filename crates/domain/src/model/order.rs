use std::sync::Arc;

use chrono::NaiveDate;
use common::OrderId;

use super::{Customer, Product};

/// An order placed by a customer on a calendar date.
///
/// Orders hold shared references to their customer and products, so
/// joins across the relation never need a lookup. Only the dataset
/// builder constructs orders, after it has resolved every reference.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    order_date: NaiveDate,
    customer: Arc<Customer>,
    products: Vec<Arc<Product>>,
}

impl Order {
    pub(crate) fn new(
        id: OrderId,
        order_date: NaiveDate,
        customer: Arc<Customer>,
        products: Vec<Arc<Product>>,
    ) -> Self {
        Self {
            id,
            order_date,
            customer,
            products,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Products in the order, in the order they were listed.
    pub fn products(&self) -> impl ExactSizeIterator<Item = &Product> + Clone + '_ {
        self.products.iter().map(Arc::as_ref)
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Sum of the prices of every product in the order.
    pub fn total_price(&self) -> f64 {
        self.products().map(Product::price).sum()
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl std::hash::Hash for Order {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "order #{} on {} by {} ({} products)",
            self.id,
            self.order_date,
            self.customer.name(),
            self.products.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order {
        let customer = Arc::new(Customer::new(1, "Ada", 2));
        let products = vec![
            Arc::new(Product::new(1, "Book", "Books", 20.0).unwrap()),
            Arc::new(Product::new(2, "Rattle", "Baby", 5.5).unwrap()),
            Arc::new(Product::new(1, "Book", "Books", 20.0).unwrap()),
        ];
        Order::new(
            OrderId::new(10),
            NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
            customer,
            products,
        )
    }

    #[test]
    fn test_total_price_counts_duplicates() {
        assert_eq!(order().total_price(), 45.5);
        assert_eq!(order().product_count(), 3);
    }

    #[test]
    fn test_products_keep_listing_order() {
        let names: Vec<_> = order().products().map(Product::name).map(str::to_owned).collect();
        assert_eq!(names, ["Book", "Rattle", "Book"]);
    }

    #[test]
    fn test_display_summarizes_order() {
        assert_eq!(
            order().to_string(),
            "order #10 on 2021-03-15 by Ada (3 products)"
        );
    }
}
