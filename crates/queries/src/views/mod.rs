//! Catalog views: the concrete questions asked of a [`domain::Dataset`].
//!
//! Each view borrows the dataset and answers questions by composing the
//! generic query building blocks. Results borrow from the dataset.

pub mod customers;
pub mod orders;
pub mod predicates;
pub mod products;

pub use customers::{CustomerSpend, CustomerView};
pub use orders::OrderView;
pub use products::ProductView;

fn record_query(query: &'static str) {
    metrics::counter!("catalog_queries_total", "query" => query).increment(1);
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::NaiveDate;
    use domain::{Customer, Dataset, OrderRecord, Product};
    use metrics::{
        Counter, CounterFn, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString,
        Unit,
    };

    use super::*;
    use crate::range::DateRange;

    /// Records the `query` label of every counter increment.
    #[derive(Debug, Clone, Default)]
    struct QueryLog(Arc<Mutex<Vec<String>>>);

    struct QueryCounter {
        log: QueryLog,
        query: String,
    }

    impl CounterFn for QueryCounter {
        fn increment(&self, value: u64) {
            let mut log = self.log.0.lock().unwrap();
            for _ in 0..value {
                log.push(self.query.clone());
            }
        }

        fn absolute(&self, _value: u64) {}
    }

    impl Recorder for QueryLog {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            let query = key
                .labels()
                .find(|label| label.key() == "query")
                .map(|label| label.value().to_string())
                .unwrap_or_default();
            Counter::from_arc(Arc::new(QueryCounter {
                log: self.clone(),
                query,
            }))
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }

    fn queries_issued(ask: impl FnOnce()) -> Vec<String> {
        let log = QueryLog::default();
        metrics::with_local_recorder(&log, ask);
        let issued = log.0.lock().unwrap().clone();
        issued
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset() -> Dataset {
        Dataset::builder()
            .customer(Customer::new(1, "Ada", 2))
            .product(Product::new(1, "Book", "Books", 20.0).unwrap())
            .product(Product::new(2, "Kite", "Toys", 12.5).unwrap())
            .order(OrderRecord::new(1, date(2021, 2, 10), 1, [1, 2]))
            .build()
            .unwrap()
    }

    #[test]
    fn test_each_question_counts_once() {
        let dataset = dataset();
        let products = ProductView::new(&dataset);
        let orders = OrderView::new(&dataset);
        let customers = CustomerView::new(&dataset);
        let february = DateRange::month(2021, 2).unwrap();

        let issued = queries_issued(|| {
            products.discounted_in_category("Toys", 0.9).unwrap();
            products.cheapest_in_category("Books", 1).unwrap();
            products.category_statistics("Books").unwrap();
            orders.total_within(february);
            orders.total_within_by_reduce(february);
            orders.average_product_price_on(date(2021, 2, 10)).unwrap();
            customers.top_spenders(1);
        });

        assert_eq!(
            issued,
            [
                "discounted_in_category",
                "cheapest_in_category",
                "category_statistics",
                "total_within",
                "total_within_by_reduce",
                "average_product_price_on",
                "top_spenders",
            ]
        );
    }
}
