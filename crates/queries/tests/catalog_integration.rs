//! Integration tests: seed fixture → Dataset → every catalog view.

use chrono::NaiveDate;
use domain::{CustomerId, Dataset, Fixture, OrderId, Product};
use queries::{CustomerView, DateRange, OrderView, ProductView, QueryError};

fn seed() -> Dataset {
    Fixture::seed().unwrap().into_dataset().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn product_ids<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<u64> {
    products.into_iter().map(|p| p.id().get()).collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

mod products {
    use super::*;

    #[test]
    fn test_books_priced_over_one_hundred() {
        let dataset = seed();
        let books = ProductView::new(&dataset)
            .expensive_in_category("Books", 100.0)
            .unwrap();
        assert_eq!(product_ids(books), [2, 3, 5]);
    }

    #[test]
    fn test_toys_with_ten_percent_off() {
        let dataset = seed();
        let view = ProductView::new(&dataset);
        let toys = view.discounted_in_category("Toys", 0.9).unwrap();

        let prices: Vec<_> = toys.iter().map(Product::price).collect();
        assert_eq!(prices, [64.0 * 0.9, 18.0 * 0.9, 42.5 * 0.9]);
        let originals: Vec<_> = view
            .in_category("Toys")
            .unwrap()
            .into_iter()
            .map(Product::price)
            .collect();
        assert_eq!(originals, [64.0, 18.0, 42.5]);
    }

    #[test]
    fn test_products_ordered_between_february_and_april() {
        let dataset = seed();
        let view = ProductView::new(&dataset);
        let range = DateRange::exclusive(date(2021, 2, 1), date(2021, 4, 1));

        assert_eq!(
            product_ids(view.ordered_within(range, None)),
            [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]
        );
        assert_eq!(
            product_ids(view.ordered_within(range, Some(2))),
            [2, 4, 6, 7, 9, 11, 13, 14, 15]
        );
    }

    #[test]
    fn test_three_cheapest_books() {
        let dataset = seed();
        let cheapest = ProductView::new(&dataset)
            .cheapest_in_category("Books", 3)
            .unwrap();
        assert_eq!(product_ids(cheapest), [4, 1, 3]);
    }

    #[test]
    fn test_book_statistics() {
        let dataset = seed();
        let stats = ProductView::new(&dataset)
            .category_statistics("Books")
            .unwrap();

        assert_eq!(stats.count(), 5);
        assert_close(stats.sum(), 525.45);
        assert_eq!(stats.min().unwrap(), 12.0);
        assert_eq!(stats.max().unwrap(), 220.0);
        assert_close(stats.average().unwrap(), 105.09);
    }

    #[test]
    fn test_most_expensive_per_category() {
        let dataset = seed();
        let view = ProductView::new(&dataset);

        let best = view.most_expensive_by_category();
        let ids: Vec<_> = best.iter().map(|(c, p)| (*c, p.id().get())).collect();
        assert_eq!(
            ids,
            [
                ("Books", 5),
                ("Toys", 6),
                ("Baby", 9),
                ("Games", 12),
                ("Grocery", 15)
            ]
        );

        let names = view.most_expensive_name_by_category();
        assert_eq!(names["Baby"], "Baby Monitor");
    }

    #[test]
    fn test_names_by_category_covers_every_product() {
        let dataset = seed();
        let names = ProductView::new(&dataset).names_by_category();
        let total: usize = names.values().map(Vec::len).sum();
        assert_eq!(total, dataset.products().len());
        assert_eq!(names["Grocery"], ["Olive Oil", "Coffee Beans"]);
    }

    #[test]
    fn test_unknown_category_fails_but_empty_match_does_not() {
        let dataset = seed();
        let view = ProductView::new(&dataset);
        assert!(matches!(
            view.in_category("Garden"),
            Err(QueryError::UnknownCategory(_))
        ));
        assert!(view.expensive_in_category("Grocery", 1000.0).unwrap().is_empty());
    }
}

mod orders {
    use super::*;

    fn order_ids(orders: &[&domain::Order]) -> Vec<u64> {
        orders.iter().map(|o| o.id().get()).collect()
    }

    #[test]
    fn test_orders_with_baby_products() {
        let dataset = seed();
        let orders = OrderView::new(&dataset).containing_category("Baby").unwrap();
        assert_eq!(order_ids(&orders), [2, 6, 8, 10]);
    }

    #[test]
    fn test_three_most_recent_orders() {
        let dataset = seed();
        let recent = OrderView::new(&dataset).most_recent(3);
        assert_eq!(order_ids(&recent), [10, 9, 8]);
    }

    #[test]
    fn test_products_ordered_on_march_fifteenth() {
        let dataset = seed();
        let products = OrderView::new(&dataset).products_ordered_on(date(2021, 3, 15));
        assert_eq!(product_ids(products), [3, 10, 8, 4, 14]);
    }

    #[test]
    fn test_february_total_by_sum_and_reduce() {
        let dataset = seed();
        let view = OrderView::new(&dataset);
        let february = DateRange::month(2021, 2).unwrap();

        let total = view.total_within(february);
        assert_close(total, 348.2);
        assert_eq!(view.total_within_by_reduce(february), total);
    }

    #[test]
    fn test_average_price_on_march_fifteenth() {
        let dataset = seed();
        let average = OrderView::new(&dataset)
            .average_product_price_on(date(2021, 3, 15))
            .unwrap();
        assert_close(average, 36.838);
    }

    #[test]
    fn test_per_order_product_counts_and_totals() {
        let dataset = seed();
        let view = OrderView::new(&dataset);

        let counts = view.product_count_by_order().unwrap();
        assert_eq!(counts.len(), 10);
        assert_eq!(counts[&OrderId::new(3)], 3);
        assert_eq!(counts[&OrderId::new(9)], 2);

        let totals = view.totals_by_order().unwrap();
        assert_close(totals[&OrderId::new(5)], 275.0);
        assert_eq!(totals, view.totals_by_order_via_reduce().unwrap());
    }
}

mod customers {
    use super::*;

    #[test]
    fn test_order_count_per_customer() {
        let dataset = seed();
        let counts = CustomerView::new(&dataset).order_count_by_customer();
        let by_id: Vec<_> = counts.iter().map(|(c, n)| (c.id().get(), *n)).collect();
        assert_eq!(by_id, [(1, 2), (2, 3), (3, 2), (4, 1), (5, 2)]);
    }

    #[test]
    fn test_order_ids_per_customer() {
        let dataset = seed();
        let ids = CustomerView::new(&dataset).order_ids_by_customer();
        assert_eq!(
            ids[&CustomerId::new(2)],
            [OrderId::new(2), OrderId::new(4), OrderId::new(8)]
        );
    }

    #[test]
    fn test_order_counts_add_up_to_all_orders() {
        let dataset = seed();
        let counts = CustomerView::new(&dataset).order_count_by_customer();
        assert_eq!(counts.values().sum::<usize>(), dataset.orders().len());
    }
}
