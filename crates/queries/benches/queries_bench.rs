use chrono::{Days, NaiveDate};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Customer, Dataset, Fixture, OrderRecord, Product};
use queries::{CustomerView, DateRange, OrderView, ProductView};

const CATEGORIES: [&str; 5] = ["Books", "Toys", "Baby", "Games", "Grocery"];

fn synthetic_dataset(customers: u64, products: u64, orders: u64) -> Dataset {
    let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    Dataset::builder()
        .customers((1..=customers).map(|id| Customer::new(id, format!("Customer {id}"), 1 + (id % 3) as u32)))
        .products((1..=products).map(|id| {
            let category = CATEGORIES[(id % CATEGORIES.len() as u64) as usize];
            Product::new(id, format!("Product {id}"), category, (id % 250) as f64 + 0.99).unwrap()
        }))
        .orders((1..=orders).map(|id| {
            let date = start + Days::new(id % 365);
            let customer = 1 + id % customers;
            let items = (0..1 + id % 4).map(move |k| 1 + (id * 7 + k * 13) % products);
            OrderRecord::new(id, date, customer, items)
        }))
        .build()
        .unwrap()
}

fn bench_seed_load(c: &mut Criterion) {
    c.bench_function("queries/load_seed_dataset", |b| {
        b.iter(|| Fixture::seed().unwrap().into_dataset().unwrap());
    });
}

fn bench_product_view(c: &mut Criterion) {
    let dataset = synthetic_dataset(200, 2_000, 10_000);
    let view = ProductView::new(&dataset);
    let range = DateRange::exclusive(
        NaiveDate::from_ymd_opt(2021, 2, 1).unwrap(),
        NaiveDate::from_ymd_opt(2021, 4, 1).unwrap(),
    );

    let mut group = c.benchmark_group("queries/products");
    group.bench_function("expensive_in_category", |b| {
        b.iter(|| view.expensive_in_category("Books", 100.0).unwrap());
    });
    group.bench_function("ordered_within_tier_2", |b| {
        b.iter(|| view.ordered_within(range, Some(2)));
    });
    group.bench_function("cheapest_in_category_10", |b| {
        b.iter(|| view.cheapest_in_category("Toys", 10).unwrap());
    });
    group.bench_function("most_expensive_by_category", |b| {
        b.iter(|| view.most_expensive_by_category());
    });
    group.finish();
}

fn bench_order_view(c: &mut Criterion) {
    let dataset = synthetic_dataset(200, 2_000, 10_000);
    let view = OrderView::new(&dataset);
    let february = DateRange::month(2021, 2).unwrap();

    let mut group = c.benchmark_group("queries/orders");
    group.bench_function("containing_category", |b| {
        b.iter(|| view.containing_category("Baby").unwrap());
    });
    group.bench_function("most_recent_3", |b| {
        b.iter(|| view.most_recent(3));
    });
    group.bench_function("total_within_month", |b| {
        b.iter(|| view.total_within(february));
    });
    group.bench_function("totals_by_order", |b| {
        b.iter(|| view.totals_by_order().unwrap());
    });
    group.finish();
}

fn bench_customer_view(c: &mut Criterion) {
    let dataset = synthetic_dataset(200, 2_000, 10_000);
    let view = CustomerView::new(&dataset);

    c.bench_function("queries/customers/order_count_by_customer", |b| {
        b.iter(|| view.order_count_by_customer());
    });
}

criterion_group!(
    benches,
    bench_seed_load,
    bench_product_view,
    bench_order_view,
    bench_customer_view,
);
criterion_main!(benches);
