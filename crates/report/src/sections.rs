//! The catalog report: every view's answer, flattened into owned rows.

use std::fmt::Display;

use chrono::NaiveDate;
use common::{CustomerId, OrderId, ProductId};
use domain::{Dataset, Order, Product};
use indexmap::IndexMap;
use queries::views::CustomerSpend;
use queries::{CustomerView, DateRange, OrderView, ProductView, QueryError, SummaryStatistics};
use serde::Serialize;

use crate::error::Result;

pub const PREMIUM_CATEGORY: &str = "Books";
pub const PREMIUM_THRESHOLD: f64 = 100.0;
pub const ORDERED_CATEGORY: &str = "Baby";
pub const DISCOUNT_CATEGORY: &str = "Toys";
pub const DISCOUNT_FACTOR: f64 = 0.9;
pub const WINDOW_TIER: u32 = 2;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Exclusive on both ends.
pub fn order_window() -> DateRange {
    DateRange::exclusive(ymd(2021, 2, 1), ymd(2021, 4, 1))
}

pub fn snapshot_day() -> NaiveDate {
    ymd(2021, 3, 15)
}

pub const TOTAL_YEAR: i32 = 2021;
pub const TOTAL_MONTH: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductLine {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl From<&Product> for ProductLine {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            category: product.category().to_string(),
            price: product.price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub id: OrderId,
    pub order_date: NaiveDate,
    pub customer: String,
    pub product_count: usize,
    pub total: f64,
}

impl From<&Order> for OrderLine {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id(),
            order_date: order.order_date(),
            customer: order.customer().name().to_string(),
            product_count: order.product_count(),
            total: order.total_price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerLine {
    pub id: CustomerId,
    pub name: String,
    pub order_count: usize,
    pub total_spent: f64,
}

impl From<CustomerSpend<'_>> for CustomerLine {
    fn from(spend: CustomerSpend<'_>) -> Self {
        Self {
            id: spend.customer.id(),
            name: spend.customer.name().to_string(),
            order_count: spend.order_count,
            total_spent: spend.total_spent,
        }
    }
}

/// Summary statistics with the undefined reductions left empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsLine {
    pub count: u64,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub average: Option<f64>,
}

impl From<SummaryStatistics> for StatsLine {
    fn from(stats: SummaryStatistics) -> Self {
        Self {
            count: stats.count(),
            sum: stats.sum(),
            min: stats.min().ok(),
            max: stats.max().ok(),
            average: stats.average().ok(),
        }
    }
}

/// Every catalog question answered against one dataset.
///
/// Sections that depend on a category the dataset lacks, or on a reduction
/// over nothing, are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub customer_count: usize,
    pub product_count: usize,
    pub order_count: usize,
    pub categories: Vec<String>,
    pub premium_products: Option<Vec<ProductLine>>,
    pub orders_with_category: Option<Vec<OrderLine>>,
    pub ordered_in_category: Option<Vec<ProductLine>>,
    pub discounted_products: Option<Vec<ProductLine>>,
    pub ordered_in_window: Vec<ProductLine>,
    pub cheapest_premium: Option<Vec<ProductLine>>,
    pub recent_orders: Vec<OrderLine>,
    pub products_on_day: Vec<ProductLine>,
    pub average_price_on_day: Option<f64>,
    pub month_total: f64,
    pub month_total_by_reduce: f64,
    pub product_count_by_order: IndexMap<String, usize>,
    pub totals_by_order: IndexMap<String, f64>,
    pub totals_by_order_via_reduce: IndexMap<String, f64>,
    pub premium_statistics: Option<StatsLine>,
    pub names_by_category: IndexMap<String, Vec<String>>,
    pub most_expensive_by_category: IndexMap<String, ProductLine>,
    pub most_expensive_name_by_category: IndexMap<String, String>,
    pub customers: Vec<CustomerLine>,
    pub order_count_by_customer: IndexMap<String, usize>,
    pub order_ids_by_customer: IndexMap<String, Vec<OrderId>>,
    pub top_spenders: Vec<CustomerLine>,
    pub most_ordered: Vec<ProductLine>,
}

/// Turns a missing-data failure into an absent section.
fn optional<T>(section: &'static str, result: queries::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err @ (QueryError::UnknownCategory(_) | QueryError::EmptyResult { .. })) => {
            tracing::warn!(section, error = %err, "section left empty");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn product_lines<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<ProductLine> {
    products.into_iter().map(ProductLine::from).collect()
}

/// Re-keys a map by the display form of its keys, keeping entry order.
fn keyed<K: Display, V>(map: IndexMap<K, V>) -> IndexMap<String, V> {
    map.into_iter().map(|(key, value)| (key.to_string(), value)).collect()
}

fn order_lines<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Vec<OrderLine> {
    orders.into_iter().map(OrderLine::from).collect()
}

impl Report {
    /// Runs every view against `dataset`; `limit` bounds each top-N section.
    #[tracing::instrument(skip(dataset))]
    pub fn generate(dataset: &Dataset, limit: usize) -> Result<Self> {
        let products = ProductView::new(dataset);
        let orders = OrderView::new(dataset);
        let customers = CustomerView::new(dataset);

        let premium_products = optional(
            "premium_products",
            products.expensive_in_category(PREMIUM_CATEGORY, PREMIUM_THRESHOLD),
        )?
        .map(product_lines);

        let orders_with_category = optional(
            "orders_with_category",
            orders.containing_category(ORDERED_CATEGORY),
        )?
        .map(order_lines);

        let ordered_in_category = optional(
            "ordered_in_category",
            orders.ordered_products_in_category(ORDERED_CATEGORY),
        )?
        .map(product_lines);

        let discounted_products = optional(
            "discounted_products",
            products.discounted_in_category(DISCOUNT_CATEGORY, DISCOUNT_FACTOR),
        )?
        .map(|discounted| product_lines(&discounted));

        let cheapest_premium = optional(
            "cheapest_premium",
            products.cheapest_in_category(PREMIUM_CATEGORY, limit),
        )?
        .map(product_lines);

        let average_price_on_day = optional(
            "average_price_on_day",
            orders.average_product_price_on(snapshot_day()),
        )?;

        let premium_statistics = optional(
            "premium_statistics",
            products.category_statistics(PREMIUM_CATEGORY),
        )?
        .map(StatsLine::from);

        let month = DateRange::month(TOTAL_YEAR, TOTAL_MONTH)?;

        let report = Self {
            customer_count: dataset.customers().len(),
            product_count: dataset.products().len(),
            order_count: dataset.orders().len(),
            categories: dataset.categories().into_iter().map(str::to_string).collect(),
            premium_products,
            orders_with_category,
            ordered_in_category,
            discounted_products,
            ordered_in_window: product_lines(
                products.ordered_within(order_window(), Some(WINDOW_TIER)),
            ),
            cheapest_premium,
            recent_orders: order_lines(orders.most_recent(limit)),
            products_on_day: product_lines(orders.products_ordered_on(snapshot_day())),
            average_price_on_day,
            month_total: orders.total_within(month),
            month_total_by_reduce: orders.total_within_by_reduce(month),
            product_count_by_order: keyed(orders.product_count_by_order()?),
            totals_by_order: keyed(orders.totals_by_order()?),
            totals_by_order_via_reduce: keyed(orders.totals_by_order_via_reduce()?),
            premium_statistics,
            names_by_category: products
                .names_by_category()
                .into_iter()
                .map(|(category, names)| {
                    (
                        category.to_string(),
                        names.into_iter().map(str::to_string).collect(),
                    )
                })
                .collect(),
            most_expensive_by_category: products
                .most_expensive_by_category()
                .into_iter()
                .map(|(category, product)| (category.to_string(), ProductLine::from(product)))
                .collect(),
            most_expensive_name_by_category: products
                .most_expensive_name_by_category()
                .into_iter()
                .map(|(category, name)| (category.to_string(), name.to_string()))
                .collect(),
            customers: customers
                .spending_by_customer()
                .into_iter()
                .map(CustomerLine::from)
                .collect(),
            order_count_by_customer: customers
                .order_count_by_customer()
                .into_iter()
                .map(|(customer, count)| (customer.id().to_string(), count))
                .collect(),
            order_ids_by_customer: keyed(customers.order_ids_by_customer()),
            top_spenders: customers
                .top_spenders(limit)
                .into_iter()
                .map(CustomerLine::from)
                .collect(),
            most_ordered: product_lines(products.most_ordered(limit)),
        };
        tracing::debug!(
            sections_missing = report.missing_sections(),
            "report assembled"
        );
        Ok(report)
    }

    /// Number of optional sections the dataset could not answer.
    pub fn missing_sections(&self) -> usize {
        [
            self.premium_products.is_none(),
            self.orders_with_category.is_none(),
            self.ordered_in_category.is_none(),
            self.discounted_products.is_none(),
            self.cheapest_premium.is_none(),
            self.average_price_on_day.is_none(),
            self.premium_statistics.is_none(),
        ]
        .into_iter()
        .filter(|missing| *missing)
        .count()
    }
}
