//! Product questions: category filters, discounts, rankings and per-category aggregates.

use domain::{Dataset, Product};
use indexmap::IndexMap;

use super::predicates::{category_is, customer_tier_is, placed_within, price_above};
use super::record_query;
use crate::error::{QueryError, Result};
use crate::grouping::group_by;
use crate::ordering::{SortOrder, comparing, then_comparing, top_n};
use crate::predicate::{Conjunction, Predicate, filter};
use crate::range::DateRange;
use crate::stats::{SummaryStatistics, summarize};
use crate::transform::try_derive_each;

/// Questions about products.
#[derive(Debug, Clone, Copy)]
pub struct ProductView<'d> {
    dataset: &'d Dataset,
}

impl<'d> ProductView<'d> {
    pub fn new(dataset: &'d Dataset) -> Self {
        Self { dataset }
    }

    /// Fails if no product carries `category`.
    ///
    /// A known category with no matching rows is a valid empty result; a
    /// category that does not exist at all is a caller mistake.
    fn require_category(&self, category: &str) -> Result<()> {
        if self.dataset.has_category(category) {
            Ok(())
        } else {
            Err(QueryError::UnknownCategory(category.to_string()))
        }
    }

    fn products_in(&self, category: &str) -> Result<Vec<&'d Product>> {
        self.require_category(category)?;
        Ok(filter(self.dataset.products(), &category_is(category)))
    }

    /// Every product in `category`.
    #[tracing::instrument(skip(self))]
    pub fn in_category(&self, category: &str) -> Result<Vec<&'d Product>> {
        record_query("products_in_category");
        self.products_in(category)
    }

    /// Products in `category` priced strictly above `min_price`.
    #[tracing::instrument(skip(self))]
    pub fn expensive_in_category(&self, category: &str, min_price: f64) -> Result<Vec<&'d Product>> {
        record_query("expensive_in_category");
        self.require_category(category)?;
        let conditions = Conjunction::new()
            .with(category_is(category))
            .with(price_above(min_price));
        let products = filter(self.dataset.products(), &conditions);
        tracing::debug!(matched = products.len(), "expensive products selected");
        Ok(products)
    }

    /// Discounted copies of the products in `category`.
    ///
    /// The dataset's products are left unchanged.
    #[tracing::instrument(skip(self))]
    pub fn discounted_in_category(&self, category: &str, factor: f64) -> Result<Vec<Product>> {
        record_query("discounted_in_category");
        let products = self.products_in(category)?;
        let discounted = try_derive_each(products, |p| p.with_discount(factor))?;
        Ok(discounted)
    }

    /// Products that appear in at least one order placed within `range`,
    /// optionally only counting orders from customers of `tier`.
    #[tracing::instrument(skip(self))]
    pub fn ordered_within(&self, range: DateRange, tier: Option<u32>) -> Vec<&'d Product> {
        record_query("ordered_within");
        let dataset = self.dataset;
        let mut order_conditions = Conjunction::new().with(placed_within(range));
        if let Some(tier) = tier {
            order_conditions.push(customer_tier_is(tier));
        }
        let products = filter(dataset.products(), &|product: &Product| {
            dataset
                .orders_of(product)
                .any(|order| order_conditions.test(order))
        });
        tracing::debug!(matched = products.len(), "ordered products selected");
        products
    }

    /// The `n` cheapest products in `category`, cheapest first.
    #[tracing::instrument(skip(self))]
    pub fn cheapest_in_category(&self, category: &str, n: usize) -> Result<Vec<&'d Product>> {
        record_query("cheapest_in_category");
        let products = self.products_in(category)?;
        Ok(top_n(
            products,
            comparing(Product::price, SortOrder::Ascending),
            n,
        ))
    }

    /// The `n` products that appear in the most orders; ties go to the cheaper product.
    #[tracing::instrument(skip(self))]
    pub fn most_ordered(&self, n: usize) -> Vec<&'d Product> {
        record_query("most_ordered");
        top_n(
            self.dataset.products(),
            then_comparing(
                comparing(|p: &Product| p.order_ids().len(), SortOrder::Descending),
                comparing(Product::price, SortOrder::Ascending),
            ),
            n,
        )
    }

    /// Count, sum, min, max and average price within `category`.
    #[tracing::instrument(skip(self))]
    pub fn category_statistics(&self, category: &str) -> Result<SummaryStatistics> {
        record_query("category_statistics");
        let products = self.products_in(category)?;
        Ok(summarize(products, Product::price))
    }

    /// Product names per category, categories in first-seen order.
    #[tracing::instrument(skip(self))]
    pub fn names_by_category(&self) -> IndexMap<&'d str, Vec<&'d str>> {
        record_query("names_by_category");
        group_by(self.dataset.products(), Product::category).mapping(Product::name)
    }

    /// The highest priced product per category; ties keep the first loaded.
    #[tracing::instrument(skip(self))]
    pub fn most_expensive_by_category(&self) -> IndexMap<&'d str, &'d Product> {
        record_query("most_expensive_by_category");
        group_by(self.dataset.products(), Product::category).max_by(Product::price)
    }

    /// Name of the highest priced product per category.
    #[tracing::instrument(skip(self))]
    pub fn most_expensive_name_by_category(&self) -> IndexMap<&'d str, &'d str> {
        record_query("most_expensive_name_by_category");
        group_by(self.dataset.products(), Product::category)
            .max_by(Product::price)
            .into_iter()
            .map(|(category, product)| (category, product.name()))
            .collect()
    }
}
