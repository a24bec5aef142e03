//! Reusable catalog predicates.
//!
//! Each condition is a separate unit so callers can combine them, e.g.
//! `category_is("Books").and(price_above(100.0))`.

use chrono::NaiveDate;
use domain::{Order, Product};

use crate::join::any_match;
use crate::predicate::Predicate;
use crate::range::DateRange;

pub fn category_is(category: &str) -> impl Predicate<Product> + Copy + '_ {
    move |product: &Product| product.category() == category
}

/// Price strictly greater than `threshold`.
pub fn price_above(threshold: f64) -> impl Predicate<Product> + Copy {
    move |product: &Product| product.price() > threshold
}

pub fn price_at_least(threshold: f64) -> impl Predicate<Product> + Copy {
    move |product: &Product| product.price() >= threshold
}

pub fn placed_within(range: DateRange) -> impl Predicate<Order> + Copy {
    move |order: &Order| range.contains(order.order_date())
}

pub fn placed_on(date: NaiveDate) -> impl Predicate<Order> + Copy {
    move |order: &Order| order.order_date() == date
}

pub fn customer_tier_is(tier: u32) -> impl Predicate<Order> + Copy {
    move |order: &Order| order.customer().tier() == tier
}

/// The order contains at least one product of `category`.
pub fn contains_category(category: &str) -> impl Predicate<Order> + Copy + '_ {
    move |order: &Order| any_match(order.products(), &category_is(category))
}
