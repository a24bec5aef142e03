//! Text and JSON rendering.

use std::fmt::{self, Display, Formatter};

use crate::config::ReportFormat;
use crate::error::Result;
use crate::sections::{
    CustomerLine, DISCOUNT_CATEGORY, ORDERED_CATEGORY, OrderLine, PREMIUM_CATEGORY,
    PREMIUM_THRESHOLD, ProductLine, Report, StatsLine, TOTAL_MONTH, TOTAL_YEAR, WINDOW_TIER,
    order_window, snapshot_day,
};

/// Renders `report` in the requested format.
pub fn render(report: &Report, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(report.to_string()),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

impl Display for ProductLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}] {:.2}",
            self.id, self.name, self.category, self.price
        )
    }
}

impl Display for OrderLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} on {} by {}: {} products, {:.2}",
            self.id, self.order_date, self.customer, self.product_count, self.total
        )
    }
}

impl Display for CustomerLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}: {} orders, {:.2} spent",
            self.id, self.name, self.order_count, self.total_spent
        )
    }
}

impl Display for StatsLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "count={}, sum={:.2}", self.count, self.sum)?;
        if let (Some(min), Some(average), Some(max)) = (self.min, self.average, self.max) {
            write!(f, ", min={min:.2}, average={average:.2}, max={max:.2}")?;
        }
        Ok(())
    }
}

fn heading(f: &mut Formatter<'_>, title: impl Display) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "== {title}")
}

fn lines<T: Display>(f: &mut Formatter<'_>, rows: &[T]) -> fmt::Result {
    if rows.is_empty() {
        return writeln!(f, "  (none)");
    }
    for row in rows {
        writeln!(f, "  {row}")?;
    }
    Ok(())
}

fn optional_lines<T: Display>(
    f: &mut Formatter<'_>,
    rows: Option<&[T]>,
    category: &str,
) -> fmt::Result {
    match rows {
        Some(rows) => lines(f, rows),
        None => writeln!(f, "  (no {category} in this catalog)"),
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Catalog: {} customers, {} products, {} orders",
            self.customer_count, self.product_count, self.order_count
        )?;
        writeln!(f, "Categories: {}", self.categories.join(", "))?;

        heading(f, format_args!("{PREMIUM_CATEGORY} priced above {PREMIUM_THRESHOLD:.2}"))?;
        optional_lines(f, self.premium_products.as_deref(), PREMIUM_CATEGORY)?;

        heading(f, format_args!("Orders containing {ORDERED_CATEGORY}"))?;
        optional_lines(f, self.orders_with_category.as_deref(), ORDERED_CATEGORY)?;

        heading(f, format_args!("{ORDERED_CATEGORY} products ordered"))?;
        optional_lines(f, self.ordered_in_category.as_deref(), ORDERED_CATEGORY)?;

        heading(f, format_args!("{DISCOUNT_CATEGORY} after discount"))?;
        optional_lines(f, self.discounted_products.as_deref(), DISCOUNT_CATEGORY)?;

        heading(
            f,
            format_args!("Ordered by tier {WINDOW_TIER} customers within {}", order_window()),
        )?;
        lines(f, &self.ordered_in_window)?;

        heading(f, format_args!("Cheapest {PREMIUM_CATEGORY}"))?;
        optional_lines(f, self.cheapest_premium.as_deref(), PREMIUM_CATEGORY)?;

        heading(f, "Most recent orders")?;
        lines(f, &self.recent_orders)?;

        heading(f, format_args!("Products ordered on {}", snapshot_day()))?;
        lines(f, &self.products_on_day)?;
        match self.average_price_on_day {
            Some(average) => writeln!(f, "  average price {average:.2}")?,
            None => writeln!(f, "  average price undefined")?,
        }

        heading(f, format_args!("Total for {TOTAL_YEAR}-{TOTAL_MONTH:02}"))?;
        writeln!(f, "  {:.2}", self.month_total)?;
        writeln!(f, "  {:.2} (by reduce)", self.month_total_by_reduce)?;

        heading(f, "Per order")?;
        for (order, count) in &self.product_count_by_order {
            let total = self.totals_by_order.get(order).copied().unwrap_or_default();
            let folded = self
                .totals_by_order_via_reduce
                .get(order)
                .copied()
                .unwrap_or_default();
            writeln!(
                f,
                "  #{order}: {count} products, {total:.2} (by reduce {folded:.2})"
            )?;
        }

        heading(f, format_args!("{PREMIUM_CATEGORY} price statistics"))?;
        match &self.premium_statistics {
            Some(stats) => writeln!(f, "  {stats}")?,
            None => writeln!(f, "  (no {PREMIUM_CATEGORY} in this catalog)")?,
        }

        heading(f, "Product names by category")?;
        for (category, names) in &self.names_by_category {
            writeln!(f, "  {category}: {}", names.join(", "))?;
        }

        heading(f, "Most expensive by category")?;
        for (category, product) in &self.most_expensive_by_category {
            writeln!(f, "  {category}: {product}")?;
        }

        heading(f, "Most expensive name by category")?;
        for (category, name) in &self.most_expensive_name_by_category {
            writeln!(f, "  {category}: {name}")?;
        }

        heading(f, "Customers")?;
        lines(f, &self.customers)?;

        heading(f, "Orders per customer")?;
        for (customer, count) in &self.order_count_by_customer {
            let ids = self
                .order_ids_by_customer
                .get(customer)
                .map(|ids| ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))
                .unwrap_or_default();
            writeln!(f, "  #{customer}: {count} orders [{ids}]")?;
        }

        heading(f, "Top spenders")?;
        lines(f, &self.top_spenders)?;

        heading(f, "Most ordered products")?;
        lines(f, &self.most_ordered)
    }
}
