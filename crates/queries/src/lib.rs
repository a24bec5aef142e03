//! Query and aggregation library for the catalog dataset.
//!
//! The generic building blocks work on any borrowed sequence:
//! - [`predicate`]: composable predicates and conjunction filtering
//! - [`join`]: existence tests and flattening across nested relations
//! - [`transform`]: non-mutating derived copies
//! - [`ordering`]: comparators, stable sort and top-N selection
//! - [`range`]: calendar date ranges
//! - [`grouping`]: group-by with per-group reductions
//! - [`stats`]: single-pass summary statistics
//!
//! [`views`] combines them into the catalog questions asked of a [`domain::Dataset`].

pub mod error;
pub mod grouping;
pub mod join;
pub mod ordering;
pub mod predicate;
pub mod range;
pub mod stats;
pub mod transform;
pub mod views;

pub use error::{QueryError, Result};
pub use grouping::{Groups, group_by, reduce, to_map};
pub use join::{any_match, filter_any_nested, flat_join};
pub use ordering::{SortOrder, comparing, sorted, then_comparing, top_n};
pub use predicate::{Conjunction, Predicate, filter};
pub use range::{DateRange, within};
pub use stats::{SummaryStatistics, average, summarize};
pub use transform::{derive_each, try_derive_each};
pub use views::{CustomerView, OrderView, ProductView};
