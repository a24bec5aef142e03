//! Catalog entities.

mod customer;
mod order;
mod product;

pub use customer::Customer;
pub use order::Order;
pub use product::Product;
