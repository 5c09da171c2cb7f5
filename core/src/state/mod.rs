// catalog_admin/src/state/mod.rs
pub mod categories;
pub mod products;
pub mod shared;

pub use categories::CategoryCache;
pub use products::{filter_products, ProductList};
pub use shared::Shared;
