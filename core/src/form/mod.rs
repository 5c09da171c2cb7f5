// catalog_admin/src/form/mod.rs

//! Product create/edit form: typed actions, the reducer, and draft construction.

pub mod draft;
pub mod reducer;

pub use draft::FormConstraints;
pub use reducer::{parse_category, parse_price, reduce, FormAction};
