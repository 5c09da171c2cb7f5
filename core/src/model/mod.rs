// catalog_admin/src/model/mod.rs

//! Wire types exchanged with the catalog REST API.

pub mod auth;
pub mod category;
pub mod product;

pub use auth::{LoginRequest, LoginResponse};
pub use category::{Category, CategoryId, NO_CATEGORY};
pub use product::{Product, ProductId, ProductRequest};

use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` like a missing key. The API sends `null`
/// for a product without a category and for an unset `active` flag.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de> + Default,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
