// catalog_admin/src/model/product.rs

use crate::model::category::CategoryId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type ProductId = i64;

/// A catalog product as returned by the API.
///
/// `id` is server-assigned and never changes; everything else may be
/// rewritten by an update. The audit fields are informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  pub price: f64,
  /// [`NO_CATEGORY`](crate::model::NO_CATEGORY) when the product has none.
  #[serde(default, deserialize_with = "crate::model::null_as_default")]
  pub category_id: CategoryId,
  #[serde(default)]
  pub category_name: Option<String>, // denormalized by the server
  #[serde(default, deserialize_with = "crate::model::null_as_default")]
  pub active: bool,
  #[serde(default)]
  pub created_at: Option<NaiveDateTime>,
  #[serde(default)]
  pub created_by: Option<String>,
  #[serde(default)]
  pub updated_at: Option<NaiveDateTime>,
  #[serde(default)]
  pub updated_by: Option<String>,
}

impl Product {
  /// True when name, description or category name contains `needle`.
  /// `needle` must already be trimmed and lower-cased.
  pub fn matches_keyword(&self, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);
    contains(&self.name)
      || self.description.as_deref().is_some_and(contains)
      || self.category_name.as_deref().is_some_and(contains)
  }

  /// Price with two decimals, as shown in the products table.
  pub fn price_display(&self) -> String {
    format!("{:.2}", self.price)
  }

  pub fn description_display(&self) -> &str {
    match self.description.as_deref() {
      Some(d) if !d.is_empty() => d,
      _ => "-",
    }
  }
}

/// Write model for create and update: no id, no audit fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
  pub name: String,
  pub description: String,
  /// May be NaN when the price input could not be parsed.
  pub price: f64,
  pub category_id: CategoryId,
}
