// catalog_admin/src/model/category.rs

use serde::{Deserialize, Serialize};

pub type CategoryId = i64;

/// Sentinel used by a draft when no category has been loaded or selected.
/// Server-assigned ids start at 1, so 0 never names a real category.
pub const NO_CATEGORY: CategoryId = 0;

/// A product category. Read-only from the client's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
  pub id: CategoryId,
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "crate::model::null_as_default")]
  pub active: bool,
}
