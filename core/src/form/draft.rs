// catalog_admin/src/form/draft.rs

//! Validated construction of drafts against the loaded category set, and the
//! submit-time form constraints.

use crate::error::{CatalogError, CatalogResult};
use crate::model::{CategoryId, Product, ProductRequest, NO_CATEGORY};
use crate::state::CategoryCache;

/// Category a fresh draft starts with: the first loaded one, or the sentinel.
pub fn default_category(categories: &CategoryCache) -> CategoryId {
  categories.first_id().unwrap_or(NO_CATEGORY)
}

/// Draft for the "Add Product" form.
pub fn empty(categories: &CategoryCache) -> ProductRequest {
  ProductRequest {
    name: String::new(),
    description: String::new(),
    price: 0.0,
    category_id: default_category(categories),
  }
}

/// Draft pre-filled with a product's current values.
///
/// A product without a category, or with an id the loaded set does not
/// know, gets the default category. With nothing loaded the product's own id is kept, since there
/// is nothing to check it against.
pub fn from_product(product: &Product, categories: &CategoryCache) -> ProductRequest {
  let known = categories.is_empty() || categories.contains(product.category_id);
  let category_id = if product.category_id != NO_CATEGORY && known {
    product.category_id
  } else {
    tracing::debug!(
      product_id = product.id,
      category_id = product.category_id,
      "Product references an unknown category, using the default."
    );
    default_category(categories)
  };

  ProductRequest {
    name: product.name.clone(),
    description: product.description.clone().unwrap_or_default(),
    price: product.price,
    category_id,
  }
}

/// The constraints a native form enforces before it lets a submit through:
/// name, price and category required, price not negative.
pub struct FormConstraints;

impl FormConstraints {
  pub fn check(draft: &ProductRequest, categories: &CategoryCache) -> CatalogResult<()> {
    if draft.name.trim().is_empty() {
      return Err(CatalogError::Validation("Name is required.".to_string()));
    }
    if !draft.price.is_finite() {
      return Err(CatalogError::Validation("Price must be a number.".to_string()));
    }
    if draft.price < 0.0 {
      return Err(CatalogError::Validation(
        "Price must be greater than or equal to 0.".to_string(),
      ));
    }
    if draft.category_id == NO_CATEGORY || !categories.contains(draft.category_id) {
      return Err(CatalogError::Validation("Please select a category.".to_string()));
    }
    Ok(())
  }
}
