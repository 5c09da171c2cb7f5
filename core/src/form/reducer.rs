// catalog_admin/src/form/reducer.rs

//! The create/edit form as a pure reducer over [`ProductRequest`].
//!
//! The reducer neither validates nor knows whether the form is creating or
//! editing; both concerns live with the page.

use crate::model::{CategoryId, ProductRequest, NO_CATEGORY};

/// One variant per editable field, plus a full reset.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
  SetName(String),
  SetDescription(String),
  /// NaN is allowed and passed through untouched.
  SetPrice(f64),
  SetCategory(CategoryId),
  /// Replace the whole draft: seeds an empty form or pre-fills from a product.
  Clear(ProductRequest),
}

impl FormAction {
  /// Parses the raw text of the price input.
  pub fn price_from_input(text: &str) -> Self {
    FormAction::SetPrice(parse_price(text))
  }

  /// Parses the raw value of the category selector.
  pub fn category_from_input(text: &str) -> Self {
    FormAction::SetCategory(parse_category(text))
  }
}

/// Unparsable input becomes NaN; the submit-time constraints reject it.
pub fn parse_price(text: &str) -> f64 {
  text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Unparsable input becomes [`NO_CATEGORY`].
pub fn parse_category(text: &str) -> CategoryId {
  text.trim().parse::<CategoryId>().unwrap_or(NO_CATEGORY)
}

/// Applies `action` to `state`, returning the next draft.
pub fn reduce(state: &ProductRequest, action: FormAction) -> ProductRequest {
  match action {
    FormAction::SetName(name) => ProductRequest { name, ..state.clone() },
    FormAction::SetDescription(description) => ProductRequest {
      description,
      ..state.clone()
    },
    FormAction::SetPrice(price) => ProductRequest { price, ..state.clone() },
    FormAction::SetCategory(category_id) => ProductRequest {
      category_id,
      ..state.clone()
    },
    FormAction::Clear(payload) => payload,
  }
}
