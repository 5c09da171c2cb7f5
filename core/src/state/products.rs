// catalog_admin/src/state/products.rs

//! The authoritative product collection, the search keyword, and the
//! filtered view derived from both.

use crate::model::Product;
use std::sync::Arc;
use tracing::{event, Level};

#[derive(Debug, Clone)]
pub struct ProductList {
  products: Arc<[Product]>,
  keyword: String,
  // Derived from `products` and `keyword`; rebuilt only when one changes.
  view: Arc<[Product]>,
}

impl Default for ProductList {
  fn default() -> Self {
    let empty: Arc<[Product]> = Arc::from(Vec::new());
    Self {
      products: Arc::clone(&empty),
      keyword: String::new(),
      view: empty,
    }
  }
}

impl ProductList {
  pub fn new(products: Vec<Product>) -> Self {
    let mut list = Self::default();
    list.set_products(products);
    list
  }

  /// Replaces the whole collection. There is no incremental patching.
  pub fn set_products(&mut self, products: Vec<Product>) {
    self.products = Arc::from(products);
    self.recompute();
  }

  pub fn set_keyword(&mut self, keyword: impl Into<String>) {
    let keyword = keyword.into();
    if keyword == self.keyword {
      return;
    }
    self.keyword = keyword;
    self.recompute();
  }

  pub fn clear_keyword(&mut self) {
    self.set_keyword(String::new());
  }

  pub fn keyword(&self) -> &str {
    &self.keyword
  }

  pub fn products(&self) -> Arc<[Product]> {
    Arc::clone(&self.products)
  }

  /// Products matching the keyword.
  ///
  /// With a blank keyword this is the very same allocation as
  /// [`ProductList::products`], so consumers can skip work with `Arc::ptr_eq`.
  pub fn filtered_view(&self) -> Arc<[Product]> {
    Arc::clone(&self.view)
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }

  fn recompute(&mut self) {
    self.view = filter_products(&self.products, &self.keyword);
    event!(
      Level::TRACE,
      total = self.products.len(),
      visible = self.view.len(),
      "Filtered view recomputed."
    );
  }
}

/// Pure filter behind [`ProductList::filtered_view`].
///
/// A keyword that is empty after trimming returns `products` itself.
/// Otherwise matching is a case-insensitive substring test against name,
/// description and category name, preserving collection order.
pub fn filter_products(products: &Arc<[Product]>, keyword: &str) -> Arc<[Product]> {
  let needle = keyword.trim().to_lowercase();
  if needle.is_empty() {
    return Arc::clone(products);
  }
  products
    .iter()
    .filter(|product| product.matches_keyword(&needle))
    .cloned()
    .collect()
}
