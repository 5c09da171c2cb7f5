// catalog_admin/src/state/categories.rs

use crate::model::{Category, CategoryId};

/// Categories loaded once per page visit. Feeds the category selector and
/// resolves display names.
#[derive(Debug, Clone, Default)]
pub struct CategoryCache {
  categories: Vec<Category>,
}

impl CategoryCache {
  pub fn new(categories: Vec<Category>) -> Self {
    Self { categories }
  }

  pub fn replace(&mut self, categories: Vec<Category>) {
    self.categories = categories;
  }

  pub fn all(&self) -> &[Category] {
    &self.categories
  }

  pub fn is_empty(&self) -> bool {
    self.categories.is_empty()
  }

  pub fn len(&self) -> usize {
    self.categories.len()
  }

  /// Id of the first category in server order, the default for a new draft.
  pub fn first_id(&self) -> Option<CategoryId> {
    self.categories.first().map(|c| c.id)
  }

  pub fn contains(&self, id: CategoryId) -> bool {
    self.categories.iter().any(|c| c.id == id)
  }

  pub fn get(&self, id: CategoryId) -> Option<&Category> {
    self.categories.iter().find(|c| c.id == id)
  }

  pub fn name_of(&self, id: CategoryId) -> Option<&str> {
    self.get(id).map(|c| c.name.as_str())
  }
}
