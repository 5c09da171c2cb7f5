// catalog_admin/src/pages/products.rs

//! Orchestrator for the products management page.
//!
//! Wires the gateway, the category cache, the product list and the form
//! reducer together: loads on mount, opens and closes the modal, submits and
//! deletes, and records loading and error state for the host to render.

use crate::error::{CatalogError, CatalogResult};
use crate::form::{draft, reduce, FormAction, FormConstraints};
use crate::gateway::CatalogGateway;
use crate::model::{Category, CategoryId, Product, ProductId, ProductRequest};
use crate::state::{CategoryCache, ProductList, Shared};
use async_trait::async_trait;
use futures_util::future;
use std::sync::Arc;
use tracing::{event, instrument, Level};

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to remove this product?";

pub const LOAD_PRODUCTS_FAILED: &str = "Failed to load products";
pub const SAVE_PRODUCT_FAILED: &str = "Failed to save the product";
pub const DELETE_PRODUCT_FAILED: &str = "Failed to delete the product";

/// What the open modal is doing. The draft itself does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
  Create,
  Edit(ProductId),
}

/// Observable page state, highest priority first: `Submitting`, `Loading`,
/// `ModalOpen`, `Error`, `ModalClosed`. `Idle` until the first mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
  Idle,
  Loading,
  ModalClosed,
  ModalOpen(ModalMode),
  Submitting,
  Error(String),
}

/// Yes/no prompt shown before a destructive action.
#[async_trait]
pub trait Confirm: Send + Sync {
  async fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
  Created,
  Mounted,
  Unmounted,
}

#[derive(Debug)]
struct PageData {
  lifecycle: Lifecycle,
  list: ProductList,
  categories: CategoryCache,
  draft: ProductRequest,
  modal: Option<ModalMode>,
  error: Option<String>,
  loads_in_flight: usize,
  submitting: bool,
  deleting: bool,
}

impl PageData {
  fn new() -> Self {
    let categories = CategoryCache::default();
    Self {
      lifecycle: Lifecycle::Created,
      list: ProductList::default(),
      draft: draft::empty(&categories),
      categories,
      modal: None,
      error: None,
      loads_in_flight: 0,
      submitting: false,
      deleting: false,
    }
  }

  fn is_unmounted(&self) -> bool {
    self.lifecycle == Lifecycle::Unmounted
  }

  fn close_modal(&mut self) {
    self.modal = None;
    self.draft = draft::empty(&self.categories);
  }
}

/// The products page. Cheap to clone; clones share the same state, so a host
/// may run a reload on another task while the user keeps typing.
pub struct ProductsPage<G: CatalogGateway> {
  gateway: Arc<G>,
  data: Shared<PageData>,
}

impl<G: CatalogGateway> Clone for ProductsPage<G> {
  fn clone(&self) -> Self {
    Self {
      gateway: Arc::clone(&self.gateway),
      data: self.data.clone(),
    }
  }
}

impl<G: CatalogGateway> ProductsPage<G> {
  pub fn new(gateway: Arc<G>) -> Self {
    Self {
      gateway,
      data: Shared::new(PageData::new()),
    }
  }

  // --- Lifecycle ---

  /// Loads products and categories concurrently.
  ///
  /// The two loads touch disjoint state and may finish in either order. A
  /// product failure sets the error banner; a category failure is only logged.
  #[instrument(name = "ProductsPage::mount", skip(self))]
  pub async fn mount(&self) {
    self.data.update(|d| d.lifecycle = Lifecycle::Mounted);
    event!(Level::DEBUG, "Products page mounted, loading data.");
    let (products, _) = future::join(self.load_products(), self.load_categories()).await;
    if let Err(e) = products {
      event!(Level::DEBUG, error = %e, "Initial product load failed.");
    }
  }

  /// After this, results of in-flight calls are dropped instead of applied.
  pub fn unmount(&self) {
    self.data.update(|d| d.lifecycle = Lifecycle::Unmounted);
    event!(Level::DEBUG, "Products page unmounted.");
  }

  /// Replaces the product collection with a fresh copy from the server.
  ///
  /// Independent of modal state. On failure the banner shows the extracted
  /// message and the current collection is left as it was.
  #[instrument(name = "ProductsPage::load_products", skip(self), err(Display))]
  pub async fn load_products(&self) -> CatalogResult<()> {
    self.data.update(|d| d.loads_in_flight += 1);
    let result = self.gateway.list_products().await;

    let mut d = self.data.write();
    d.loads_in_flight = d.loads_in_flight.saturating_sub(1);
    if d.is_unmounted() {
      event!(Level::DEBUG, "Product load resolved after unmount, ignoring.");
      return Ok(());
    }
    match result {
      Ok(products) => {
        event!(Level::DEBUG, count = products.len(), "Products loaded.");
        d.list.set_products(products);
        Ok(())
      }
      Err(remote) => {
        let err = CatalogError::from(remote);
        d.error = Some(err.user_message(LOAD_PRODUCTS_FAILED));
        Err(err)
      }
    }
  }

  async fn load_categories(&self) {
    let result = self.gateway.list_categories().await;

    let mut d = self.data.write();
    if d.is_unmounted() {
      event!(Level::DEBUG, "Category load resolved after unmount, ignoring.");
      return;
    }
    match result {
      Ok(categories) => {
        event!(Level::DEBUG, count = categories.len(), "Categories loaded.");
        d.categories.replace(categories);
      }
      // Non-blocking for the primary workflow, so not surfaced.
      Err(e) => event!(Level::WARN, error = %e, "Failed to load categories"),
    }
  }

  // --- Search ---

  pub fn set_keyword(&self, keyword: impl Into<String>) {
    self.data.update(|d| d.list.set_keyword(keyword));
  }

  pub fn clear_keyword(&self) {
    self.data.update(|d| d.list.clear_keyword());
  }

  pub fn keyword(&self) -> String {
    self.data.map_read(|d| d.list.keyword()).to_string()
  }

  pub fn filtered_view(&self) -> Arc<[Product]> {
    self.data.read().list.filtered_view()
  }

  pub fn products(&self) -> Arc<[Product]> {
    self.data.read().list.products()
  }

  /// Looks a product up in the loaded collection.
  pub fn product(&self, id: ProductId) -> Option<Product> {
    self.data.read().list.products().iter().find(|p| p.id == id).cloned()
  }

  /// Products of one category, straight from the server. Does not touch the
  /// page's collection.
  pub async fn products_in_category(&self, category_id: CategoryId) -> CatalogResult<Vec<Product>> {
    Ok(self.gateway.list_products_by_category(category_id).await?)
  }

  // --- Categories ---

  pub fn categories(&self) -> Vec<Category> {
    self.data.read().categories.all().to_vec()
  }

  pub fn category_name(&self, id: CategoryId) -> Option<String> {
    self.data.read().categories.name_of(id).map(str::to_string)
  }

  // --- Modal and form ---

  pub fn open_add_modal(&self) {
    let mut guard = self.data.write();
    let d = &mut *guard;
    d.draft = draft::empty(&d.categories);
    d.error = None;
    d.modal = Some(ModalMode::Create);
    event!(Level::DEBUG, category_id = d.draft.category_id, "Add modal opened.");
  }

  pub fn open_edit_modal(&self, product: &Product) {
    let mut guard = self.data.write();
    let d = &mut *guard;
    d.draft = draft::from_product(product, &d.categories);
    d.error = None;
    d.modal = Some(ModalMode::Edit(product.id));
    event!(Level::DEBUG, product_id = product.id, "Edit modal opened.");
  }

  /// Fetches the product's current server state, then opens the edit modal.
  #[instrument(name = "ProductsPage::open_edit_modal_by_id", skip(self), err(Display))]
  pub async fn open_edit_modal_by_id(&self, id: ProductId) -> CatalogResult<Product> {
    match self.gateway.get_product(id).await {
      Ok(product) => {
        self.open_edit_modal(&product);
        Ok(product)
      }
      Err(remote) => {
        let err = CatalogError::from(remote);
        self.data.update(|d| d.error = Some(err.user_message(LOAD_PRODUCTS_FAILED)));
        Err(err)
      }
    }
  }

  /// Cancel: closes the modal, discards the draft and the error.
  pub fn close_modal(&self) {
    self.data.update(|d| {
      d.close_modal();
      d.error = None;
    });
  }

  pub fn dispatch(&self, action: FormAction) {
    self.data.update(|d| d.draft = reduce(&d.draft, action));
  }

  pub fn draft(&self) -> ProductRequest {
    self.data.map_read(|d| &d.draft).clone()
  }

  pub fn modal(&self) -> Option<ModalMode> {
    self.data.read().modal
  }

  pub fn modal_title(&self) -> Option<&'static str> {
    self.modal().map(|mode| match mode {
      ModalMode::Create => "Add Product",
      ModalMode::Edit(_) => "Edit Product",
    })
  }

  /// Creates or updates the product described by the draft.
  ///
  /// On success the modal closes and the list is reloaded before returning.
  /// On failure the modal stays open with the draft intact and the error
  /// banner set. A second submit while one is running is rejected.
  #[instrument(name = "ProductsPage::submit", skip(self), err(Display))]
  pub async fn submit(&self) -> CatalogResult<Product> {
    let (mode, request) = {
      let mut d = self.data.write();
      if d.submitting {
        return Err(CatalogError::Busy("A save is already in progress.".to_string()));
      }
      let mode = d
        .modal
        .ok_or_else(|| CatalogError::Validation("No product form is open.".to_string()))?;
      if let Err(e) = FormConstraints::check(&d.draft, &d.categories) {
        d.error = Some(e.user_message(SAVE_PRODUCT_FAILED));
        return Err(e);
      }
      d.submitting = true;
      (mode, d.draft.clone())
    };

    event!(Level::DEBUG, ?mode, name = %request.name, "Submitting product form.");
    let result = match mode {
      ModalMode::Create => self.gateway.create_product(&request).await,
      ModalMode::Edit(id) => self.gateway.update_product(id, &request).await,
    };

    {
      let mut d = self.data.write();
      d.submitting = false;
      if d.is_unmounted() {
        return result.map_err(CatalogError::from);
      }
      if let Err(remote) = &result {
        let err = CatalogError::from(remote.clone());
        d.error = Some(err.user_message(SAVE_PRODUCT_FAILED));
        return Err(err);
      }
      d.close_modal();
      d.error = None;
    }

    let saved = result?;
    event!(Level::INFO, product_id = saved.id, "Product saved.");
    // A failed reload is already on the banner; the save itself succeeded.
    let _ = self.load_products().await;
    Ok(saved)
  }

  /// Deletes a product after explicit confirmation.
  ///
  /// Returns `Ok(false)` when the user declines; nothing is sent then.
  #[instrument(name = "ProductsPage::delete", skip(self, confirmer), err(Display))]
  pub async fn delete(&self, id: ProductId, confirmer: &dyn Confirm) -> CatalogResult<bool> {
    if !confirmer.confirm(DELETE_CONFIRMATION).await {
      event!(Level::DEBUG, "Delete declined.");
      return Ok(false);
    }

    self.data.update(|d| d.deleting = true);
    let result = self.gateway.delete_product(id).await;

    {
      let mut d = self.data.write();
      d.deleting = false;
      if d.is_unmounted() {
        return result.map(|_| true).map_err(CatalogError::from);
      }
      if let Err(remote) = &result {
        let err = CatalogError::from(remote.clone());
        d.error = Some(err.user_message(DELETE_PRODUCT_FAILED));
        return Err(err);
      }
      d.error = None;
    }

    event!(Level::INFO, product_id = id, "Product deleted.");
    let _ = self.load_products().await;
    Ok(true)
  }

  // --- Status ---

  pub fn error(&self) -> Option<String> {
    self.data.read().error.clone()
  }

  pub fn is_loading(&self) -> bool {
    let d = self.data.read();
    d.loads_in_flight > 0 || d.submitting || d.deleting
  }

  pub fn is_submitting(&self) -> bool {
    self.data.read().submitting
  }

  pub fn state(&self) -> PageState {
    let d = self.data.read();
    if d.lifecycle == Lifecycle::Created && d.loads_in_flight == 0 && d.modal.is_none() {
      return PageState::Idle;
    }
    if d.submitting {
      return PageState::Submitting;
    }
    if d.loads_in_flight > 0 || d.deleting {
      return PageState::Loading;
    }
    if let Some(mode) = d.modal {
      return PageState::ModalOpen(mode);
    }
    match &d.error {
      Some(message) => PageState::Error(message.clone()),
      None => PageState::ModalClosed,
    }
  }
}
