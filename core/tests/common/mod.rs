// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use async_trait::async_trait;
use catalog_admin::{
  CatalogGateway, Category, CategoryId, Confirm, LoginRequest, LoginResponse, Product, ProductId, ProductRequest,
  RemoteError, NO_CATEGORY,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::Level;

// --- Fixtures ---

pub fn electronics() -> Category {
  Category {
    id: 1,
    name: "Electronics".to_string(),
    description: Some("Gadgets and devices".to_string()),
    active: true,
  }
}

pub fn furniture() -> Category {
  Category {
    id: 2,
    name: "Furniture".to_string(),
    description: None,
    active: true,
  }
}

pub fn product(id: ProductId, name: &str, description: &str, price: f64, category: &Category) -> Product {
  Product {
    id,
    name: name.to_string(),
    description: Some(description.to_string()),
    price,
    category_id: category.id,
    category_name: Some(category.name.clone()),
    active: true,
    created_at: None,
    created_by: Some("admin".to_string()),
    updated_at: None,
    updated_by: None,
  }
}

pub fn laptop_pro() -> Product {
  product(1, "Laptop Pro", "16 inch workstation laptop", 2499.0, &electronics())
}

pub fn office_chair() -> Product {
  product(2, "Office Chair", "Ergonomic mesh chair", 349.5, &furniture())
}

/// A product the server returned with `categoryId: null` and `active: null`.
pub fn uncategorized() -> Product {
  Product {
    id: 3,
    name: "Gift Card".to_string(),
    description: None,
    price: 25.0,
    category_id: NO_CATEGORY,
    category_name: None,
    active: false,
    created_at: None,
    created_by: None,
    updated_at: None,
    updated_by: None,
  }
}

// --- Recording fake gateway ---

/// One entry per gateway call, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
  Login(String),
  ListProducts,
  GetProduct(ProductId),
  CountProducts,
  ListProductsByCategory(CategoryId),
  CreateProduct(ProductRequest),
  UpdateProduct(ProductId, ProductRequest),
  DeleteProduct(ProductId),
  ListCategories,
}

/// Operation names accepted by [`FakeGateway::fail`].
pub mod ops {
  pub const LOGIN: &str = "login";
  pub const LIST_PRODUCTS: &str = "list_products";
  pub const GET_PRODUCT: &str = "get_product";
  pub const COUNT_PRODUCTS: &str = "count_products";
  pub const CREATE_PRODUCT: &str = "create_product";
  pub const UPDATE_PRODUCT: &str = "update_product";
  pub const DELETE_PRODUCT: &str = "delete_product";
  pub const LIST_CATEGORIES: &str = "list_categories";
}

/// In-memory stand-in for the catalog API. Mutations change the stored
/// products so a reload observes them, like the real server.
pub struct FakeGateway {
  products: Mutex<Vec<Product>>,
  categories: Mutex<Vec<Category>>,
  count: Mutex<Option<u64>>,
  failures: Mutex<HashMap<&'static str, RemoteError>>,
  calls: Mutex<Vec<Call>>,
  next_id: AtomicI64,
  list_gate: Mutex<Option<Arc<Notify>>>,
  create_gate: Mutex<Option<Arc<Notify>>>,
  pub list_products_calls: AtomicUsize,
}

impl FakeGateway {
  pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Arc<Self> {
    let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    Arc::new(Self {
      products: Mutex::new(products),
      categories: Mutex::new(categories),
      count: Mutex::new(None),
      failures: Mutex::new(HashMap::new()),
      calls: Mutex::new(Vec::new()),
      next_id: AtomicI64::new(next_id),
      list_gate: Mutex::new(None),
      create_gate: Mutex::new(None),
      list_products_calls: AtomicUsize::new(0),
    })
  }

  /// Two products, two categories.
  pub fn seeded() -> Arc<Self> {
    Self::new(vec![laptop_pro(), office_chair()], vec![electronics(), furniture()])
  }

  /// Makes every later call of `op` fail with `err`.
  pub fn fail(&self, op: &'static str, err: RemoteError) {
    self.failures.lock().insert(op, err);
  }

  pub fn recover(&self, op: &'static str) {
    self.failures.lock().remove(op);
  }

  /// Overrides the value returned by `count_products`.
  pub fn set_count(&self, count: u64) {
    *self.count.lock() = Some(count);
  }

  /// `list_products` waits for the returned notifier before answering.
  pub fn gate_list_products(&self) -> Arc<Notify> {
    let notify = Arc::new(Notify::new());
    *self.list_gate.lock() = Some(Arc::clone(&notify));
    notify
  }

  /// `create_product` records the call, then waits for the returned
  /// notifier before answering.
  pub fn gate_create_product(&self) -> Arc<Notify> {
    let notify = Arc::new(Notify::new());
    *self.create_gate.lock() = Some(Arc::clone(&notify));
    notify
  }

  pub fn calls(&self) -> Vec<Call> {
    self.calls.lock().clone()
  }

  pub fn count_calls(&self, pred: impl Fn(&Call) -> bool) -> usize {
    self.calls.lock().iter().filter(|c| pred(c)).count()
  }

  pub fn stored_products(&self) -> Vec<Product> {
    self.products.lock().clone()
  }

  fn record(&self, call: Call, op: &'static str) -> Result<(), RemoteError> {
    self.calls.lock().push(call);
    match self.failures.lock().get(op) {
      Some(err) => Err(err.clone()),
      None => Ok(()),
    }
  }

  fn category_name(&self, id: CategoryId) -> Option<String> {
    self.categories.lock().iter().find(|c| c.id == id).map(|c| c.name.clone())
  }

  fn not_found() -> RemoteError {
    RemoteError::status(404, Some("Product not found".to_string()))
  }
}

#[async_trait]
impl CatalogGateway for FakeGateway {
  async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, RemoteError> {
    self.record(Call::Login(req.username.clone()), ops::LOGIN)?;
    if req.password != "secret" {
      return Err(RemoteError::status(401, None));
    }
    Ok(LoginResponse {
      token: format!("token-for-{}", req.username),
      username: req.username.clone(),
      role: "ADMIN".to_string(),
    })
  }

  async fn list_products(&self) -> Result<Vec<Product>, RemoteError> {
    self.list_products_calls.fetch_add(1, Ordering::SeqCst);
    let gate = self.list_gate.lock().clone();
    if let Some(gate) = gate {
      gate.notified().await;
    }
    self.record(Call::ListProducts, ops::LIST_PRODUCTS)?;
    Ok(self.products.lock().clone())
  }

  async fn get_product(&self, id: ProductId) -> Result<Product, RemoteError> {
    self.record(Call::GetProduct(id), ops::GET_PRODUCT)?;
    self
      .products
      .lock()
      .iter()
      .find(|p| p.id == id)
      .cloned()
      .ok_or_else(Self::not_found)
  }

  async fn count_products(&self) -> Result<u64, RemoteError> {
    self.record(Call::CountProducts, ops::COUNT_PRODUCTS)?;
    let len = self.products.lock().len() as u64;
    let configured = *self.count.lock();
    Ok(configured.unwrap_or(len))
  }

  async fn list_products_by_category(&self, category_id: CategoryId) -> Result<Vec<Product>, RemoteError> {
    self.record(Call::ListProductsByCategory(category_id), ops::LIST_PRODUCTS)?;
    Ok(
      self
        .products
        .lock()
        .iter()
        .filter(|p| p.category_id == category_id)
        .cloned()
        .collect(),
    )
  }

  async fn create_product(&self, req: &ProductRequest) -> Result<Product, RemoteError> {
    self.record(Call::CreateProduct(req.clone()), ops::CREATE_PRODUCT)?;
    let gate = self.create_gate.lock().clone();
    if let Some(gate) = gate {
      gate.notified().await;
    }
    let id = self.next_id.fetch_add(1, Ordering::SeqCst);
    let created = Product {
      id,
      name: req.name.clone(),
      description: Some(req.description.clone()),
      price: req.price,
      category_id: req.category_id,
      category_name: self.category_name(req.category_id),
      active: true,
      created_at: None,
      created_by: Some("admin".to_string()),
      updated_at: None,
      updated_by: None,
    };
    self.products.lock().push(created.clone());
    Ok(created)
  }

  async fn update_product(&self, id: ProductId, req: &ProductRequest) -> Result<Product, RemoteError> {
    self.record(Call::UpdateProduct(id, req.clone()), ops::UPDATE_PRODUCT)?;
    let category_name = self.category_name(req.category_id);
    let mut products = self.products.lock();
    let existing = products.iter_mut().find(|p| p.id == id).ok_or_else(Self::not_found)?;
    existing.name = req.name.clone();
    existing.description = Some(req.description.clone());
    existing.price = req.price;
    existing.category_id = req.category_id;
    existing.category_name = category_name;
    existing.updated_by = Some("admin".to_string());
    Ok(existing.clone())
  }

  async fn delete_product(&self, id: ProductId) -> Result<(), RemoteError> {
    self.record(Call::DeleteProduct(id), ops::DELETE_PRODUCT)?;
    let mut products = self.products.lock();
    let before = products.len();
    products.retain(|p| p.id != id);
    if products.len() == before {
      return Err(Self::not_found());
    }
    Ok(())
  }

  async fn list_categories(&self) -> Result<Vec<Category>, RemoteError> {
    self.record(Call::ListCategories, ops::LIST_CATEGORIES)?;
    Ok(self.categories.lock().clone())
  }
}

// --- Scripted confirmation prompt ---

/// Answers every prompt with a fixed reply and remembers what it was asked.
pub struct ScriptedConfirm {
  answer: bool,
  pub prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
  pub fn accepting() -> Self {
    Self {
      answer: true,
      prompts: Mutex::new(Vec::new()),
    }
  }

  pub fn declining() -> Self {
    Self {
      answer: false,
      prompts: Mutex::new(Vec::new()),
    }
  }
}

#[async_trait]
impl Confirm for ScriptedConfirm {
  async fn confirm(&self, message: &str) -> bool {
    self.prompts.lock().push(message.to_string());
    self.answer
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
