// catalog_admin/src/gateway/mod.rs

//! The remote data gateway: one method per REST operation the admin UI uses.
//!
//! Every method issues exactly one HTTP call and either returns the decoded
//! body or a [`RemoteError`]. There are no retries; a transient failure
//! surfaces immediately to the caller.

pub mod http;

pub use http::{HttpGateway, HttpGatewayOptions, DEFAULT_BASE_URL};

use crate::error::RemoteError;
use crate::model::{Category, CategoryId, LoginRequest, LoginResponse, Product, ProductId, ProductRequest};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait CatalogGateway: Send + Sync {
  /// `POST /auth/login`
  async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, RemoteError>;

  /// `GET /products`
  async fn list_products(&self) -> Result<Vec<Product>, RemoteError>;

  /// `GET /products/{id}`
  async fn get_product(&self, id: ProductId) -> Result<Product, RemoteError>;

  /// `GET /products/count`
  async fn count_products(&self) -> Result<u64, RemoteError>;

  /// `GET /products/category/{id}`
  async fn list_products_by_category(&self, category_id: CategoryId) -> Result<Vec<Product>, RemoteError>;

  /// `POST /products`
  async fn create_product(&self, req: &ProductRequest) -> Result<Product, RemoteError>;

  /// `PUT /products/{id}`
  async fn update_product(&self, id: ProductId, req: &ProductRequest) -> Result<Product, RemoteError>;

  /// `DELETE /products/{id}`
  async fn delete_product(&self, id: ProductId) -> Result<(), RemoteError>;

  /// `GET /categories`
  async fn list_categories(&self) -> Result<Vec<Category>, RemoteError>;
}

#[async_trait]
impl<G: CatalogGateway + ?Sized> CatalogGateway for Arc<G> {
  async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, RemoteError> {
    (**self).login(req).await
  }

  async fn list_products(&self) -> Result<Vec<Product>, RemoteError> {
    (**self).list_products().await
  }

  async fn get_product(&self, id: ProductId) -> Result<Product, RemoteError> {
    (**self).get_product(id).await
  }

  async fn count_products(&self) -> Result<u64, RemoteError> {
    (**self).count_products().await
  }

  async fn list_products_by_category(&self, category_id: CategoryId) -> Result<Vec<Product>, RemoteError> {
    (**self).list_products_by_category(category_id).await
  }

  async fn create_product(&self, req: &ProductRequest) -> Result<Product, RemoteError> {
    (**self).create_product(req).await
  }

  async fn update_product(&self, id: ProductId, req: &ProductRequest) -> Result<Product, RemoteError> {
    (**self).update_product(id, req).await
  }

  async fn delete_product(&self, id: ProductId) -> Result<(), RemoteError> {
    (**self).delete_product(id).await
  }

  async fn list_categories(&self) -> Result<Vec<Category>, RemoteError> {
    (**self).list_categories().await
  }
}
