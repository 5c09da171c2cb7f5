// catalog_admin/src/gateway/http.rs

//! `reqwest`-backed implementation of [`CatalogGateway`].

use crate::error::{CatalogError, CatalogResult, RemoteError};
use crate::gateway::CatalogGateway;
use crate::model::{Category, CategoryId, LoginRequest, LoginResponse, Product, ProductId, ProductRequest};
use crate::session::Session;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{event, instrument, Level};

/// Where the catalog API lives when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone)]
pub struct HttpGatewayOptions {
  /// API root, e.g. `https://catalog.example.com/api`. A trailing `/` is ignored.
  pub base_url: String,
  pub user_agent: Option<String>,
}

impl Default for HttpGatewayOptions {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      user_agent: None,
    }
  }
}

/// Error body shape produced by the catalog API.
#[derive(Deserialize)]
struct ErrorBody {
  message: Option<String>,
}

pub struct HttpGateway {
  base_url: String,
  http: HttpClient,
  session: Option<Session>,
}

impl HttpGateway {
  /// Builds a gateway. When `session` is given, its token (if any) is sent as
  /// a bearer token on every request; it is read per request so a login that
  /// happens later is picked up.
  pub fn new(options: HttpGatewayOptions, session: Option<Session>) -> CatalogResult<Self> {
    let base_url = options.base_url.trim_end_matches('/').to_string();
    if base_url.is_empty() {
      return Err(CatalogError::Validation("base_url is required".to_string()));
    }

    let user_agent = options
      .user_agent
      .unwrap_or_else(|| concat!("catalog-admin/", env!("CARGO_PKG_VERSION")).to_string());
    let http = HttpClient::builder()
      .user_agent(user_agent)
      .build()
      .map_err(|e| CatalogError::Internal(format!("HTTP client construction failed: {}", e)))?;

    Ok(Self { base_url, http, session })
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  fn request(&self, method: Method, path: &str) -> RequestBuilder {
    let url = format!("{}{}", self.base_url, path);
    let builder = self.http.request(method, url);
    match self.session.as_ref().and_then(Session::token) {
      Some(token) => builder.bearer_auth(token),
      None => builder,
    }
  }

  async fn send(&self, builder: RequestBuilder) -> Result<Response, RemoteError> {
    let response = builder.send().await.map_err(|e| {
      event!(Level::WARN, error = %e, "Transport failure.");
      RemoteError::transport(e.to_string())
    })?;

    let status = response.status();
    if status.is_success() {
      return Ok(response);
    }

    // The body is best effort: a missing or non-JSON body still yields the status.
    let server_message = response
      .bytes()
      .await
      .ok()
      .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
      .and_then(|body| body.message);
    event!(Level::WARN, status = status.as_u16(), ?server_message, "Non-success response.");
    Err(RemoteError::status(status.as_u16(), server_message))
  }

  async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, RemoteError> {
    let response = self.send(builder).await?;
    let status = response.status().as_u16();
    response
      .json::<T>()
      .await
      .map_err(|e| RemoteError::decode(status, format!("Response body could not be decoded: {}", e)))
  }
}

#[async_trait]
impl CatalogGateway for HttpGateway {
  #[instrument(name = "HttpGateway::login", skip_all, fields(username = %req.username), err(Display))]
  async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, RemoteError> {
    self.send_json(self.request(Method::POST, "/auth/login").json(req)).await
  }

  #[instrument(name = "HttpGateway::list_products", skip(self), err(Display))]
  async fn list_products(&self) -> Result<Vec<Product>, RemoteError> {
    self.send_json(self.request(Method::GET, "/products")).await
  }

  #[instrument(name = "HttpGateway::get_product", skip(self), err(Display))]
  async fn get_product(&self, id: ProductId) -> Result<Product, RemoteError> {
    self.send_json(self.request(Method::GET, &format!("/products/{}", id))).await
  }

  #[instrument(name = "HttpGateway::count_products", skip(self), err(Display))]
  async fn count_products(&self) -> Result<u64, RemoteError> {
    self.send_json(self.request(Method::GET, "/products/count")).await
  }

  #[instrument(name = "HttpGateway::list_products_by_category", skip(self), err(Display))]
  async fn list_products_by_category(&self, category_id: CategoryId) -> Result<Vec<Product>, RemoteError> {
    self
      .send_json(self.request(Method::GET, &format!("/products/category/{}", category_id)))
      .await
  }

  #[instrument(name = "HttpGateway::create_product", skip_all, fields(name = %req.name), err(Display))]
  async fn create_product(&self, req: &ProductRequest) -> Result<Product, RemoteError> {
    self.send_json(self.request(Method::POST, "/products").json(req)).await
  }

  #[instrument(name = "HttpGateway::update_product", skip(self, req), fields(name = %req.name), err(Display))]
  async fn update_product(&self, id: ProductId, req: &ProductRequest) -> Result<Product, RemoteError> {
    self
      .send_json(self.request(Method::PUT, &format!("/products/{}", id)).json(req))
      .await
  }

  #[instrument(name = "HttpGateway::delete_product", skip(self), err(Display))]
  async fn delete_product(&self, id: ProductId) -> Result<(), RemoteError> {
    self.send(self.request(Method::DELETE, &format!("/products/{}", id))).await?;
    Ok(())
  }

  #[instrument(name = "HttpGateway::list_categories", skip(self), err(Display))]
  async fn list_categories(&self) -> Result<Vec<Category>, RemoteError> {
    self.send_json(self.request(Method::GET, "/categories")).await
  }
}

impl std::fmt::Debug for HttpGateway {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("HttpGateway")
      .field("base_url", &self.base_url)
      .field("session", &self.session)
      .finish()
  }
}
