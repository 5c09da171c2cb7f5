// tests/http_gateway_tests.rs
//! Drives `HttpGateway` against a local axum server standing in for the
//! catalog API.
mod common;

use axum::extract::{Path, State};
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use catalog_admin::{
  CatalogError, CatalogGateway, HttpGateway, HttpGatewayOptions, LoginRequest, ProductRequest, Session, NO_CATEGORY,
};
use common::*;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;

// --- Stub server ---

#[derive(Clone, Default)]
struct Recorded {
  auth_headers: Arc<Mutex<Vec<Option<String>>>>,
  bodies: Arc<Mutex<Vec<Value>>>,
}

impl Recorded {
  fn last_auth(&self) -> Option<String> {
    self.auth_headers.lock().last().cloned().flatten()
  }

  fn last_body(&self) -> Option<Value> {
    self.bodies.lock().last().cloned()
  }
}

fn product_json(id: i64, name: &str, category_id: i64) -> Value {
  json!({
    "id": id,
    "name": name,
    "description": "From the stub",
    "price": 10.5,
    "categoryId": category_id,
    "categoryName": if category_id == 1 { "Electronics" } else { "Furniture" },
    "active": true,
    "createdAt": "2024-05-01T10:00:00",
    "createdBy": "admin",
    "updatedAt": null,
    "updatedBy": null
  })
}

// The API leaves category fields and `active` null when they are unset.
fn uncategorized_product_json(id: i64, name: &str) -> Value {
  json!({
    "id": id,
    "name": name,
    "description": null,
    "price": 25.0,
    "categoryId": null,
    "categoryName": null,
    "active": null,
    "createdAt": null,
    "createdBy": null,
    "updatedAt": null,
    "updatedBy": null
  })
}

async fn login(Json(body): Json<Value>) -> Response {
  if body["password"] == "secret" {
    Json(json!({ "token": "stub-token", "username": body["username"], "role": "ADMIN" })).into_response()
  } else {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Bad credentials" }))).into_response()
  }
}

async fn list_products(State(rec): State<Recorded>, headers: HeaderMap) -> Json<Value> {
  let auth = headers
    .get(AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .map(str::to_string);
  rec.auth_headers.lock().push(auth);
  Json(json!([
    product_json(1, "Laptop Pro", 1),
    product_json(2, "Office Chair", 2),
    uncategorized_product_json(3, "Gift Card")
  ]))
}

async fn count_products() -> Json<Value> {
  Json(json!(15))
}

async fn by_category(Path(id): Path<i64>) -> Response {
  if id == 13 {
    return (StatusCode::OK, "definitely not json").into_response();
  }
  Json(json!([product_json(2, "Office Chair", id)])).into_response()
}

async fn get_product(Path(id): Path<i64>) -> Response {
  if id == 1 {
    Json(product_json(1, "Laptop Pro", 1)).into_response()
  } else {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Product not found" }))).into_response()
  }
}

async fn create_product(State(rec): State<Recorded>, Json(body): Json<Value>) -> Response {
  rec.bodies.lock().push(body.clone());
  let name = body["name"].as_str().unwrap_or_default().to_string();
  (StatusCode::CREATED, Json(product_json(3, &name, 1))).into_response()
}

async fn update_product(Path(id): Path<i64>, State(rec): State<Recorded>, Json(body): Json<Value>) -> Json<Value> {
  rec.bodies.lock().push(body.clone());
  Json(product_json(id, body["name"].as_str().unwrap_or_default(), 1))
}

async fn delete_product(Path(id): Path<i64>) -> Response {
  if id == 1 {
    StatusCode::NO_CONTENT.into_response()
  } else {
    (StatusCode::INTERNAL_SERVER_ERROR, "oops").into_response()
  }
}

async fn list_categories() -> Json<Value> {
  Json(json!([
    { "id": 1, "name": "Electronics", "description": "Gadgets", "active": true },
    { "id": 2, "name": "Furniture", "active": true }
  ]))
}

async fn spawn_stub() -> (String, Recorded) {
  let recorded = Recorded::default();
  let app = Router::new()
    .route("/api/auth/login", post(login))
    .route("/api/products", get(list_products).post(create_product))
    .route("/api/products/count", get(count_products))
    .route("/api/products/category/{id}", get(by_category))
    .route("/api/products/{id}", get(get_product).put(update_product).delete(delete_product))
    .route("/api/categories", get(list_categories))
    .with_state(recorded.clone());

  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, app).await.unwrap();
  });
  (format!("http://{}/api", addr), recorded)
}

fn gateway(base_url: &str, session: Option<Session>) -> HttpGateway {
  let options = HttpGatewayOptions {
    base_url: base_url.to_string(),
    ..Default::default()
  };
  HttpGateway::new(options, session).unwrap()
}

// --- Tests ---

#[test]
fn test_base_url_is_normalized() {
  setup_tracing();
  let gw = gateway("http://catalog.local/api/", None);
  assert_eq!(gw.base_url(), "http://catalog.local/api");

  let options = HttpGatewayOptions {
    base_url: "/".to_string(),
    user_agent: None,
  };
  assert!(matches!(HttpGateway::new(options, None), Err(CatalogError::Validation(_))));
  assert_eq!(HttpGatewayOptions::default().base_url, "http://localhost:8080/api");
}

#[tokio::test]
async fn test_login_then_bearer_token_on_later_requests() {
  setup_tracing();
  let (base_url, recorded) = spawn_stub().await;
  let session = Session::in_memory();
  let gw = gateway(&base_url, Some(session.clone()));

  gw.list_products().await.unwrap();
  assert_eq!(recorded.last_auth(), None, "No token before login");

  let login = gw.login(&LoginRequest::new("admin", "secret")).await.unwrap();
  assert_eq!(login.username, "admin");
  session.store(&login).unwrap();

  let products = gw.list_products().await.unwrap();
  assert_eq!(products.len(), 3);
  assert_eq!(products[1].category_name.as_deref(), Some("Furniture"));
  assert!(products[0].created_at.is_some());
  assert_eq!(recorded.last_auth().as_deref(), Some("Bearer stub-token"));
}

#[tokio::test]
async fn test_login_rejection_carries_server_message() {
  setup_tracing();
  let (base_url, _) = spawn_stub().await;
  let gw = gateway(&base_url, None);

  let err = gw.login(&LoginRequest::new("admin", "wrong")).await.unwrap_err();

  assert_eq!(err.status, Some(401));
  assert_eq!(err.server_message.as_deref(), Some("Bad credentials"));
}

#[tokio::test]
async fn test_create_and_update_send_camel_case_bodies() {
  setup_tracing();
  let (base_url, recorded) = spawn_stub().await;
  let gw = gateway(&base_url, None);
  let req = ProductRequest {
    name: "Monitor".to_string(),
    description: "27 inch".to_string(),
    price: 399.99,
    category_id: 1,
  };

  let created = gw.create_product(&req).await.unwrap();
  assert_eq!(created.id, 3);
  assert_eq!(created.name, "Monitor");
  assert_eq!(
    recorded.last_body(),
    Some(json!({ "name": "Monitor", "description": "27 inch", "price": 399.99, "categoryId": 1 }))
  );

  let renamed = ProductRequest {
    name: "Laptop Pro Max".to_string(),
    ..req
  };
  let updated = gw.update_product(1, &renamed).await.unwrap();
  assert_eq!(updated.id, 1);
  assert_eq!(updated.name, "Laptop Pro Max");
  assert_eq!(recorded.last_body().unwrap()["name"], "Laptop Pro Max");
}

#[tokio::test]
async fn test_read_endpoints() {
  setup_tracing();
  let (base_url, _) = spawn_stub().await;
  let gw = gateway(&base_url, None);

  assert_eq!(gw.count_products().await.unwrap(), 15);
  assert_eq!(gw.get_product(1).await.unwrap().name, "Laptop Pro");

  let categories = gw.list_categories().await.unwrap();
  assert_eq!(categories.len(), 2);
  assert_eq!(categories[1].description, None);

  let furniture = gw.list_products_by_category(2).await.unwrap();
  assert_eq!(furniture[0].category_id, 2);
}

#[tokio::test]
async fn test_error_statuses_are_mapped() {
  setup_tracing();
  let (base_url, _) = spawn_stub().await;
  let gw = gateway(&base_url, None);

  let missing = gw.get_product(99).await.unwrap_err();
  assert_eq!(missing.status, Some(404));
  assert_eq!(missing.server_message.as_deref(), Some("Product not found"));

  gw.delete_product(1).await.expect("204 is a success");

  let failed = gw.delete_product(2).await.unwrap_err();
  assert_eq!(failed.status, Some(500));
  assert_eq!(failed.server_message, None, "A non-JSON body carries no message");
  assert_eq!(failed.to_string(), "Request failed with status code 500");
}

#[tokio::test]
async fn test_undecodable_body_is_a_decode_error() {
  setup_tracing();
  let (base_url, _) = spawn_stub().await;
  let gw = gateway(&base_url, None);

  let err = gw.list_products_by_category(13).await.unwrap_err();

  assert_eq!(err.status, Some(200));
  assert_eq!(err.server_message, None);
  assert!(err.detail.contains("could not be decoded"));
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
  setup_tracing();
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);
  let gw = gateway(&format!("http://{}/api", addr), None);

  let err = gw.list_products().await.unwrap_err();

  assert_eq!(err.status, None);
  assert_eq!(err.server_message, None);
  assert_eq!(
    CatalogError::from(err).user_message("Failed to load products"),
    "Failed to load products"
  );
}

#[tokio::test]
async fn test_null_category_and_active_decode_to_defaults() {
  setup_tracing();
  let (base_url, _) = spawn_stub().await;
  let gw = gateway(&base_url, None);

  let products = gw.list_products().await.expect("one uncategorized row must not fail the list");

  let gift = &products[2];
  assert_eq!(gift.name, "Gift Card");
  assert_eq!(gift.category_id, NO_CATEGORY);
  assert_eq!(gift.category_name, None);
  assert!(!gift.active);
  assert!(products[0].active);
}
