// catalog_admin/src/model/auth.rs

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
  pub username: String,
  pub password: String,
}

impl LoginRequest {
  pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      username: username.into(),
      password: password.into(),
    }
  }
}

impl std::fmt::Debug for LoginRequest {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("LoginRequest")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

/// Successful login: the bearer token plus who the server says we are.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
  pub token: String,
  pub username: String,
  pub role: String,
}

impl std::fmt::Debug for LoginResponse {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("LoginResponse")
      .field("token", &"<redacted>")
      .field("username", &self.username)
      .field("role", &self.role)
      .finish()
  }
}
