// catalog_admin/src/pages/login.rs

use crate::error::CatalogResult;
use crate::gateway::CatalogGateway;
use crate::model::{LoginRequest, LoginResponse};
use crate::session::Session;
use crate::state::Shared;
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// Shown for any login failure, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Default)]
struct LoginState {
  loading: bool,
  error: Option<String>,
}

/// Login screen. A successful submit persists the session; navigating to the
/// home page afterwards is up to the host.
pub struct LoginPage<G: CatalogGateway> {
  gateway: Arc<G>,
  session: Session,
  state: Shared<LoginState>,
}

impl<G: CatalogGateway> LoginPage<G> {
  pub fn new(gateway: Arc<G>, session: Session) -> Self {
    Self {
      gateway,
      session,
      state: Shared::default(),
    }
  }

  #[instrument(name = "LoginPage::submit", skip(self, password), err(Display))]
  pub async fn submit(&self, username: &str, password: &str) -> CatalogResult<LoginResponse> {
    self.state.update(|s| {
      s.error = None;
      s.loading = true;
    });

    let request = LoginRequest::new(username, password);
    let result = match self.gateway.login(&request).await {
      Ok(login) => self.session.store(&login).map(|_| login),
      Err(remote) => Err(remote.into()),
    };

    self.state.update(|s| {
      s.loading = false;
      if let Err(e) = &result {
        event!(Level::ERROR, error = %e, "Login error");
        s.error = Some(INVALID_CREDENTIALS.to_string());
      }
    });
    result
  }

  pub fn error(&self) -> Option<String> {
    self.state.read().error.clone()
  }

  pub fn is_loading(&self) -> bool {
    self.state.read().loading
  }

  pub fn session(&self) -> &Session {
    &self.session
  }
}
