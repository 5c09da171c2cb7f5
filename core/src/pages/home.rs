// catalog_admin/src/pages/home.rs

use crate::gateway::CatalogGateway;
use crate::session::Session;
use crate::state::Shared;
use std::sync::Arc;
use tracing::{event, instrument, Level};

#[derive(Debug)]
struct HomeState {
  count: u64,
  loading: bool,
}

/// Home dashboard: greets the user and shows how many products exist.
pub struct HomeDashboard<G: CatalogGateway> {
  gateway: Arc<G>,
  state: Shared<HomeState>,
}

impl<G: CatalogGateway> HomeDashboard<G> {
  pub fn new(gateway: Arc<G>) -> Self {
    Self {
      gateway,
      state: Shared::new(HomeState { count: 0, loading: true }),
    }
  }

  /// Fetches the product count. A failure is logged and the count stays as
  /// it was; loading ends either way.
  #[instrument(name = "HomeDashboard::load", skip(self))]
  pub async fn load(&self) {
    let result = self.gateway.count_products().await;
    self.state.update(|s| {
      match result {
        Ok(count) => s.count = count,
        Err(e) => event!(Level::WARN, error = %e, "Failed to load product count"),
      }
      s.loading = false;
    });
  }

  pub fn count(&self) -> u64 {
    self.state.read().count
  }

  pub fn count_display(&self) -> String {
    self.count().to_string()
  }

  pub fn is_loading(&self) -> bool {
    self.state.read().loading
  }

  pub fn greeting(&self, session: &Session) -> String {
    format!("Hi, {}!", session.username().unwrap_or_default())
  }
}
